//! Provenance identifiers for debugging and test assertions.

use std::rc::Rc;

use trellis_view::{Constraint, View};

use crate::laying_out::LayingOut;

/// Stamps an identifier onto every constraint produced by a child layout.
///
/// The identifier is written in place on the freshly produced constraints of
/// each evaluation, either verbatim or, in numbered mode, suffixed with
/// the constraint's position in output order: `"Menu [0]"`, `"Menu [1]"`, …
#[derive(Clone)]
pub struct IdentifierLayout {
    identifier: String,
    numbered: bool,
    layout: Rc<dyn LayingOut>,
}

impl IdentifierLayout {
    /// Stamp `identifier` verbatim onto every constraint from `layout`.
    pub fn new(identifier: impl Into<String>, layout: impl LayingOut + 'static) -> Self {
        Self {
            identifier: identifier.into(),
            numbered: false,
            layout: Rc::new(layout),
        }
    }

    /// Stamp `identifier` with a 0-based positional suffix.
    pub fn numbered(identifier: impl Into<String>, layout: impl LayingOut + 'static) -> Self {
        Self {
            identifier: identifier.into(),
            numbered: true,
            layout: Rc::new(layout),
        }
    }
}

impl LayingOut for IdentifierLayout {
    fn constraints(&self, view: &View) -> Vec<Constraint> {
        let constraints = self.layout.constraints(view);
        for (index, constraint) in constraints.iter().enumerate() {
            if self.numbered {
                constraint.set_identifier(format!("{} [{}]", self.identifier, index));
            } else {
                constraint.set_identifier(self.identifier.clone());
            }
        }
        constraints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;

    fn three_constraints(view: &View) -> Vec<Constraint> {
        vec![
            view.width().equal_to_constant(1.0),
            view.height().equal_to_constant(2.0),
            view.width().at_least_constant(0.0),
        ]
    }

    #[test]
    fn plain_identifier_applies_to_all() {
        let view = View::new();
        let inner = three_constraints(&view);
        let layout = IdentifierLayout::new("Test", Layout::fixed(inner.clone()));

        let constraints = layout.constraints(&view);
        assert_eq!(constraints.len(), inner.len());
        for constraint in &constraints {
            assert_eq!(constraint.identifier().as_deref(), Some("Test"));
        }
    }

    #[test]
    fn numbered_identifiers_follow_output_order() {
        let view = View::new();
        let layout = IdentifierLayout::numbered("Test", Layout::fixed(three_constraints(&view)));

        let identifiers: Vec<Option<String>> = layout
            .constraints(&view)
            .iter()
            .map(Constraint::identifier)
            .collect();
        assert_eq!(
            identifiers,
            vec![
                Some("Test [0]".into()),
                Some("Test [1]".into()),
                Some("Test [2]".into()),
            ]
        );
    }

    #[test]
    fn restamps_on_every_evaluation() {
        let view = View::new();
        let inner = three_constraints(&view);
        let layout = IdentifierLayout::new("Fresh", Layout::fixed(inner.clone()));

        layout.constraints(&view);
        inner[0].set_identifier("Stale");
        layout.constraints(&view);
        assert_eq!(inner[0].identifier().as_deref(), Some("Fresh"));
    }
}
