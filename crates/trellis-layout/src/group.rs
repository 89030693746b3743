//! Ordered concatenation of layouts.

use std::rc::Rc;

use trellis_view::{Constraint, View};

use crate::laying_out::LayingOut;

/// A layout that concatenates the constraints of an ordered list of child
/// layouts.
///
/// Order is significant and preserved: it determines evaluation and
/// activation order, which keeps runs deterministic. It carries no priority
/// meaning for the underlying solver.
#[derive(Clone)]
pub struct LayoutGroup {
    layouts: Vec<Rc<dyn LayingOut>>,
}

impl LayoutGroup {
    /// Create a group from child layouts, kept in order.
    pub fn new(layouts: Vec<Rc<dyn LayingOut>>) -> Self {
        Self { layouts }
    }

    /// The child layouts, in evaluation order.
    pub fn layouts(&self) -> &[Rc<dyn LayingOut>] {
        &self.layouts
    }
}

impl LayingOut for LayoutGroup {
    fn constraints(&self, view: &View) -> Vec<Constraint> {
        self.layouts
            .iter()
            .flat_map(|layout| layout.constraints(view))
            .collect()
    }

    fn as_group(&self) -> Option<&LayoutGroup> {
        Some(self)
    }
}

/// Merge two layouts into a group.
///
/// If either operand is itself a group, its children are spliced in rather
/// than nested, so repeated combination builds a single flat list instead of
/// a deepening tree.
pub fn combine(lhs: impl LayingOut + 'static, rhs: impl LayingOut + 'static) -> LayoutGroup {
    let mut layouts: Vec<Rc<dyn LayingOut>> = Vec::new();
    push_flattened(&mut layouts, Rc::new(lhs));
    push_flattened(&mut layouts, Rc::new(rhs));
    LayoutGroup::new(layouts)
}

fn push_flattened(layouts: &mut Vec<Rc<dyn LayingOut>>, layout: Rc<dyn LayingOut>) {
    match layout.as_group() {
        Some(group) => layouts.extend(group.layouts().iter().cloned()),
        None => layouts.push(layout),
    }
}
