//! Frame resolution from the active constraint set.
//!
//! This is the stand-in for a host toolkit's constraint solver: a
//! deterministic fixed-point propagation over the `Equal` constraints
//! installed in a view subtree. Each view contributes four primitive
//! variables (left, top, width, height) in the root's coordinate space;
//! composite attributes (trailing, center-x, ...) lower onto them. The
//! root's own frame is externally owned and seeds the system as given.
//!
//! Resolution is best-effort, the way production solvers are: when two
//! equality constraints disagree the first activated wins and a
//! [`SolveError::Conflict`] is reported; constraints that reach outside the
//! root's hierarchy are skipped with [`SolveError::ForeignItem`]. Inequality
//! relations are carried on constraints but not enforced by this engine.

use std::collections::HashSet;

use indexmap::IndexMap;
use thiserror::Error;
use trellis_core::Rect;

use crate::constraint::{Attribute, Constraint, Relation};
use crate::view::View;

/// One of the four per-view layout variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Left,
    Top,
    Width,
    Height,
}

/// A diagnostic from a layout pass. Never fatal; the pass continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error(
        "conflicting constraints for {view}.{primitive:?} (identifier {identifier:?}): \
         kept {kept}, rejected {rejected}"
    )]
    Conflict {
        view: String,
        primitive: Primitive,
        kept: f64,
        rejected: f64,
        identifier: Option<String>,
    },

    #[error("constraint on {view} (identifier {identifier:?}) references a view outside the layout hierarchy")]
    ForeignItem {
        view: String,
        identifier: Option<String>,
    },
}

/// Ordered store of resolved primitives, keyed by view identity.
type Vars = IndexMap<(usize, Primitive), f64>;

const EPSILON: f64 = 1e-6;

enum Assign {
    /// A new primitive value was recorded.
    Progress,
    /// The value was already known and agrees.
    Settled,
    /// Not enough information yet; retry next sweep.
    Pending,
    Conflict {
        primitive: Primitive,
        kept: f64,
        rejected: f64,
    },
}

/// Run one layout pass over `root`'s subtree. Returns diagnostics; resolved
/// frames are written back to the views, and dirty flags are cleared.
pub(crate) fn run_pass(root: &View) -> Vec<SolveError> {
    let mut views = Vec::new();
    collect_subtree(root, &mut views);
    let in_tree: HashSet<usize> = views.iter().map(View::key).collect();

    let mut diagnostics = Vec::new();
    let mut constraints = Vec::new();
    for view in &views {
        for constraint in view.constraints() {
            let item_in_tree = in_tree.contains(&constraint.item().key());
            let to_in_tree = constraint
                .to_item()
                .map_or(true, |to| in_tree.contains(&to.key()));
            if item_in_tree && to_in_tree {
                constraints.push(constraint);
            } else {
                diagnostics.push(SolveError::ForeignItem {
                    view: constraint.item().display_name(),
                    identifier: constraint.identifier(),
                });
            }
        }
    }

    tracing::trace!(
        views = views.len(),
        constraints = constraints.len(),
        "layout pass"
    );

    let mut vars = Vars::new();
    let root_frame = root.frame();
    let root_key = root.key();
    vars.insert((root_key, Primitive::Left), root_frame.min_x());
    vars.insert((root_key, Primitive::Top), root_frame.min_y());
    vars.insert((root_key, Primitive::Width), root_frame.size.width);
    vars.insert((root_key, Primitive::Height), root_frame.size.height);

    // Fixed point: each sweep settles every constraint whose right-hand side
    // has become computable. One equation resolves at most one unknown, so
    // the loop is bounded by the number of primitives.
    let mut done = vec![false; constraints.len()];
    loop {
        let mut progressed = false;
        for (index, constraint) in constraints.iter().enumerate() {
            if done[index] || constraint.relation() != Relation::Equal {
                continue;
            }
            let Some(rhs) = right_hand_value(constraint, &vars) else {
                continue;
            };
            match assign(&constraint.item(), constraint.attribute(), rhs, &mut vars) {
                Assign::Progress => {
                    done[index] = true;
                    progressed = true;
                }
                Assign::Settled => done[index] = true,
                Assign::Pending => {}
                Assign::Conflict {
                    primitive,
                    kept,
                    rejected,
                } => {
                    done[index] = true;
                    diagnostics.push(SolveError::Conflict {
                        view: constraint.item().display_name(),
                        primitive,
                        kept,
                        rejected,
                        identifier: constraint.identifier(),
                    });
                }
            }
        }
        if !progressed {
            break;
        }
    }

    write_frames(root, (root_frame.min_x(), root_frame.min_y()), &vars, true);

    for view in &views {
        view.inner.borrow_mut().needs_layout = false;
    }

    diagnostics
}

fn collect_subtree(view: &View, out: &mut Vec<View>) {
    out.push(view.clone());
    for subview in view.subviews() {
        collect_subtree(&subview, out);
    }
}

/// Evaluate the right-hand side of a constraint, if its inputs are known.
fn right_hand_value(constraint: &Constraint, vars: &Vars) -> Option<f64> {
    match constraint.to_item() {
        None => Some(constraint.constant()),
        Some(to_item) => {
            let to_attribute = constraint.to_attribute()?;
            let value = attribute_value(&to_item, to_attribute, vars)?;
            Some(value * constraint.multiplier() + constraint.constant())
        }
    }
}

/// Compose an attribute's value from resolved primitives, if possible.
fn attribute_value(view: &View, attribute: Attribute, vars: &Vars) -> Option<f64> {
    let key = view.key();
    let get = |primitive| vars.get(&(key, primitive)).copied();
    match attribute {
        Attribute::Leading => get(Primitive::Left),
        Attribute::Top => get(Primitive::Top),
        Attribute::Width => get(Primitive::Width),
        Attribute::Height => get(Primitive::Height),
        Attribute::Trailing => Some(get(Primitive::Left)? + get(Primitive::Width)?),
        Attribute::Bottom => Some(get(Primitive::Top)? + get(Primitive::Height)?),
        Attribute::CenterX => Some(get(Primitive::Left)? + get(Primitive::Width)? / 2.0),
        Attribute::CenterY => Some(get(Primitive::Top)? + get(Primitive::Height)? / 2.0),
    }
}

/// Lower `view.attribute = value` onto primitive variables.
fn assign(view: &View, attribute: Attribute, value: f64, vars: &mut Vars) -> Assign {
    let key = view.key();
    match attribute {
        Attribute::Leading => set(vars, key, Primitive::Left, value),
        Attribute::Top => set(vars, key, Primitive::Top, value),
        Attribute::Width => set(vars, key, Primitive::Width, value),
        Attribute::Height => set(vars, key, Primitive::Height, value),
        Attribute::Trailing => assign_edge_sum(vars, key, Primitive::Left, Primitive::Width, value),
        Attribute::Bottom => assign_edge_sum(vars, key, Primitive::Top, Primitive::Height, value),
        Attribute::CenterX => assign_center(vars, key, Primitive::Left, Primitive::Width, value),
        Attribute::CenterY => assign_center(vars, key, Primitive::Top, Primitive::Height, value),
    }
}

fn set(vars: &mut Vars, key: usize, primitive: Primitive, value: f64) -> Assign {
    match vars.get(&(key, primitive)) {
        Some(existing) if (existing - value).abs() <= EPSILON => Assign::Settled,
        Some(existing) => Assign::Conflict {
            primitive,
            kept: *existing,
            rejected: value,
        },
        None => {
            vars.insert((key, primitive), value);
            Assign::Progress
        }
    }
}

/// `position + extent = value`: resolve whichever side is still unknown.
fn assign_edge_sum(
    vars: &mut Vars,
    key: usize,
    position: Primitive,
    extent: Primitive,
    value: f64,
) -> Assign {
    let known_position = vars.get(&(key, position)).copied();
    let known_extent = vars.get(&(key, extent)).copied();
    match (known_position, known_extent) {
        (Some(p), _) => set(vars, key, extent, value - p),
        (None, Some(e)) => set(vars, key, position, value - e),
        (None, None) => Assign::Pending,
    }
}

/// `position + extent / 2 = value`: resolve whichever side is still unknown.
fn assign_center(
    vars: &mut Vars,
    key: usize,
    position: Primitive,
    extent: Primitive,
    value: f64,
) -> Assign {
    let known_position = vars.get(&(key, position)).copied();
    let known_extent = vars.get(&(key, extent)).copied();
    match (known_position, known_extent) {
        (_, Some(e)) => set(vars, key, position, value - e / 2.0),
        (Some(p), None) => set(vars, key, extent, 2.0 * (value - p)),
        (None, None) => Assign::Pending,
    }
}

/// Write resolved frames back to the tree, top-down. Views with no resolved
/// primitives keep their existing frame; within a touched view, unresolved
/// primitives default to zero.
fn write_frames(view: &View, parent_origin: (f64, f64), vars: &Vars, is_root: bool) {
    let key = view.key();
    let mut frame = view.frame();

    if !is_root {
        let get = |primitive| vars.get(&(key, primitive)).copied();
        let touched = [
            Primitive::Left,
            Primitive::Top,
            Primitive::Width,
            Primitive::Height,
        ]
        .iter()
        .any(|primitive| vars.contains_key(&(key, *primitive)));

        if touched {
            frame = Rect::new(
                get(Primitive::Left).map_or(0.0, |left| left - parent_origin.0),
                get(Primitive::Top).map_or(0.0, |top| top - parent_origin.1),
                get(Primitive::Width).unwrap_or(0.0),
                get(Primitive::Height).unwrap_or(0.0),
            );
            view.set_frame(frame);
        }
    }

    let origin = if is_root {
        (frame.min_x(), frame.min_y())
    } else {
        (
            parent_origin.0 + frame.min_x(),
            parent_origin.1 + frame.min_y(),
        )
    };

    for subview in view.subviews() {
        write_frames(&subview, origin, vars, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activate(constraints: &[Constraint]) {
        Constraint::activate_all(constraints);
    }

    #[test]
    fn inset_subview_resolves() {
        let root = View::named("root");
        let child = View::named("child");
        root.add_subview(&child);

        activate(&[
            child.width().equal_to_constant(40.0),
            child.height().equal_to_constant(40.0),
            child.leading().equal_to_offset(&root.leading(), 20.0),
            child.top().equal_to_offset(&root.top(), 20.0),
        ]);

        root.layout_if_needed();
        assert_eq!(child.frame(), Rect::new(20.0, 20.0, 40.0, 40.0));
    }

    #[test]
    fn trailing_pins_derive_width() {
        let root = View::named("root");
        root.set_frame(Rect::new(0.0, 0.0, 100.0, 50.0));
        let child = View::new();
        root.add_subview(&child);

        activate(&[
            child.leading().equal_to_offset(&root.leading(), 10.0),
            child.trailing().equal_to_offset(&root.trailing(), -10.0),
            child.top().equal_to(&root.top()),
            child.bottom().equal_to(&root.bottom()),
        ]);

        root.layout_if_needed();
        assert_eq!(child.frame(), Rect::new(10.0, 0.0, 80.0, 50.0));
    }

    #[test]
    fn centering_with_known_extent() {
        let root = View::new();
        root.set_frame(Rect::new(0.0, 0.0, 100.0, 100.0));
        let child = View::new();
        root.add_subview(&child);

        activate(&[
            child.width().equal_to_constant(40.0),
            child.height().equal_to_constant(20.0),
            child.center_x().equal_to(&root.center_x()),
            child.center_y().equal_to(&root.center_y()),
        ]);

        root.layout_if_needed();
        assert_eq!(child.frame(), Rect::new(30.0, 40.0, 40.0, 20.0));
    }

    #[test]
    fn scaled_dimension_resolves() {
        let root = View::new();
        root.set_frame(Rect::new(0.0, 0.0, 200.0, 100.0));
        let child = View::new();
        root.add_subview(&child);

        activate(&[
            child.width().equal_to_scaled(&root.width(), 0.5, -10.0),
            child.height().equal_to_constant(10.0),
            child.leading().equal_to(&root.leading()),
            child.top().equal_to(&root.top()),
        ]);

        root.layout_if_needed();
        assert_eq!(child.frame(), Rect::new(0.0, 0.0, 90.0, 10.0));
    }

    #[test]
    fn sibling_chain_resolves_across_sweeps() {
        let root = View::new();
        root.set_frame(Rect::new(0.0, 0.0, 320.0, 100.0));
        let first = View::named("first");
        let second = View::named("second");
        root.add_subview(&first);
        root.add_subview(&second);

        // Deliberately activated in an order that needs two sweeps.
        activate(&[
            second.leading().equal_to_offset(&first.trailing(), 8.0),
            second.width().equal_to_constant(50.0),
            first.leading().equal_to(&root.leading()),
            first.width().equal_to_constant(50.0),
        ]);

        root.layout_if_needed();
        assert_eq!(first.frame().min_x(), 0.0);
        assert_eq!(second.frame().min_x(), 58.0);
    }

    #[test]
    fn conflicting_widths_keep_the_first() {
        let root = View::new();
        let child = View::named("child");
        root.add_subview(&child);

        let first = child.width().equal_to_constant(40.0);
        let second = child.width().equal_to_constant(50.0);
        second.set_identifier("loser");
        activate(&[first, second]);

        let diagnostics = root.layout_diagnostics();
        assert_eq!(
            diagnostics,
            vec![SolveError::Conflict {
                view: "child".into(),
                primitive: Primitive::Width,
                kept: 40.0,
                rejected: 50.0,
                identifier: Some("loser".into()),
            }]
        );
        assert_eq!(child.frame().size.width, 40.0);
    }

    #[test]
    fn foreign_items_are_skipped() {
        let root = View::new();
        let child = View::named("child");
        root.add_subview(&child);
        let outsider = View::named("outsider");

        let foreign = child.leading().equal_to(&outsider.leading());
        let local = child.width().equal_to_constant(30.0);
        activate(&[foreign, local]);

        let diagnostics = root.layout_diagnostics();
        assert!(matches!(
            diagnostics.as_slice(),
            [SolveError::ForeignItem { view, .. }] if view.as_str() == "child"
        ));
        assert_eq!(child.frame().size.width, 30.0);
    }

    #[test]
    fn unconstrained_views_keep_their_frame() {
        let root = View::new();
        let child = View::new();
        child.set_frame(Rect::new(5.0, 5.0, 10.0, 10.0));
        root.add_subview(&child);

        root.set_needs_layout();
        root.layout_if_needed();
        assert_eq!(child.frame(), Rect::new(5.0, 5.0, 10.0, 10.0));
    }
}
