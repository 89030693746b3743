//! Predicate-gated layouts.

use std::rc::Rc;

use trellis_view::{Constraint, View};

use crate::laying_out::LayingOut;
use crate::layout::Layout;

/// Delegates to one of two layouts based on a predicate, or yields nothing.
///
/// The predicate is re-evaluated on every call, with no memoization,
/// so external mutable state (control values, flags) is read fresh each time
/// a [`ViewLayout`](crate::ViewLayout) runs.
#[derive(Clone)]
pub struct ConditionalLayout {
    condition: Rc<dyn Fn(&View) -> bool>,
    layout: Rc<dyn LayingOut>,
    else_layout: Option<Rc<dyn LayingOut>>,
}

impl ConditionalLayout {
    /// Delegate to `layout` when `condition` holds, otherwise yield nothing.
    pub fn new(
        condition: impl Fn(&View) -> bool + 'static,
        layout: impl LayingOut + 'static,
    ) -> Self {
        Self {
            condition: Rc::new(condition),
            layout: Rc::new(layout),
            else_layout: None,
        }
    }

    /// Delegate to `layout` when `condition` holds, else to `else_layout`.
    pub fn with_else(
        condition: impl Fn(&View) -> bool + 'static,
        layout: impl LayingOut + 'static,
        else_layout: impl LayingOut + 'static,
    ) -> Self {
        Self {
            condition: Rc::new(condition),
            layout: Rc::new(layout),
            else_layout: Some(Rc::new(else_layout)),
        }
    }

    /// Sugar over [`Layout::new`] for the primary branch.
    pub fn from_handler(
        condition: impl Fn(&View) -> bool + 'static,
        handler: impl Fn(&View) -> Vec<Constraint> + 'static,
    ) -> Self {
        Self::new(condition, Layout::new(handler))
    }

    /// Sugar over [`Layout::new`] for both branches.
    pub fn from_handlers(
        condition: impl Fn(&View) -> bool + 'static,
        handler: impl Fn(&View) -> Vec<Constraint> + 'static,
        else_handler: impl Fn(&View) -> Vec<Constraint> + 'static,
    ) -> Self {
        Self::with_else(condition, Layout::new(handler), Layout::new(else_handler))
    }

    /// Sugar over [`Layout::fixed`]. The constraints are deactivated first
    /// so it is safe to pass in a list that was previously active.
    pub fn from_constraints(
        condition: impl Fn(&View) -> bool + 'static,
        constraints: Vec<Constraint>,
    ) -> Self {
        Constraint::deactivate_all(&constraints);
        Self::new(condition, Layout::fixed(constraints))
    }

    /// Sugar over [`Layout::fixed`] for both branches, deactivating both
    /// lists first.
    pub fn from_constraints_with_else(
        condition: impl Fn(&View) -> bool + 'static,
        constraints: Vec<Constraint>,
        else_constraints: Vec<Constraint>,
    ) -> Self {
        Constraint::deactivate_all(&constraints);
        Constraint::deactivate_all(&else_constraints);
        Self::with_else(
            condition,
            Layout::fixed(constraints),
            Layout::fixed(else_constraints),
        )
    }
}

impl LayingOut for ConditionalLayout {
    fn constraints(&self, view: &View) -> Vec<Constraint> {
        if (self.condition)(view) {
            self.layout.constraints(view)
        } else if let Some(else_layout) = &self.else_layout {
            else_layout.constraints(view)
        } else {
            Vec::new()
        }
    }
}
