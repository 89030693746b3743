//! The leaf component: a closure producing constraints.

use std::rc::Rc;

use trellis_view::{Constraint, View};

use crate::laying_out::LayingOut;

/// A leaf layout wrapping a handler function.
#[derive(Clone)]
pub struct Layout {
    handler: Rc<dyn Fn(&View) -> Vec<Constraint>>,
}

impl Layout {
    /// Wrap a handler that generates constraints for a view.
    pub fn new(handler: impl Fn(&View) -> Vec<Constraint> + 'static) -> Self {
        Self {
            handler: Rc::new(handler),
        }
    }

    /// Wrap a fixed, precomputed constraint list; the view argument is
    /// ignored and the same constraint handles are returned every
    /// evaluation.
    ///
    /// Precondition: the constraints must already be deactivated. This is
    /// not checked here; handing in active constraints leads to
    /// double-activation misbehavior at the toolkit level.
    pub fn fixed(constraints: Vec<Constraint>) -> Self {
        Self::new(move |_| constraints.clone())
    }
}

impl LayingOut for Layout {
    fn constraints(&self, view: &View) -> Vec<Constraint> {
        (self.handler)(view)
    }
}
