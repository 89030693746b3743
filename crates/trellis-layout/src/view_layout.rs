//! The controller that owns a view's active constraint set.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use trellis_view::{Constraint, View};

use crate::laying_out::LayingOut;

/// Owns a root view, an ordered list of top-level layouts, and the
/// constraints currently active on the view.
///
/// [`layout`](ViewLayout::layout) is the single operation: it retracts the
/// previous constraint set, re-evaluates the entire layout tree from
/// scratch against current external state, activates the fresh set, and
/// drives a layout pass on the root view. Call it whenever anything a
/// handler or predicate reads may have changed; there is no incremental
/// invalidation to manage.
///
/// The controller is single-threaded and must be driven from the thread
/// that owns the view tree. A `layout()` call arriving while one is already
/// in progress on the same controller, which is possible only via a reentrant
/// call from inside a handler, is dropped rather than queued.
pub struct ViewLayout {
    root_view: View,
    layouts: Vec<Rc<dyn LayingOut>>,
    active_constraints: RefCell<Vec<Constraint>>,
    laying_out: Cell<bool>,
}

impl ViewLayout {
    /// Create a controller with a single top-level layout.
    pub fn new(root_view: &View, layout: impl LayingOut + 'static) -> Self {
        Self::with_layouts(root_view, vec![Rc::new(layout)])
    }

    /// Create a controller with an ordered list of top-level layouts.
    pub fn with_layouts(root_view: &View, layouts: Vec<Rc<dyn LayingOut>>) -> Self {
        Self {
            root_view: root_view.clone(),
            layouts,
            active_constraints: RefCell::new(Vec::new()),
            laying_out: Cell::new(false),
        }
    }

    /// The view this controller drives.
    pub fn root_view(&self) -> &View {
        &self.root_view
    }

    /// The constraints activated by the most recent `layout()` call.
    pub fn active_constraints(&self) -> Vec<Constraint> {
        self.active_constraints.borrow().clone()
    }

    /// True while a `layout()` call is in progress on this controller.
    pub fn is_laying_out(&self) -> bool {
        self.laying_out.get()
    }

    /// Retract the previous constraint set, re-evaluate every layout in
    /// declaration order, activate the result, and run a layout pass.
    ///
    /// Reentrant calls are dropped. If a handler panics mid-evaluation the
    /// previous constraints stay deactivated and no new set is activated: the
    /// view keeps no constraints from this controller until the next
    /// successful call. The controller itself remains usable.
    pub fn layout(&self) {
        if self.laying_out.get() {
            tracing::trace!("dropping reentrant layout() call");
            return;
        }
        self.laying_out.set(true);
        let _reset = ResetOnDrop(&self.laying_out);

        Constraint::deactivate_all(&self.active_constraints.borrow());

        let fresh: Vec<Constraint> = self
            .layouts
            .iter()
            .flat_map(|layout| layout.constraints(&self.root_view))
            .collect();

        Constraint::activate_all(&fresh);
        tracing::trace!(constraints = fresh.len(), "activated fresh constraint set");
        *self.active_constraints.borrow_mut() = fresh;

        self.root_view.set_needs_layout();
        self.root_view.layout_if_needed();
    }
}

struct ResetOnDrop<'a>(&'a Cell<bool>);

impl Drop for ResetOnDrop<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
