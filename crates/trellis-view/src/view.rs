//! The view hierarchy.
//!
//! A [`View`] is a cheaply clonable handle to a node in a retained tree.
//! Equality is handle identity: two `View` values compare equal when they
//! point at the same node. The tree is single-threaded by construction
//! (`Rc`/`RefCell`), matching the affinity requirement of the layout layer.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;
use trellis_core::{Rect, TraitCollection};

use crate::constraint::Constraint;
use crate::engine::{self, SolveError};

pub(crate) struct ViewInner {
    pub(crate) name: Option<String>,
    pub(crate) frame: Rect,
    pub(crate) subviews: Vec<View>,
    pub(crate) superview: Option<Weak<RefCell<ViewInner>>>,
    pub(crate) traits: Option<TraitCollection>,
    /// Constraints currently installed on (owned by) this view.
    pub(crate) installed: SmallVec<[Constraint; 4]>,
    pub(crate) needs_layout: bool,
}

/// A node in the view hierarchy.
#[derive(Clone)]
pub struct View {
    pub(crate) inner: Rc<RefCell<ViewInner>>,
}

impl View {
    /// Create a detached view with a zero frame.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ViewInner {
                name: None,
                frame: Rect::ZERO,
                subviews: Vec::new(),
                superview: None,
                traits: None,
                installed: SmallVec::new(),
                needs_layout: false,
            })),
        }
    }

    /// Create a detached view with a debug name.
    pub fn named(name: impl Into<String>) -> Self {
        let view = Self::new();
        view.inner.borrow_mut().name = Some(name.into());
        view
    }

    /// The debug name, if one was given.
    pub fn name(&self) -> Option<String> {
        self.inner.borrow().name.clone()
    }

    pub(crate) fn display_name(&self) -> String {
        self.inner
            .borrow()
            .name
            .clone()
            .unwrap_or_else(|| format!("view@{:p}", Rc::as_ptr(&self.inner)))
    }

    /// Stable key for this node, for use in side tables.
    pub(crate) fn key(&self) -> usize {
        Rc::as_ptr(&self.inner) as usize
    }

    /// Append `subview` as the last child of this view.
    ///
    /// If `subview` already has a superview it is moved, not duplicated.
    pub fn add_subview(&self, subview: &View) {
        debug_assert!(
            !self.is_descendant_of(subview),
            "adding an ancestor as a subview would create a cycle"
        );
        subview.remove_from_superview();
        subview.inner.borrow_mut().superview = Some(Rc::downgrade(&self.inner));
        self.inner.borrow_mut().subviews.push(subview.clone());
    }

    /// Detach this view from its superview, if it has one.
    pub fn remove_from_superview(&self) {
        let superview = self.superview();
        if let Some(parent) = superview {
            parent
                .inner
                .borrow_mut()
                .subviews
                .retain(|child| child != self);
        }
        self.inner.borrow_mut().superview = None;
    }

    /// The direct children of this view, in order.
    pub fn subviews(&self) -> Vec<View> {
        self.inner.borrow().subviews.clone()
    }

    /// The parent view, if attached.
    pub fn superview(&self) -> Option<View> {
        self.inner
            .borrow()
            .superview
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|inner| View { inner })
    }

    /// True when `self` is `other` or sits below it in the hierarchy.
    pub fn is_descendant_of(&self, other: &View) -> bool {
        let mut current = Some(self.clone());
        while let Some(view) = current {
            if view == *other {
                return true;
            }
            current = view.superview();
        }
        false
    }

    /// The topmost ancestor (self when detached).
    pub fn root(&self) -> View {
        let mut current = self.clone();
        while let Some(parent) = current.superview() {
            current = parent;
        }
        current
    }

    /// The view's frame in its superview's coordinate space.
    pub fn frame(&self) -> Rect {
        self.inner.borrow().frame
    }

    /// Set the frame directly, outside of constraint resolution.
    ///
    /// The root view's frame is externally owned: the layout engine reads it
    /// as given and never writes it.
    pub fn set_frame(&self, frame: Rect) {
        self.inner.borrow_mut().frame = frame;
    }

    /// Attach an explicit trait environment to this view.
    pub fn set_trait_collection(&self, traits: TraitCollection) {
        self.inner.borrow_mut().traits = Some(traits);
    }

    /// The current trait environment snapshot.
    ///
    /// Resolved fresh on every call: the nearest ancestor (including self)
    /// with an explicit collection wins; a detached, unconfigured tree
    /// yields the empty collection.
    pub fn current_traits(&self) -> TraitCollection {
        let mut current = Some(self.clone());
        while let Some(view) = current {
            if let Some(traits) = view.inner.borrow().traits {
                return traits;
            }
            current = view.superview();
        }
        TraitCollection::default()
    }

    /// The constraints currently installed on this view.
    pub fn constraints(&self) -> Vec<Constraint> {
        self.inner.borrow().installed.iter().cloned().collect()
    }

    /// Mark this view as needing a layout pass.
    pub fn set_needs_layout(&self) {
        self.inner.borrow_mut().needs_layout = true;
    }

    /// Run a layout pass over this view's subtree if anything is dirty.
    ///
    /// Constraint diagnostics (conflicts, foreign items) are logged at warn
    /// level and otherwise ignored; resolution is best-effort in the way a
    /// production solver is.
    pub fn layout_if_needed(&self) {
        if !self.subtree_needs_layout() {
            return;
        }
        for diagnostic in engine::run_pass(self) {
            tracing::warn!("{diagnostic}");
        }
    }

    /// Run a layout pass unconditionally and return its diagnostics.
    pub fn layout_diagnostics(&self) -> Vec<SolveError> {
        engine::run_pass(self)
    }

    fn subtree_needs_layout(&self) -> bool {
        if self.inner.borrow().needs_layout {
            return true;
        }
        self.subviews()
            .iter()
            .any(|subview| subview.subtree_needs_layout())
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for View {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for View {}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("View")
            .field("name", &inner.name)
            .field("frame", &inner.frame)
            .field("subviews", &inner.subviews.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::{InterfaceIdiom, SizeClass};

    #[test]
    fn hierarchy_links() {
        let root = View::named("root");
        let child = View::named("child");
        let grandchild = View::new();

        root.add_subview(&child);
        child.add_subview(&grandchild);

        assert_eq!(child.superview(), Some(root.clone()));
        assert_eq!(root.subviews(), vec![child.clone()]);
        assert!(grandchild.is_descendant_of(&root));
        assert!(grandchild.is_descendant_of(&grandchild));
        assert!(!root.is_descendant_of(&grandchild));
        assert_eq!(grandchild.root(), root);
    }

    #[test]
    fn add_subview_moves_between_parents() {
        let a = View::named("a");
        let b = View::named("b");
        let child = View::new();

        a.add_subview(&child);
        b.add_subview(&child);

        assert!(a.subviews().is_empty());
        assert_eq!(child.superview(), Some(b));
    }

    #[test]
    fn remove_from_superview_detaches() {
        let root = View::new();
        let child = View::new();
        root.add_subview(&child);

        child.remove_from_superview();
        assert!(root.subviews().is_empty());
        assert!(child.superview().is_none());
    }

    #[test]
    fn traits_inherit_from_nearest_ancestor() {
        let root = View::new();
        let middle = View::new();
        let leaf = View::new();
        root.add_subview(&middle);
        middle.add_subview(&leaf);

        assert_eq!(leaf.current_traits(), TraitCollection::default());

        root.set_trait_collection(TraitCollection::new().with_idiom(InterfaceIdiom::Pad));
        assert_eq!(leaf.current_traits().idiom, Some(InterfaceIdiom::Pad));

        middle.set_trait_collection(
            TraitCollection::new().with_horizontal_size_class(SizeClass::Compact),
        );
        let leaf_traits = leaf.current_traits();
        assert_eq!(leaf_traits.idiom, None);
        assert_eq!(leaf_traits.horizontal_size_class, Some(SizeClass::Compact));
    }

    #[test]
    fn handle_equality_is_identity() {
        let a = View::new();
        let b = View::new();
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
