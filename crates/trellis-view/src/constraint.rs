//! Layout constraints.
//!
//! A [`Constraint`] expresses one relationship of the form
//! `item.attribute (==|>=|<=) to_item.to_attribute * multiplier + constant`,
//! or `item.attribute (==|>=|<=) constant` when there is no second item.
//!
//! Constraints are shared handles: cloning a `Constraint` clones the handle,
//! not the relationship, and equality is handle identity. A constraint is
//! created inactive; activating it installs it on the nearest common
//! ancestor of its items (the item itself for self constraints), which is
//! the view a layout pass collects it from.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use crate::view::View;

/// The geometric attribute a constraint refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Leading,
    Trailing,
    Top,
    Bottom,
    Width,
    Height,
    CenterX,
    CenterY,
}

/// How the two sides of a constraint relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Relation {
    #[default]
    Equal,
    GreaterOrEqual,
    LessOrEqual,
}

struct ConstraintInner {
    item: View,
    attribute: Attribute,
    relation: Relation,
    to_item: Option<View>,
    to_attribute: Option<Attribute>,
    multiplier: f64,
    constant: f64,
    identifier: Option<String>,
    /// The view this constraint is installed on while active.
    owner: Option<View>,
}

/// One geometric relationship between views.
#[derive(Clone)]
pub struct Constraint {
    inner: Rc<RefCell<ConstraintInner>>,
}

impl Constraint {
    /// Full-form constructor. Prefer the anchor API for everyday use.
    pub fn new(
        item: View,
        attribute: Attribute,
        relation: Relation,
        to_item: Option<View>,
        to_attribute: Option<Attribute>,
        multiplier: f64,
        constant: f64,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ConstraintInner {
                item,
                attribute,
                relation,
                to_item,
                to_attribute,
                multiplier,
                constant,
                identifier: None,
                owner: None,
            })),
        }
    }

    pub fn item(&self) -> View {
        self.inner.borrow().item.clone()
    }

    pub fn attribute(&self) -> Attribute {
        self.inner.borrow().attribute
    }

    pub fn relation(&self) -> Relation {
        self.inner.borrow().relation
    }

    pub fn to_item(&self) -> Option<View> {
        self.inner.borrow().to_item.clone()
    }

    pub fn to_attribute(&self) -> Option<Attribute> {
        self.inner.borrow().to_attribute
    }

    pub fn multiplier(&self) -> f64 {
        self.inner.borrow().multiplier
    }

    pub fn constant(&self) -> f64 {
        self.inner.borrow().constant
    }

    /// The provenance identifier, if one has been stamped on.
    pub fn identifier(&self) -> Option<String> {
        self.inner.borrow().identifier.clone()
    }

    /// Stamp a provenance identifier onto this constraint.
    pub fn set_identifier(&self, identifier: impl Into<String>) {
        self.inner.borrow_mut().identifier = Some(identifier.into());
    }

    pub fn is_active(&self) -> bool {
        self.inner.borrow().owner.is_some()
    }

    /// Install this constraint on the view hierarchy. No-op when already
    /// active.
    pub fn activate(&self) {
        if self.is_active() {
            return;
        }
        let owner = self.owning_view();
        owner.inner.borrow_mut().installed.push(self.clone());
        owner.set_needs_layout();
        self.inner.borrow_mut().owner = Some(owner);
    }

    /// Remove this constraint from the view hierarchy. No-op when inactive.
    pub fn deactivate(&self) {
        let owner = self.inner.borrow_mut().owner.take();
        if let Some(owner) = owner {
            owner
                .inner
                .borrow_mut()
                .installed
                .retain(|constraint| constraint != self);
            owner.set_needs_layout();
        }
    }

    /// Activate a batch of constraints in order.
    pub fn activate_all(constraints: &[Constraint]) {
        for constraint in constraints {
            constraint.activate();
        }
    }

    /// Deactivate a batch of constraints in order.
    pub fn deactivate_all(constraints: &[Constraint]) {
        for constraint in constraints {
            constraint.deactivate();
        }
    }

    /// The view a constraint installs on: the nearest common ancestor of its
    /// items, or the item itself for self constraints.
    fn owning_view(&self) -> View {
        let item = self.item();
        let Some(to_item) = self.to_item() else {
            return item;
        };

        let mut ancestors = HashSet::new();
        let mut current = Some(item.clone());
        while let Some(view) = current {
            ancestors.insert(view.key());
            current = view.superview();
        }

        let mut current = Some(to_item);
        while let Some(view) = current {
            if ancestors.contains(&view.key()) {
                return view;
            }
            current = view.superview();
        }

        tracing::warn!(
            "constraint items {} and {} share no ancestor; installing on the first item",
            item.display_name(),
            self.to_item().map(|v| v.display_name()).unwrap_or_default(),
        );
        item
    }
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Constraint {}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        write!(
            f,
            "{}.{:?} {:?}",
            inner.item.display_name(),
            inner.attribute,
            inner.relation
        )?;
        match (&inner.to_item, inner.to_attribute) {
            (Some(to_item), Some(to_attribute)) => write!(
                f,
                " {}.{:?} * {} + {}",
                to_item.display_name(),
                to_attribute,
                inner.multiplier,
                inner.constant
            )?,
            _ => write!(f, " {}", inner.constant)?,
        }
        if let Some(identifier) = &inner.identifier {
            write!(f, " '{identifier}'")?;
        }
        Ok(())
    }
}
