//! Typed layout anchors.
//!
//! Anchors are the ergonomic way to build a [`Constraint`]: each view
//! exposes one anchor per attribute, and anchors only relate to anchors on
//! the same axis, so "leading == top" or "width == trailing" is unrepresentable
//! rather than a runtime assertion.
//!
//! Constraints built through anchors start deactivated; the layout layer
//! activates them as part of its apply step.

use std::marker::PhantomData;

use crate::constraint::{Attribute, Constraint, Relation};
use crate::view::View;

/// Marker for horizontal-position anchors (leading, trailing, center-x).
pub enum XAxis {}
/// Marker for vertical-position anchors (top, bottom, center-y).
pub enum YAxis {}
/// Marker for extent anchors (width, height).
pub enum DimensionAxis {}

/// An attachable point or extent on a view, tagged with its axis.
pub struct Anchor<A> {
    view: View,
    attribute: Attribute,
    _axis: PhantomData<A>,
}

pub type XAnchor = Anchor<XAxis>;
pub type YAnchor = Anchor<YAxis>;
pub type DimensionAnchor = Anchor<DimensionAxis>;

impl<A> Clone for Anchor<A> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            attribute: self.attribute,
            _axis: PhantomData,
        }
    }
}

impl<A> Anchor<A> {
    fn new(view: &View, attribute: Attribute) -> Self {
        Self {
            view: view.clone(),
            attribute,
            _axis: PhantomData,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    fn relate(&self, relation: Relation, other: &Anchor<A>, multiplier: f64, constant: f64) -> Constraint {
        Constraint::new(
            self.view.clone(),
            self.attribute,
            relation,
            Some(other.view.clone()),
            Some(other.attribute),
            multiplier,
            constant,
        )
    }

    /// `self == other`
    pub fn equal_to(&self, other: &Anchor<A>) -> Constraint {
        self.relate(Relation::Equal, other, 1.0, 0.0)
    }

    /// `self == other + constant`
    pub fn equal_to_offset(&self, other: &Anchor<A>, constant: f64) -> Constraint {
        self.relate(Relation::Equal, other, 1.0, constant)
    }

    /// `self >= other + constant`
    pub fn at_least(&self, other: &Anchor<A>, constant: f64) -> Constraint {
        self.relate(Relation::GreaterOrEqual, other, 1.0, constant)
    }

    /// `self <= other + constant`
    pub fn at_most(&self, other: &Anchor<A>, constant: f64) -> Constraint {
        self.relate(Relation::LessOrEqual, other, 1.0, constant)
    }
}

impl DimensionAnchor {
    fn relate_constant(&self, relation: Relation, constant: f64) -> Constraint {
        Constraint::new(
            self.view.clone(),
            self.attribute,
            relation,
            None,
            None,
            1.0,
            constant,
        )
    }

    /// `self == constant`
    pub fn equal_to_constant(&self, constant: f64) -> Constraint {
        self.relate_constant(Relation::Equal, constant)
    }

    /// `self >= constant`
    pub fn at_least_constant(&self, constant: f64) -> Constraint {
        self.relate_constant(Relation::GreaterOrEqual, constant)
    }

    /// `self <= constant`
    pub fn at_most_constant(&self, constant: f64) -> Constraint {
        self.relate_constant(Relation::LessOrEqual, constant)
    }

    /// `self == other * multiplier + constant`
    pub fn equal_to_scaled(&self, other: &DimensionAnchor, multiplier: f64, constant: f64) -> Constraint {
        self.relate(Relation::Equal, other, multiplier, constant)
    }
}

impl View {
    pub fn leading(&self) -> XAnchor {
        Anchor::new(self, Attribute::Leading)
    }

    pub fn trailing(&self) -> XAnchor {
        Anchor::new(self, Attribute::Trailing)
    }

    pub fn center_x(&self) -> XAnchor {
        Anchor::new(self, Attribute::CenterX)
    }

    pub fn top(&self) -> YAnchor {
        Anchor::new(self, Attribute::Top)
    }

    pub fn bottom(&self) -> YAnchor {
        Anchor::new(self, Attribute::Bottom)
    }

    pub fn center_y(&self) -> YAnchor {
        Anchor::new(self, Attribute::CenterY)
    }

    pub fn width(&self) -> DimensionAnchor {
        Anchor::new(self, Attribute::Width)
    }

    pub fn height(&self) -> DimensionAnchor {
        Anchor::new(self, Attribute::Height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_dimension_constraint() {
        let view = View::new();
        let constraint = view.width().equal_to_constant(40.0);

        assert_eq!(constraint.item(), view);
        assert_eq!(constraint.attribute(), Attribute::Width);
        assert_eq!(constraint.relation(), Relation::Equal);
        assert!(constraint.to_item().is_none());
        assert_eq!(constraint.constant(), 40.0);
        assert!(!constraint.is_active());
    }

    #[test]
    fn offset_pair_constraint() {
        let root = View::new();
        let child = View::new();
        root.add_subview(&child);

        let constraint = child.leading().equal_to_offset(&root.leading(), 20.0);
        assert_eq!(constraint.item(), child);
        assert_eq!(constraint.to_item(), Some(root.clone()));
        assert_eq!(constraint.attribute(), Attribute::Leading);
        assert_eq!(constraint.to_attribute(), Some(Attribute::Leading));
        assert_eq!(constraint.multiplier(), 1.0);
        assert_eq!(constraint.constant(), 20.0);
    }

    #[test]
    fn inequality_relations() {
        let view = View::new();
        assert_eq!(
            view.height().at_least_constant(10.0).relation(),
            Relation::GreaterOrEqual
        );
        assert_eq!(
            view.height().at_most_constant(10.0).relation(),
            Relation::LessOrEqual
        );
    }

    #[test]
    fn scaled_dimension_constraint() {
        let root = View::new();
        let child = View::new();
        root.add_subview(&child);

        let constraint = child.width().equal_to_scaled(&root.width(), 0.5, -10.0);
        assert_eq!(constraint.multiplier(), 0.5);
        assert_eq!(constraint.constant(), -10.0);
    }
}
