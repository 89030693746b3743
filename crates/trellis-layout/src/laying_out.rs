//! The core capability: anything that can lay out a view.

use std::rc::Rc;

use trellis_core::{InterfaceIdiom, SizeClass, TraitCollection};
use trellis_view::{Constraint, View};

use crate::conditional::ConditionalLayout;
use crate::group::{combine, LayoutGroup};
use crate::identifier::IdentifierLayout;
use crate::trait_layout::TraitCollectionLayout;
use crate::view_layout::ViewLayout;

/// A component that produces constraints for a view hierarchy.
///
/// Implementations must be total functions of `view` and whatever external
/// state their closures capture: for identical external state, two calls
/// must produce semantically identical constraints, though the concrete
/// handles may be freshly allocated each time. The returned constraints are
/// activated by [`ViewLayout`], so implementations should hand them back
/// deactivated.
///
/// Constraints should only reference `view` and descendants reachable from
/// it. Constraining against an ancestor of the root is an encapsulation
/// violation; this is a documented contract, not something the types
/// enforce.
pub trait LayingOut {
    /// Generate the constraints that should currently apply within `view`.
    fn constraints(&self, view: &View) -> Vec<Constraint>;

    /// Flattening support for [`combine`]: groups return themselves, every
    /// other component uses the default.
    fn as_group(&self) -> Option<&LayoutGroup> {
        None
    }
}

impl<L: LayingOut + ?Sized> LayingOut for Rc<L> {
    fn constraints(&self, view: &View) -> Vec<Constraint> {
        (**self).constraints(view)
    }

    fn as_group(&self) -> Option<&LayoutGroup> {
        (**self).as_group()
    }
}

/// Builder-style composition, available on every layout component.
pub trait LayingOutExt: LayingOut + Sized + 'static {
    /// Concatenate with another layout, flattening group operands.
    fn and(self, other: impl LayingOut + 'static) -> LayoutGroup {
        combine(self, other)
    }

    /// Gate on a predicate, re-evaluated on every layout pass.
    fn when<F>(self, condition: F) -> ConditionalLayout
    where
        F: Fn(&View) -> bool + 'static,
    {
        ConditionalLayout::new(condition, self)
    }

    /// Stamp every produced constraint with `identifier`.
    fn identified(self, identifier: impl Into<String>) -> IdentifierLayout {
        IdentifierLayout::new(identifier, self)
    }

    /// Stamp every produced constraint with `identifier` plus its position,
    /// e.g. `"Menu [0]"`, `"Menu [1]"`, ...
    fn identified_numbered(self, identifier: impl Into<String>) -> IdentifierLayout {
        IdentifierLayout::numbered(identifier, self)
    }

    /// Apply only when the view's environment contains all of `matching`.
    fn when_traits(self, matching: TraitCollection) -> TraitCollectionLayout {
        TraitCollectionLayout::new(matching, self)
    }

    /// Apply only on the given interface idiom.
    fn when_idiom(self, idiom: InterfaceIdiom) -> TraitCollectionLayout {
        self.when_traits(TraitCollection::new().with_idiom(idiom))
    }

    /// Apply only at the given display scale.
    fn when_display_scale(self, scale: f64) -> TraitCollectionLayout {
        self.when_traits(TraitCollection::new().with_display_scale(scale))
    }

    /// Apply only in the given horizontal size class.
    fn when_horizontal(self, size_class: SizeClass) -> TraitCollectionLayout {
        self.when_traits(TraitCollection::new().with_horizontal_size_class(size_class))
    }

    /// Apply only in the given vertical size class.
    fn when_vertical(self, size_class: SizeClass) -> TraitCollectionLayout {
        self.when_traits(TraitCollection::new().with_vertical_size_class(size_class))
    }

    /// Apply only in the given horizontal and vertical size classes.
    fn when_size_classes(self, horizontal: SizeClass, vertical: SizeClass) -> TraitCollectionLayout {
        self.when_traits(
            TraitCollection::new()
                .with_horizontal_size_class(horizontal)
                .with_vertical_size_class(vertical),
        )
    }

    /// Apply only on phone-class devices.
    fn when_phone(self) -> TraitCollectionLayout {
        self.when_idiom(InterfaceIdiom::Phone)
    }

    /// Apply only on tablet-class devices.
    fn when_pad(self) -> TraitCollectionLayout {
        self.when_idiom(InterfaceIdiom::Pad)
    }

    /// Apply only on televisions.
    fn when_tv(self) -> TraitCollectionLayout {
        self.when_idiom(InterfaceIdiom::Tv)
    }

    /// Apply only on in-car interfaces.
    fn when_car_play(self) -> TraitCollectionLayout {
        self.when_idiom(InterfaceIdiom::CarPlay)
    }

    /// Apply only when horizontally compact.
    fn when_horizontally_compact(self) -> TraitCollectionLayout {
        self.when_horizontal(SizeClass::Compact)
    }

    /// Apply only when horizontally regular.
    fn when_horizontally_regular(self) -> TraitCollectionLayout {
        self.when_horizontal(SizeClass::Regular)
    }

    /// Apply only when vertically compact.
    fn when_vertically_compact(self) -> TraitCollectionLayout {
        self.when_vertical(SizeClass::Compact)
    }

    /// Apply only when vertically regular.
    fn when_vertically_regular(self) -> TraitCollectionLayout {
        self.when_vertical(SizeClass::Regular)
    }

    /// Wrap in a controller driving `root`.
    fn view_layout(self, root: &View) -> ViewLayout {
        ViewLayout::new(root, self)
    }
}

impl<L: LayingOut + 'static> LayingOutExt for L {}
