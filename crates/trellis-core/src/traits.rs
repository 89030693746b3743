//! The trait environment: a description of the display context a view is
//! currently rendering into.
//!
//! A [`TraitCollection`] is a bag of independently optional dimensions. An
//! unset dimension is a wildcard. Matching is structural containment, not
//! equality: a view's environment matches a target collection when every
//! dimension the target sets is present with the same value, regardless of
//! what else the environment specifies.

/// The broad class of device the interface is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterfaceIdiom {
    /// Phone-class device
    Phone,
    /// Tablet-class device
    Pad,
    /// Television
    Tv,
    /// In-car interface
    CarPlay,
}

/// Coarse measure of available space along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeClass {
    /// Constrained space (e.g. phone width in portrait)
    Compact,
    /// Expansive space (e.g. tablet, phone height in portrait)
    Regular,
}

/// An immutable snapshot of a view's display environment.
///
/// Every dimension is optional; a default-constructed collection matches
/// any environment and is matched by any environment query.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitCollection {
    pub idiom: Option<InterfaceIdiom>,
    pub display_scale: Option<f64>,
    pub horizontal_size_class: Option<SizeClass>,
    pub vertical_size_class: Option<SizeClass>,
}

impl TraitCollection {
    /// An empty collection: every dimension is a wildcard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interface idiom.
    pub fn with_idiom(mut self, idiom: InterfaceIdiom) -> Self {
        self.idiom = Some(idiom);
        self
    }

    /// Set the display scale (points-to-pixels factor).
    pub fn with_display_scale(mut self, scale: f64) -> Self {
        self.display_scale = Some(scale);
        self
    }

    /// Set the horizontal size class.
    pub fn with_horizontal_size_class(mut self, size_class: SizeClass) -> Self {
        self.horizontal_size_class = Some(size_class);
        self
    }

    /// Set the vertical size class.
    pub fn with_vertical_size_class(mut self, size_class: SizeClass) -> Self {
        self.vertical_size_class = Some(size_class);
        self
    }

    /// Combine two collections; dimensions set on `other` win.
    pub fn merge(mut self, other: TraitCollection) -> Self {
        if other.idiom.is_some() {
            self.idiom = other.idiom;
        }
        if other.display_scale.is_some() {
            self.display_scale = other.display_scale;
        }
        if other.horizontal_size_class.is_some() {
            self.horizontal_size_class = other.horizontal_size_class;
        }
        if other.vertical_size_class.is_some() {
            self.vertical_size_class = other.vertical_size_class;
        }
        self
    }

    /// Check whether this collection specifies every dimension that
    /// `target` specifies, with equal values.
    ///
    /// Dimensions unset on `target` are wildcards; dimensions set on `self`
    /// beyond what `target` asks for never break the match.
    pub fn contains(&self, target: &TraitCollection) -> bool {
        fn dimension_matches<T: PartialEq>(have: Option<T>, want: Option<T>) -> bool {
            match want {
                None => true,
                Some(wanted) => have == Some(wanted),
            }
        }

        dimension_matches(self.idiom, target.idiom)
            && dimension_matches(self.display_scale, target.display_scale)
            && dimension_matches(self.horizontal_size_class, target.horizontal_size_class)
            && dimension_matches(self.vertical_size_class, target.vertical_size_class)
    }
}
