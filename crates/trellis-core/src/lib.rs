//! Core value types for the Trellis layout library.
//!
//! This crate holds the plain-data foundation shared by the view layer and
//! the layout composition layer:
//!
//! - Geometry: [`Point`], [`Size`], [`Rect`], [`Insets`]
//! - Trait environment: [`TraitCollection`] and its dimensions
//!   ([`InterfaceIdiom`], [`SizeClass`])
//!
//! Everything here is an immutable value with no view-hierarchy knowledge.

mod geometry;
mod traits;

pub use geometry::{Insets, Point, Rect, Size};
pub use traits::{InterfaceIdiom, SizeClass, TraitCollection};
