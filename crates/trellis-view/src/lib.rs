//! Retained view tree and layout constraints for Trellis.
//!
//! This crate plays the host-toolkit role that the composition layer in
//! `trellis-layout` builds against:
//!
//! - [`View`]: a node in a single-threaded, shared-handle view hierarchy,
//!   carrying a frame, an optional trait environment, and the constraints
//!   installed on it.
//! - [`Constraint`]: one geometric relationship between views, with an
//!   optional identifier and explicit activate/deactivate lifecycle.
//! - Typed [anchors](crate::anchor) for building constraints without mixing
//!   axes.
//! - A small deterministic [engine](crate::engine) that resolves view frames
//!   from the active constraint set when a layout pass runs.
//!
//! All types here are intentionally `!Send`: the tree is owned by whichever
//! thread drives the UI, and mutation is never concurrent.

mod anchor;
mod constraint;
pub mod engine;
mod view;

pub use anchor::{Anchor, DimensionAnchor, DimensionAxis, XAnchor, XAxis, YAnchor, YAxis};
pub use constraint::{Attribute, Constraint, Relation};
pub use engine::{Primitive, SolveError};
pub use view::View;
