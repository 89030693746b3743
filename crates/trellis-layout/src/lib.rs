//! Declarative, composable layout constraints for Trellis view hierarchies.
//!
//! A layout is a value implementing [`LayingOut`]: given a root view, it
//! produces the constraints that should currently apply. Layouts compose by
//! wrapping: grouped in order ([`LayoutGroup`]), gated on a predicate
//! ([`ConditionalLayout`]) or on the trait environment
//! ([`TraitCollectionLayout`]), stamped with provenance identifiers
//! ([`IdentifierLayout`]), or mapped over a list of items with neighbor
//! access ([`ListLayout`]).
//!
//! A [`ViewLayout`] owns the resulting tree together with a root view and
//! the currently active constraint set. Calling [`ViewLayout::layout`]
//! retracts the previous set, re-evaluates the whole tree against current
//! state, applies the fresh set, and drives a layout pass, so the way to
//! respond to *any* state change is simply to call `layout()` again.
//!
//! ```
//! use trellis_layout::{Layout, LayingOutExt, ViewLayout};
//! use trellis_view::View;
//! use trellis_core::Rect;
//!
//! let root = View::named("root");
//! let badge = View::named("badge");
//! root.add_subview(&badge);
//!
//! let layout = Layout::new({
//!     let badge = badge.clone();
//!     let root = root.clone();
//!     move |_| {
//!         vec![
//!             badge.width().equal_to_constant(40.0),
//!             badge.height().equal_to_constant(40.0),
//!             badge.leading().equal_to_offset(&root.leading(), 20.0),
//!             badge.top().equal_to_offset(&root.top(), 20.0),
//!         ]
//!     }
//! })
//! .identified("Badge");
//!
//! let view_layout = ViewLayout::new(&root, layout);
//! view_layout.layout();
//!
//! assert_eq!(badge.frame(), Rect::new(20.0, 20.0, 40.0, 40.0));
//! ```
//!
//! Everything here is single-threaded by design: evaluation happens on the
//! thread that owns the view tree, and the only concurrency hazard,
//! reentrant `layout()` calls from inside a handler, is guarded by
//! dropping the inner call.

mod conditional;
mod group;
mod identifier;
mod laying_out;
mod layout;
mod list;
mod trait_layout;
mod view_layout;

pub use conditional::ConditionalLayout;
pub use group::{combine, LayoutGroup};
pub use identifier::IdentifierLayout;
pub use laying_out::{LayingOut, LayingOutExt};
pub use layout::Layout;
pub use list::ListLayout;
pub use trait_layout::TraitCollectionLayout;
pub use view_layout::ViewLayout;
