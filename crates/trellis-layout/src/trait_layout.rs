//! Trait-environment-gated layouts.

use std::rc::Rc;

use trellis_core::TraitCollection;
use trellis_view::{Constraint, View};

use crate::laying_out::LayingOut;

/// Delegates to a child layout only when the view's current trait
/// environment contains every dimension of a target collection.
///
/// The environment snapshot is queried fresh on every evaluation and never
/// cached. Matching is structural containment: an environment with
/// additional traits beyond the target still matches. Build dimension-wise
/// gates with the [`LayingOutExt`](crate::LayingOutExt) sugar
/// (`when_phone`, `when_horizontally_compact`, ...).
#[derive(Clone)]
pub struct TraitCollectionLayout {
    matching: TraitCollection,
    layout: Rc<dyn LayingOut>,
}

impl TraitCollectionLayout {
    /// Gate `layout` on the environment containing `matching`.
    pub fn new(matching: TraitCollection, layout: impl LayingOut + 'static) -> Self {
        Self {
            matching,
            layout: Rc::new(layout),
        }
    }

    /// The target trait collection.
    pub fn matching(&self) -> TraitCollection {
        self.matching
    }
}

impl LayingOut for TraitCollectionLayout {
    fn constraints(&self, view: &View) -> Vec<Constraint> {
        if view.current_traits().contains(&self.matching) {
            self.layout.constraints(view)
        } else {
            Vec::new()
        }
    }
}
