//! Sequential layout over a list of items.

use std::rc::Rc;

use trellis_view::{Constraint, View};

use crate::laying_out::LayingOut;

/// Maps each element of a list, together with its index and neighbors, to
/// constraints, concatenating the results in index order.
///
/// This is the primitive for "constrain each item relative to its neighbor"
/// patterns: a row of buttons where each leading edge pins to the previous
/// trailing edge, the first to the container. The item list is obtained once
/// per evaluation; an empty list yields no constraints, and a single-element
/// list sees one call with neither neighbor.
#[derive(Clone)]
pub struct ListLayout<T> {
    items: Rc<dyn Fn(&View) -> Vec<T>>,
    iterator: ItemIterator<T>,
}

type ItemIterator<T> = Rc<dyn Fn(&View, &T, usize, Option<&T>, Option<&T>) -> Vec<Constraint>>;

impl<T> ListLayout<T> {
    /// Build from an items function and a per-item iterator.
    ///
    /// The iterator receives `(view, element, index, previous, next)`, where
    /// `previous`/`next` are the list neighbors or `None` at the ends.
    pub fn new(
        items: impl Fn(&View) -> Vec<T> + 'static,
        iterator: impl Fn(&View, &T, usize, Option<&T>, Option<&T>) -> Vec<Constraint> + 'static,
    ) -> Self {
        Self {
            items: Rc::new(items),
            iterator: Rc::new(iterator),
        }
    }
}

impl<T> LayingOut for ListLayout<T> {
    fn constraints(&self, view: &View) -> Vec<Constraint> {
        let items = (self.items)(view);
        let mut constraints = Vec::new();
        for (index, element) in items.iter().enumerate() {
            let previous = if index == 0 { None } else { items.get(index - 1) };
            let next = items.get(index + 1);
            constraints.extend((self.iterator)(view, element, index, previous, next));
        }
        constraints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Record every `(index, previous, next)` window the iterator sees.
    fn neighbor_windows(items: Vec<i32>) -> Vec<(usize, Option<i32>, Option<i32>)> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let layout = ListLayout::new(move |_| items.clone(), {
            let seen = seen.clone();
            move |_, element: &i32, index, previous, next| {
                assert!(*element >= 0);
                seen.borrow_mut()
                    .push((index, previous.copied(), next.copied()));
                Vec::new()
            }
        });
        layout.constraints(&View::new());
        let windows = seen.borrow().clone();
        windows
    }

    #[test]
    fn three_items_see_their_neighbors() {
        assert_eq!(
            neighbor_windows(vec![10, 20, 30]),
            vec![
                (0, None, Some(20)),
                (1, Some(10), Some(30)),
                (2, Some(20), None),
            ]
        );
    }

    #[test]
    fn empty_list_never_invokes_the_iterator() {
        assert!(neighbor_windows(Vec::new()).is_empty());
    }

    #[test]
    fn single_item_has_no_neighbors() {
        assert_eq!(neighbor_windows(vec![7]), vec![(0, None, None)]);
    }

    #[test]
    fn constraints_concatenate_in_index_order() {
        let view = View::new();
        let layout = ListLayout::new(
            |_| vec![1.0, 2.0, 3.0],
            |view: &View, element: &f64, _, _, _| {
                vec![view.width().at_least_constant(*element)]
            },
        );

        let constants: Vec<f64> = layout
            .constraints(&view)
            .iter()
            .map(Constraint::constant)
            .collect();
        assert_eq!(constants, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn items_are_obtained_from_the_view() {
        let root = View::new();
        for _ in 0..3 {
            root.add_subview(&View::new());
        }

        let layout = ListLayout::new(
            |view: &View| view.subviews(),
            |_, element: &View, index, _, _| {
                vec![element.width().equal_to_constant(index as f64)]
            },
        );

        assert_eq!(layout.constraints(&root).len(), 3);
    }
}
