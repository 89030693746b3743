//! Algebraic properties of layout composition.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;

use trellis_layout::{combine, LayingOut, Layout, LayoutGroup, ListLayout};
use trellis_view::{Constraint, View};

/// One fixed layout per entry in `sizes`, plus the concatenation of all of
/// their constraints in declaration order.
fn fixed_layouts(view: &View, sizes: &[usize]) -> (Vec<Layout>, Vec<Constraint>) {
    let mut layouts = Vec::new();
    let mut all = Vec::new();
    for size in sizes {
        let constraints: Vec<Constraint> = (0..*size)
            .map(|i| view.width().at_least_constant(i as f64))
            .collect();
        all.extend(constraints.clone());
        layouts.push(Layout::fixed(constraints));
    }
    (layouts, all)
}

proptest! {
    #[test]
    fn group_concatenation_preserves_order(
        sizes in proptest::collection::vec(0usize..5, 0..6),
    ) {
        let view = View::new();
        let (layouts, expected) = fixed_layouts(&view, &sizes);
        let group = LayoutGroup::new(
            layouts
                .into_iter()
                .map(|layout| Rc::new(layout) as Rc<dyn LayingOut>)
                .collect(),
        );
        prop_assert_eq!(group.constraints(&view), expected);
    }

    #[test]
    fn repeated_combination_stays_flat(count in 2usize..8) {
        let view = View::new();
        let sizes = vec![1usize; count];
        let (mut layouts, expected) = fixed_layouts(&view, &sizes);

        let first = layouts.remove(0);
        let second = layouts.remove(0);
        let mut group = combine(first, second);
        for layout in layouts {
            group = combine(group, layout);
        }

        prop_assert_eq!(group.layouts().len(), count);
        prop_assert!(group
            .layouts()
            .iter()
            .all(|layout| layout.as_group().is_none()));
        prop_assert_eq!(group.constraints(&view), expected);
    }

    #[test]
    fn list_iteration_sees_every_neighbor_window(len in 0usize..12) {
        let items: Vec<usize> = (0..len).collect();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let layout = ListLayout::new(
            {
                let items = items.clone();
                move |_| items.clone()
            },
            {
                let seen = seen.clone();
                move |_, element: &usize, index, previous, next| {
                    seen.borrow_mut()
                        .push((*element, index, previous.copied(), next.copied()));
                    Vec::new()
                }
            },
        );
        layout.constraints(&View::new());

        let seen = seen.borrow();
        prop_assert_eq!(seen.len(), len);
        for (element, index, previous, next) in seen.iter() {
            prop_assert_eq!(element, index);
            match *index {
                0 => prop_assert_eq!(*previous, None),
                i => prop_assert_eq!(*previous, Some(i - 1)),
            }
            if *index + 1 == len {
                prop_assert_eq!(*next, None);
            } else {
                prop_assert_eq!(*next, Some(*index + 1));
            }
        }
    }
}
