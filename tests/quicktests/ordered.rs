use ordered_tree::OrderedTree;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::SmallKey;

fn build<K: Ord + Clone>(xs: &[K]) -> OrderedTree<K> {
    let mut tree = OrderedTree::new();
    for x in xs {
        tree.insert(x.clone());
    }
    tree
}

#[quickcheck]
fn in_order_is_sorted_multiset(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let mut sorted = xs;
    sorted.sort();

    tree.in_order().copied().collect::<Vec<_>>() == sorted
}

#[quickcheck]
fn in_order_keeps_duplicates(xs: Vec<SmallKey>) -> bool {
    let tree = build(&xs);
    let mut sorted = xs;
    sorted.sort();

    tree.in_order().copied().collect::<Vec<_>>() == sorted
}

#[quickcheck]
fn level_order_is_a_permutation(xs: Vec<SmallKey>) -> bool {
    let tree = build(&xs);
    let mut level_order: Vec<_> = tree.level_order().copied().collect();
    level_order.sort();
    let mut sorted = xs;
    sorted.sort();

    level_order == sorted
}

#[quickcheck]
fn level_order_starts_at_first_insert(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.level_order().next() == xs.first()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn size_is_conserved(xs: Vec<SmallKey>) -> bool {
    let tree = build(&xs);

    tree.len() == xs.len()
        && tree.in_order().count() == xs.len()
        && tree.level_order().count() == xs.len()
}

#[quickcheck]
fn traversals_are_repeatable(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.in_order().eq(tree.in_order()) && tree.level_order().eq(tree.level_order())
}

#[quickcheck]
fn min_and_max_match_in_order(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.min() == tree.in_order().next() && tree.max() == tree.in_order().last()
}

#[quickcheck]
fn height_is_bounded_by_len(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let height = tree.height();

    // A tree of `n` nodes needs at least floor(log2(n)) + 1 levels.
    let min_height = (usize::BITS - xs.len().leading_zeros()) as usize;
    height <= xs.len() && height >= min_height
}

#[quickcheck]
fn try_insert_matches_insert(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        if tree.try_insert(*x).is_err() {
            return false;
        }
    }

    tree.level_order().eq(build(&xs).level_order())
}
