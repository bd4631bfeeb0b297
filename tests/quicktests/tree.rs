use travtree::{Descending, Inorder, Postorder, Preorder, Traversal, Tree};

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and erases both hold the same values in the same order.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                tree.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                tree.erase_key(k);
                set.remove(k);
            }
        }
    }
}

/// Walks every position of `O` forwards from the start and backwards from the end.
fn walk<O: Traversal>(tree: &Tree<i8>) -> (Vec<i8>, Vec<i8>) {
    let mut forward = Vec::new();
    let mut position = tree.begin_with::<O>();
    while let Some(value) = tree.get(position) {
        forward.push(*value);
        tree.advance(&mut position);
    }

    let mut backward = Vec::new();
    let mut position = tree.rbegin_with::<O>();
    while let Some(value) = tree.get(position) {
        backward.push(*value);
        tree.retreat(&mut position);
    }
    backward.reverse();

    (forward, backward)
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    xs.iter().all(|x| tree.contains(x) && tree.count(x) == 1)
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_end() && tree.count(x) == 0)
}

#[quickcheck]
fn duplicates_are_counted_once(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let unique: HashSet<_> = xs.iter().collect();

    tree.len() == unique.len()
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.erase_key(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn every_order_round_trips(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut BTreeSet::new());

    let (pre, pre_back) = walk::<Preorder>(&tree);
    let (inorder, in_back) = walk::<Inorder>(&tree);
    let (post, post_back) = walk::<Postorder>(&tree);

    let sorted: Vec<i8> = tree.iter().copied().collect();
    let mut pre_sorted = pre.clone();
    pre_sorted.sort_unstable();
    let mut post_sorted = post.clone();
    post_sorted.sort_unstable();

    pre == pre_back
        && inorder == in_back
        && post == post_back
        && inorder == sorted
        && pre_sorted == sorted
        && post_sorted == sorted
        && pre.first() == post.last()
}

#[quickcheck]
fn iterators_match_positions(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.into_iter().collect();

    tree.preorder().copied().eq(walk::<Preorder>(&tree).0)
        && tree.postorder().copied().eq(walk::<Postorder>(&tree).0)
        && tree.preorder().rev().copied().eq(walk::<Preorder>(&tree).1.into_iter().rev())
}

#[quickcheck]
fn erasing_everything_in_preorder_empties(xs: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.into_iter().collect();
    let mut erased = 0;
    let len = tree.len();

    let mut position = tree.begin_with::<Preorder>();
    while let Ok(next) = tree.erase(position) {
        position = next;
        erased += 1;
    }

    erased == len && tree.is_empty()
}

#[quickcheck]
fn erase_returns_the_precomputed_successor(xs: Vec<i8>, pick: usize) -> bool {
    let mut tree: Tree<i8> = xs.into_iter().collect();
    if tree.is_empty() {
        return true;
    }

    let sorted: Vec<i8> = tree.iter().copied().collect();
    let index = pick % sorted.len();
    let position = tree.find(&sorted[index]);
    let next = tree.erase(position).unwrap();

    tree.get(next) == sorted.get(index + 1)
}

#[quickcheck]
fn bounds_agree_with_btreeset(xs: Vec<i8>, key: i8) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let set: BTreeSet<i8> = xs.into_iter().collect();

    tree.get(tree.lower_bound(&key)) == set.range(key..).next()
        && tree.get(tree.upper_bound(&key)) == set.range(key..).find(|x| **x > key)
}

#[quickcheck]
fn merge_moves_the_difference(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    let mut other: Tree<i8> = ys.iter().copied().collect();
    let left: BTreeSet<i8> = xs.into_iter().collect();
    let right: BTreeSet<i8> = ys.into_iter().collect();

    tree.merge(&mut other);

    tree.iter().eq(left.union(&right))
        && other.iter().eq(left.intersection(&right))
}

#[quickcheck]
fn descending_reverses_natural(xs: Vec<i8>) -> bool {
    let natural: Tree<i8> = xs.iter().copied().collect();
    let descending = Tree::from_iter_with(xs, Descending);

    natural.iter().rev().eq(descending.iter())
}

#[quickcheck]
fn clones_are_equal(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.into_iter().collect();
    let cloned = tree.clone();

    tree == cloned && tree.preorder().eq(cloned.preorder()) && tree.height() == cloned.height()
}

#[quickcheck]
fn preorder_range_erase_leaves_the_rest(xs: Vec<i8>, from: usize, to: usize) -> bool {
    let mut tree: Tree<i8> = xs.into_iter().collect();
    let pre: Vec<i8> = tree.preorder().copied().collect();
    if pre.is_empty() {
        return true;
    }
    let (from, to) = (from % pre.len(), to % (pre.len() + 1));
    let (from, to) = (from.min(to), from.max(to));

    let first = tree.find(&pre[from]).with_order::<Preorder>();
    let last = match pre.get(to) {
        Some(value) => tree.find(value).with_order::<Preorder>(),
        None => tree.end_with(),
    };
    tree.erase_range(first, last);

    let mut expected: Vec<i8> = pre[..from].iter().chain(&pre[to..]).copied().collect();
    expected.sort_unstable();
    tree.iter().copied().eq(expected)
}
