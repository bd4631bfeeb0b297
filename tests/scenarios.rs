//! End-to-end walks through the public API with trace logging switched on.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use travtree::{Cursor, Inorder, Position, PositionError, Postorder, Preorder, Tree};

fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(LevelFilter::TRACE)
        .with(fmt::layer().with_test_writer().with_target(true))
        .try_init();
}

fn collect<O: travtree::Traversal>(tree: &Tree<i32>) -> Vec<i32> {
    tree.iter_with::<O>().copied().collect()
}

#[test]
fn build_and_walk_every_order() {
    init_logging();
    let mut tree = Tree::new();
    for value in [5, 3, 7, 4] {
        assert!(tree.insert(value).1);
    }

    assert_eq!(collect::<Preorder>(&tree), [5, 3, 4, 7]);
    assert_eq!(collect::<Inorder>(&tree), [3, 4, 5, 7]);
    assert_eq!(collect::<Postorder>(&tree), [4, 3, 7, 5]);
    assert_eq!(tree.height(), 3);
}

#[test]
fn reverse_walks_from_end() {
    init_logging();
    let tree = Tree::from([5, 3, 7, 4]);

    let mut cursor: Cursor<'_, i32, _, Postorder> = tree.cursor_at(tree.end_with());
    let mut seen = Vec::new();
    cursor.move_prev();
    while let Some(value) = cursor.current() {
        seen.push(*value);
        cursor.move_prev();
    }
    assert_eq!(seen, [5, 7, 3, 4]);
}

#[test]
fn erase_while_walking() {
    init_logging();
    let mut tree: Tree<i32> = (1..=20).map(|x| (x * 7) % 20).collect();
    assert_eq!(tree.len(), 20);

    let mut position = tree.begin_with::<Preorder>();
    while let Some(value) = tree.get(position) {
        if value % 3 == 0 {
            position = tree.erase(position).unwrap();
        } else {
            tree.advance(&mut position);
        }
    }

    let left: Vec<i32> = tree.iter().copied().collect();
    let expected: Vec<i32> = (0..20).filter(|x| x % 3 != 0).collect();
    assert_eq!(left, expected);
}

#[test]
fn merge_then_clear() {
    init_logging();
    let mut tree = Tree::from([5, 3, 7, 4]);
    let mut other = Tree::from([1, 2, 4]);

    tree.merge(&mut other);
    assert_eq!(tree.len(), 6);
    assert_eq!(other.len(), 1);

    tree.clear();
    assert!(tree.is_empty());
    assert!(tree.begin().is_end());
    assert_eq!(tree.iter().next(), None);

    // Still usable after clearing.
    tree.insert(10);
    assert_eq!(tree.first(), Some(&10));
}

#[test]
fn stale_positions_report_errors() {
    init_logging();
    let mut tree = Tree::from([2, 1, 3]);
    let one: Position = tree.find(&1);

    assert_eq!(tree.extract(one), Ok(1));
    assert_eq!(tree.value(one), Err(PositionError::Stale));
    assert_eq!(PositionError::Stale.to_string(), "position refers to a node that has been erased");
    assert_eq!(PositionError::End.to_string(), "position is past the end of the tree");
}

#[test]
fn owning_iteration_and_collect() {
    init_logging();
    let tree: Tree<String> = ["pear", "apple", "fig"].iter().map(|s| s.to_string()).collect();
    let owned: Vec<String> = tree.into_iter().collect();

    assert_eq!(owned, ["apple", "fig", "pear"]);
}
