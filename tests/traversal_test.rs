//! Tests for the traversal engine on a perfect and an unbalanced tree

use rstest::{fixture, rstest};

use treewalk::domain::{Node, Tree};
use treewalk::traversal::{
    breadth_first, in_order_iterative, in_order_recursive, post_order_iterative,
    post_order_recursive, pre_order_iterative, pre_order_recursive, Traversal,
};
use treewalk::util::testing::SpanCounter;

type TraversalFn = fn(Option<&Node<i32>>) -> Vec<i32>;

//            __________0__________
//           /                     \
//      ____1____               ____2____
//     /         \             /         \
//   _3_         _4_         _5_         _6_
//  /   \       /   \       /   \       /   \
// 7     8     9    10    11    12    13    14
#[fixture]
fn perfect_tree() -> Tree<i32> {
    (0..15).map(Some).collect()
}

//   ______________________0______________________
//  /                                             \
// 1__________                           __________2__________
//            \                         /                     \
//             3____                   4____                   5____
//                  \                       \                       \
//                  _6_                     _7_                     _8
//                 /   \                   /   \                   /
//                9    10                11    12                13
#[fixture]
fn unbalanced_tree() -> Tree<i32> {
    let representation = vec![
        Some(0),
        Some(1), Some(2),
        None, Some(3), Some(4), Some(5),
        None, None, None, Some(6), None, Some(7), None, Some(8),
        None, None, None, None, None, None, Some(9), Some(10), None, None, Some(11), Some(12), None, None, Some(13),
    ];
    Tree::build(representation)
}

const PERFECT_PRE_ORDER: [i32; 15] = [0, 1, 3, 7, 8, 4, 9, 10, 2, 5, 11, 12, 6, 13, 14];
const PERFECT_IN_ORDER: [i32; 15] = [7, 3, 8, 1, 9, 4, 10, 0, 11, 5, 12, 2, 13, 6, 14];
const PERFECT_POST_ORDER: [i32; 15] = [7, 8, 3, 9, 10, 4, 1, 11, 12, 5, 13, 14, 6, 2, 0];
const PERFECT_BREADTH_FIRST: [i32; 15] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14];

const UNBALANCED_PRE_ORDER: [i32; 14] = [0, 1, 3, 6, 9, 10, 2, 4, 7, 11, 12, 5, 8, 13];
const UNBALANCED_IN_ORDER: [i32; 14] = [1, 3, 9, 6, 10, 0, 4, 11, 7, 12, 2, 5, 13, 8];
const UNBALANCED_POST_ORDER: [i32; 14] = [9, 10, 6, 3, 1, 11, 12, 7, 4, 13, 8, 5, 2, 0];
const UNBALANCED_BREADTH_FIRST: [i32; 14] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13];

/// Runs `func` on `tree` while counting how often `span_name` is entered.
fn run_counted(func: TraversalFn, span_name: &str, tree: &Tree<i32>) -> (Vec<i32>, usize) {
    let counter = SpanCounter::new();
    let values = counter.observe(|| func(tree.root()));
    (values, counter.count(span_name))
}

fn assert_recursive(calls: usize, recursive: bool) {
    if recursive {
        assert!(calls > 1, "Function should be recursive. Called {} times.", calls);
    } else {
        assert_eq!(calls, 1, "Function should be iterative. Called {} times.", calls);
    }
}

// ============================================================
// Perfect tree
// ============================================================

#[rstest]
#[case::pre_order_recursive(pre_order_recursive::<i32>, "pre_order_recursive", &PERFECT_PRE_ORDER, true)]
#[case::pre_order_iterative(pre_order_iterative::<i32>, "pre_order_iterative", &PERFECT_PRE_ORDER, false)]
#[case::in_order_recursive(in_order_recursive::<i32>, "in_order_recursive", &PERFECT_IN_ORDER, true)]
#[case::in_order_iterative(in_order_iterative::<i32>, "in_order_iterative", &PERFECT_IN_ORDER, false)]
#[case::post_order_recursive(post_order_recursive::<i32>, "post_order_recursive", &PERFECT_POST_ORDER, true)]
#[case::post_order_iterative(post_order_iterative::<i32>, "post_order_iterative", &PERFECT_POST_ORDER, false)]
#[case::breadth_first(breadth_first::<i32>, "breadth_first", &PERFECT_BREADTH_FIRST, false)]
fn given_perfect_tree_when_traversing_then_order_and_scheduling_match(
    perfect_tree: Tree<i32>,
    #[case] func: TraversalFn,
    #[case] span_name: &str,
    #[case] expected: &[i32],
    #[case] recursive: bool,
) {
    let (values, calls) = run_counted(func, span_name, &perfect_tree);

    assert_recursive(calls, recursive);
    assert_eq!(values, expected);
}

// ============================================================
// Unbalanced tree
// ============================================================

#[rstest]
#[case::pre_order_recursive(pre_order_recursive::<i32>, "pre_order_recursive", &UNBALANCED_PRE_ORDER, true)]
#[case::pre_order_iterative(pre_order_iterative::<i32>, "pre_order_iterative", &UNBALANCED_PRE_ORDER, false)]
#[case::in_order_recursive(in_order_recursive::<i32>, "in_order_recursive", &UNBALANCED_IN_ORDER, true)]
#[case::in_order_iterative(in_order_iterative::<i32>, "in_order_iterative", &UNBALANCED_IN_ORDER, false)]
#[case::post_order_recursive(post_order_recursive::<i32>, "post_order_recursive", &UNBALANCED_POST_ORDER, true)]
#[case::post_order_iterative(post_order_iterative::<i32>, "post_order_iterative", &UNBALANCED_POST_ORDER, false)]
#[case::breadth_first(breadth_first::<i32>, "breadth_first", &UNBALANCED_BREADTH_FIRST, false)]
fn given_unbalanced_tree_when_traversing_then_order_and_scheduling_match(
    unbalanced_tree: Tree<i32>,
    #[case] func: TraversalFn,
    #[case] span_name: &str,
    #[case] expected: &[i32],
    #[case] recursive: bool,
) {
    let (values, calls) = run_counted(func, span_name, &unbalanced_tree);

    assert_recursive(calls, recursive);
    assert_eq!(values, expected);
}

// ============================================================
// Selector and edge cases
// ============================================================

#[rstest]
fn given_every_order_when_applied_then_matches_direct_call_and_call_contract(
    unbalanced_tree: Tree<i32>,
) {
    for order in Traversal::ALL {
        let counter = SpanCounter::new();
        let values = counter.observe(|| unbalanced_tree.traverse(order));

        assert_eq!(values.len(), unbalanced_tree.len(), "{}", order);
        assert_recursive(counter.count(order.function_name()), order.is_recursive());
    }
}

#[rstest]
fn given_two_nodes_when_traversing_recursively_then_still_self_invokes() {
    let tree = Tree::build(vec![Some(0), Some(1)]);
    for order in Traversal::ALL.into_iter().filter(|o| o.is_recursive()) {
        let counter = SpanCounter::new();
        counter.observe(|| tree.traverse(order));
        assert!(counter.count(order.function_name()) > 1, "{}", order);
    }
}

#[rstest]
fn given_absent_root_when_traversing_then_every_order_is_empty() {
    let tree: Tree<i32> = Tree::empty();
    for order in Traversal::ALL {
        assert!(tree.traverse(order).is_empty(), "{}", order);
    }
}

#[rstest]
fn given_tall_tree_when_traversing_iteratively_then_enters_once() {
    // zig-zag spine: left, right, left, ...
    let mut node = Node::new(200);
    for value in (0..200).rev() {
        node = if value % 2 == 0 {
            Node::new(value).with_left(node)
        } else {
            Node::new(value).with_right(node)
        };
    }
    let tree = Tree::from_root(node);

    for order in Traversal::ALL.into_iter().filter(|o| !o.is_recursive()) {
        let counter = SpanCounter::new();
        let values = counter.observe(|| tree.traverse(order));
        assert_eq!(values.len(), 201);
        assert_eq!(counter.count(order.function_name()), 1, "{}", order);
    }
}
