// Tests for cyclical reference detection

use menugraph_core::detect::{ClassificationResult, Validity, classify, classify_menu, walk};
use menugraph_core::graph::MenuGraph;
use menugraph_fetcher::Menu;

fn graph_of(menus: Vec<Menu>) -> MenuGraph {
    menus.into_iter().collect()
}

fn validity_of(results: &[ClassificationResult], id: i64) -> Validity {
    results
        .iter()
        .find(|r| r.root_id == id)
        .map(|r| r.validity)
        .unwrap()
}

// ============================================================================
// Basic Classification Tests
// ============================================================================

#[test]
fn test_empty_graph_classifies_nothing() {
    let graph = MenuGraph::new();
    assert!(classify(&graph).is_empty());
}

#[test]
fn test_leaf_menu_is_valid() {
    let graph = graph_of(vec![Menu::new(1, vec![])]);
    let results = classify(&graph);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].validity, Validity::Valid);
    assert!(results[0].is_valid());
}

#[test]
fn test_every_leaf_is_valid_regardless_of_parents() {
    let graph = graph_of(vec![
        Menu::new(1, vec![2]),
        Menu::new(2, vec![1]),
        Menu::new(3, vec![]).with_parent(1),
    ]);
    let results = classify(&graph);

    assert_eq!(validity_of(&results, 3), Validity::Valid);
}

#[test]
fn test_self_loop_is_invalid() {
    let graph = graph_of(vec![Menu::new(5, vec![5])]);
    let root = graph.get(5).unwrap();

    assert_eq!(walk(&graph, root), vec![5, 5]);
    assert_eq!(classify(&graph)[0].validity, Validity::Invalid);
}

#[test]
fn test_simple_tree_is_valid() {
    let graph = graph_of(vec![
        Menu::new(1, vec![2, 3]),
        Menu::new(2, vec![4]),
        Menu::new(3, vec![]),
        Menu::new(4, vec![]),
    ]);
    let results = classify(&graph);

    assert!(results.iter().all(|r| r.validity == Validity::Valid));
}

#[test]
fn test_cycle_marks_every_member_invalid() {
    // 1 -> 2 -> 3 -> 1
    let graph = graph_of(vec![
        Menu::new(1, vec![2]),
        Menu::new(2, vec![3]),
        Menu::new(3, vec![1]),
    ]);
    let results = classify(&graph);

    for id in [1, 2, 3] {
        assert_eq!(validity_of(&results, id), Validity::Invalid);
    }
}

#[test]
fn test_root_leading_into_cycle_is_invalid() {
    // 1 -> 2 <-> 3; 1 itself is not on the cycle
    let graph = graph_of(vec![
        Menu::new(1, vec![2]),
        Menu::new(2, vec![3]),
        Menu::new(3, vec![2]),
    ]);
    let results = classify(&graph);

    assert_eq!(validity_of(&results, 1), Validity::Invalid);
}

// ============================================================================
// Convergent Branch Tests
// ============================================================================

#[test]
fn test_diamond_is_invalid() {
    // A -> {B, C}, B -> D, C -> D: no path back to A, but D is reached twice
    let graph = graph_of(vec![
        Menu::new(1, vec![2, 3]),
        Menu::new(2, vec![4]),
        Menu::new(3, vec![4]),
        Menu::new(4, vec![]),
    ]);
    let results = classify(&graph);

    assert_eq!(walk(&graph, graph.get(1).unwrap()), vec![1, 2, 4, 3, 4]);
    assert_eq!(validity_of(&results, 1), Validity::Invalid);
    assert_eq!(validity_of(&results, 2), Validity::Valid);
    assert_eq!(validity_of(&results, 3), Validity::Valid);
    assert_eq!(validity_of(&results, 4), Validity::Valid);
}

#[test]
fn test_duplicate_child_id_is_invalid() {
    let graph = graph_of(vec![Menu::new(1, vec![2, 2]), Menu::new(2, vec![])]);
    let results = classify(&graph);

    assert_eq!(validity_of(&results, 1), Validity::Invalid);
    assert_eq!(validity_of(&results, 2), Validity::Valid);
}

// ============================================================================
// Dangling Reference Tests
// ============================================================================

#[test]
fn test_dangling_child_is_ignored() {
    let graph = graph_of(vec![Menu::new(1, vec![404])]);
    let root = graph.get(1).unwrap();

    assert_eq!(walk(&graph, root), vec![1]);
    assert_eq!(classify(&graph)[0].validity, Validity::Valid);
}

#[test]
fn test_dangling_branch_does_not_stop_siblings() {
    // The missing 404 is skipped; 2 still leads back to 1
    let graph = graph_of(vec![Menu::new(1, vec![404, 2]), Menu::new(2, vec![1])]);
    let root = graph.get(1).unwrap();

    assert_eq!(walk(&graph, root), vec![1, 2, 1]);
    assert_eq!(classify_menu(&graph, root).validity, Validity::Invalid);
}

#[test]
fn test_repeated_dangling_child_is_valid() {
    let graph = graph_of(vec![Menu::new(1, vec![404, 404])]);
    assert_eq!(classify(&graph)[0].validity, Validity::Valid);
}

// ============================================================================
// Ordering and Purity Tests
// ============================================================================

#[test]
fn test_results_follow_graph_order() {
    let graph = graph_of(vec![
        Menu::new(30, vec![]),
        Menu::new(10, vec![10]),
        Menu::new(20, vec![]),
    ]);
    let roots: Vec<i64> = classify(&graph).iter().map(|r| r.root_id).collect();

    assert_eq!(roots, vec![30, 10, 20]);
}

#[test]
fn test_children_are_original_child_ids() {
    let graph = graph_of(vec![
        Menu::new(1, vec![3, 404, 2]),
        Menu::new(2, vec![]),
        Menu::new(3, vec![]),
    ]);
    let results = classify(&graph);

    assert_eq!(results[0].children, vec![3, 404, 2]);
}

#[test]
fn test_classify_is_idempotent() {
    let graph = graph_of(vec![
        Menu::new(1, vec![2, 3]),
        Menu::new(2, vec![4]),
        Menu::new(3, vec![4]),
        Menu::new(4, vec![1]),
        Menu::new(5, vec![]),
    ]);

    let first = classify(&graph);
    let second = classify(&graph);
    assert_eq!(first, second);
}

#[test]
fn test_roots_do_not_share_traversal_state() {
    // Node 2 appears in 1's walk; that must not make 2 invalid on its own walk
    let graph = graph_of(vec![
        Menu::new(1, vec![2]),
        Menu::new(2, vec![3]),
        Menu::new(3, vec![]),
    ]);
    let results = classify(&graph);

    assert!(results.iter().all(|r| r.validity == Validity::Valid));
}

#[test]
fn test_long_chain_does_not_overflow() {
    let n = 50_000;
    let menus: Vec<Menu> = (0..n)
        .map(|i| {
            let next = if i + 1 < n { i + 1 } else { 0 };
            Menu::new(i, vec![next])
        })
        .collect();
    let graph = graph_of(menus);
    let root = graph.get(0).unwrap();

    let visited = walk(&graph, root);
    assert_eq!(visited.len(), n as usize + 1);
    assert_eq!(classify_menu(&graph, root).validity, Validity::Invalid);
}
