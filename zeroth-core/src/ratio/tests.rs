//! Unit tests for the bar ratio strategies.

use rstest::rstest;

use crate::forest::{self, ForestEdge, SpanningForest};
use crate::graph::{Edge, EdgeId, Graph, Node};

use super::{RatioError, RatioStrategy, compute};

fn graph(ids: &[&str], edges: &[(&str, &str, f32)]) -> Graph {
    let nodes = ids.iter().map(|id| Node::new(*id, "0")).collect();
    let edges = edges
        .iter()
        .map(|(source, target, weight)| Edge::new(*source, *target, *weight))
        .collect();
    Graph::new(nodes, edges).expect("test graph must validate")
}

#[rstest]
#[case::replay(RatioStrategy::Replay)]
#[case::traversal(RatioStrategy::Traversal)]
fn triangle_splits(#[case] strategy: RatioStrategy) {
    let graph = graph(
        &["a", "b", "c"],
        &[("a", "b", 5.0), ("b", "c", 3.0), ("a", "c", 1.0)],
    );
    let forest = forest::build(&graph);
    let splits = compute(&graph, &forest, strategy).expect("forest must be consistent");

    assert_eq!(splits.len(), 2);

    // Removing (a, b): a alone on the source side.
    assert_eq!(splits[0].source_side, vec![0]);
    assert_eq!(splits[0].target_side, vec![1, 2]);
    assert_eq!(splits[0].ratio, 1.0 / 3.0);

    // Removing (b, c): {a, b} on the source side, c on the target side.
    assert_eq!(splits[1].source_side, vec![0, 1]);
    assert_eq!(splits[1].target_side, vec![2]);
    assert_eq!(splits[1].ratio, 1.0 / 3.0);
}

#[rstest]
#[case::replay(RatioStrategy::Replay)]
#[case::traversal(RatioStrategy::Traversal)]
fn star_center_edges_split_one_leaf_each(#[case] strategy: RatioStrategy) {
    let graph = graph(
        &["hub", "x", "y", "z"],
        &[("hub", "x", 4.0), ("hub", "y", 3.0), ("hub", "z", 2.0)],
    );
    let forest = forest::build(&graph);
    let splits = compute(&graph, &forest, strategy).expect("forest must be consistent");

    assert_eq!(splits.len(), 3);
    for split in &splits {
        let smaller = split.source_side.len().min(split.target_side.len());
        assert_eq!(smaller, 1);
        assert_eq!(split.ratio, 0.25);
        assert_eq!(split.source_side.len() + split.target_side.len(), 4);
    }
}

#[rstest]
#[case::replay(RatioStrategy::Replay)]
#[case::traversal(RatioStrategy::Traversal)]
fn disconnected_trees_split_within_their_own_tree(#[case] strategy: RatioStrategy) {
    let graph = graph(
        &["a", "b", "c", "d", "e", "f"],
        &[
            ("a", "b", 6.0),
            ("b", "c", 5.0),
            ("a", "c", 4.0),
            ("d", "e", 3.0),
            ("e", "f", 2.0),
            ("d", "f", 1.0),
        ],
    );
    let forest = forest::build(&graph);
    let splits = compute(&graph, &forest, strategy).expect("forest must be consistent");

    assert_eq!(splits.len(), 4);
    for split in &splits {
        // Each side lives inside one triangle; the denominator is still the
        // full node count.
        assert_eq!(split.source_side.len() + split.target_side.len(), 3);
        let smaller = split.source_side.len().min(split.target_side.len());
        assert_eq!(split.ratio, smaller as f32 / 6.0);
    }
}

#[rstest]
#[case::replay(RatioStrategy::Replay)]
#[case::traversal(RatioStrategy::Traversal)]
fn rejects_forest_with_a_cycle(#[case] strategy: RatioStrategy) {
    let graph = graph(
        &["a", "b", "c"],
        &[("a", "b", 3.0), ("b", "c", 2.0), ("c", "a", 1.0)],
    );
    // Hand-built "forest" containing all three triangle edges: removing any
    // one of them leaves the endpoints connected.
    let forest = SpanningForest {
        edges: vec![
            ForestEdge {
                edge: EdgeId::new(0),
                source: 0,
                target: 1,
                weight: 3.0,
            },
            ForestEdge {
                edge: EdgeId::new(1),
                source: 1,
                target: 2,
                weight: 2.0,
            },
            ForestEdge {
                edge: EdgeId::new(2),
                source: 2,
                target: 0,
                weight: 1.0,
            },
        ],
        deaths: vec![],
        component_count: 1,
    };

    let err = compute(&graph, &forest, strategy).expect_err("cycle must be rejected");
    assert!(matches!(err, RatioError::InconsistentForest { .. }));
    assert_eq!(err.code().as_str(), "RATIO_INCONSISTENT_FOREST");
}

#[rstest]
#[case::replay(RatioStrategy::Replay)]
#[case::traversal(RatioStrategy::Traversal)]
fn single_edge_tree_splits_into_singletons(#[case] strategy: RatioStrategy) {
    let graph = graph(&["a", "b"], &[("a", "b", 1.0)]);
    let forest = forest::build(&graph);
    let splits = compute(&graph, &forest, strategy).expect("forest must be consistent");

    assert_eq!(splits.len(), 1);
    assert_eq!(splits[0].source_side, vec![0]);
    assert_eq!(splits[0].target_side, vec![1]);
    assert_eq!(splits[0].ratio, 0.5);
}
