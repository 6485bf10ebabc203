use crate::collision::ScanReport;
use crate::collision::scan::PairOutcome;
use crate::config::{CheckMode, CollisionConfig};
use crate::scene::SceneTree;

/// Checks that the counters of a report agree with its outcomes and that
/// every reported collision only carries the fields its mode can produce.
pub fn report_is_consistent(report: &ScanReport, config: &CollisionConfig) -> bool {
    let stats = report.stats;
    assert_eq!(
        stats.n_pairs,
        stats.n_pruned + stats.n_evaluated + stats.n_skipped,
        "every visited pair is either pruned, evaluated or skipped"
    );
    assert_eq!(stats.n_collisions, report.collisions().count());
    assert_eq!(stats.n_skipped, report.skipped().count());
    assert_eq!(
        report.outcomes.len(),
        stats.n_collisions + stats.n_skipped
    );

    for outcome in &report.outcomes {
        let PairOutcome::Collision(r) = outcome else {
            continue;
        };
        assert!(r.is_intersecting || r.will_intersect);
        assert!(r.will_intersect || r.minimum_translation_vector.is_none());
        match config.mode {
            CheckMode::LineCollision => {
                assert!(!r.will_intersect);
                assert_eq!(r.is_intersecting, r.on_path);
                assert!(r.containment.is_none() && r.max_crossings.is_none());
            }
            CheckMode::SeparatingAxisTheorem => {
                assert!(!r.on_path);
                assert!(r.intersection_points.is_empty());
                assert!(r.containment.is_none() && r.max_crossings.is_none());
            }
            CheckMode::Mixed => {
                assert_eq!(r.is_intersecting, r.containment.is_some());
                assert_eq!(r.containment.is_some(), r.max_crossings.is_some());
                assert!(r.is_intersecting || !r.on_path);
            }
        }
    }
    true
}

/// Checks the parent and child links of the tree mirror each other.
pub fn tree_links_are_consistent(tree: &SceneTree) -> bool {
    let mut n_visited = 0;
    let mut stack = tree.roots().to_vec();
    for &root in tree.roots() {
        assert!(tree[root].parent.is_none());
    }
    while let Some(key) = stack.pop() {
        n_visited += 1;
        for &child in &tree[key].children {
            assert_eq!(tree[child].parent, Some(key));
            stack.push(child);
        }
    }
    assert_eq!(n_visited, tree.len(), "every node is reachable from a root");
    true
}
