use crate::collision::{CollisionResult, EvalError, evaluate_pair};
use crate::config::CollisionConfig;
use crate::consts::ANONYMOUS_ID;
use crate::scene::{NodeKey, SceneTree};
use crate::util::assertions::report_is_consistent;
use crate::walker;
use log::{debug, log, trace, warn};
use serde::Serialize;
use std::iter::Sum;
use std::ops::AddAssign;
use std::time::Instant;

/// Result of evaluating one pair that was worth reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PairOutcome {
    Collision(CollisionResult),
    /// The pair could not be evaluated, it is unknown whether the shapes collide
    Skipped {
        collidor: String,
        collidee: String,
        reason: EvalError,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Pairs produced by the tree walk
    pub n_pairs: usize,
    /// Pairs excluded because one of the shapes is below the minimum area
    pub n_pruned: usize,
    pub n_evaluated: usize,
    pub n_collisions: usize,
    pub n_skipped: usize,
}

impl Sum for ScanStats {
    fn sum<I: Iterator<Item = ScanStats>>(iter: I) -> Self {
        let mut total = ScanStats::default();
        for stats in iter {
            total += stats;
        }
        total
    }
}

impl AddAssign for ScanStats {
    fn add_assign(&mut self, other: Self) {
        self.n_pairs += other.n_pairs;
        self.n_pruned += other.n_pruned;
        self.n_evaluated += other.n_evaluated;
        self.n_collisions += other.n_collisions;
        self.n_skipped += other.n_skipped;
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    /// Collisions and skipped pairs, in the order the pairs were discovered
    pub outcomes: Vec<PairOutcome>,
    pub stats: ScanStats,
}

impl ScanReport {
    pub fn collisions(&self) -> impl Iterator<Item = &CollisionResult> {
        self.outcomes.iter().filter_map(|o| match o {
            PairOutcome::Collision(r) => Some(r),
            PairOutcome::Skipped { .. } => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = &PairOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, PairOutcome::Skipped { .. }))
    }

    pub fn into_collisions(self) -> Vec<CollisionResult> {
        self.outcomes
            .into_iter()
            .filter_map(|o| match o {
                PairOutcome::Collision(r) => Some(r),
                PairOutcome::Skipped { .. } => None,
            })
            .collect()
    }
}

/// State of a single collision pass over a scene tree.
/// Every pass owns its own scan, so passes over the same tree can run concurrently.
pub struct CollisionScan<'a> {
    tree: &'a SceneTree,
    config: &'a CollisionConfig,
    outcomes: Vec<PairOutcome>,
    stats: ScanStats,
}

impl<'a> CollisionScan<'a> {
    pub fn new(tree: &'a SceneTree, config: &'a CollisionConfig) -> Self {
        Self {
            tree,
            config,
            outcomes: vec![],
            stats: ScanStats::default(),
        }
    }

    pub fn run(mut self) -> ScanReport {
        let start = Instant::now();
        let (tree, enumeration) = (self.tree, self.config.enumeration);

        walker::walk(tree, enumeration, |outer, inner| self.visit(outer, inner));

        log!(
            self.config.log_level,
            "[SCAN] {:?} scan finished: {} pairs, {} pruned, {} evaluated, {} colliding, {} skipped ({:.3}ms)",
            self.config.mode,
            self.stats.n_pairs,
            self.stats.n_pruned,
            self.stats.n_evaluated,
            self.stats.n_collisions,
            self.stats.n_skipped,
            start.elapsed().as_secs_f64() * 1000.0
        );

        let report = ScanReport {
            outcomes: self.outcomes,
            stats: self.stats,
        };
        debug_assert!(report_is_consistent(&report, self.config));
        report
    }

    fn visit(&mut self, outer: NodeKey, inner: NodeKey) {
        self.stats.n_pairs += 1;
        let tree = self.tree;
        let (outer_node, inner_node) = (&tree[outer], &tree[inner]);
        let (Some(a), Some(b)) = (&outer_node.shape, &inner_node.shape) else {
            debug_assert!(false, "walker emitted a node without shape");
            return;
        };
        let collidor = outer_node.id.as_deref().unwrap_or(ANONYMOUS_ID);
        let collidee = inner_node.id.as_deref().unwrap_or(ANONYMOUS_ID);

        let min_area = self.config.minimum_area;
        if min_area != 0.0 && (a.outer_area < min_area || b.outer_area < min_area) {
            trace!("[SCAN] pruned {collidor} <-> {collidee}, below minimum area");
            self.stats.n_pruned += 1;
            return;
        }

        match evaluate_pair(self.config, a, b) {
            Ok(test) => {
                self.stats.n_evaluated += 1;
                if test.is_collision() {
                    debug!(
                        "[SCAN] {collidor} -> {collidee}: intersecting: {}, will intersect: {}, on path: {}",
                        test.is_intersecting, test.will_intersect, test.on_path
                    );
                    self.stats.n_collisions += 1;
                    self.outcomes.push(PairOutcome::Collision(CollisionResult::new(
                        collidor.to_string(),
                        collidee.to_string(),
                        test,
                    )));
                }
            }
            Err(reason) => {
                warn!("[SCAN] skipped {collidor} -> {collidee}: {reason}");
                self.stats.n_skipped += 1;
                self.outcomes.push(PairOutcome::Skipped {
                    collidor: collidor.to_string(),
                    collidee: collidee.to_string(),
                    reason,
                });
            }
        }
    }
}

/// Tests every eligible pair of shapes in the tree and reports the ones that collide.
pub fn check_for_collision(tree: &SceneTree, config: &CollisionConfig) -> ScanReport {
    CollisionScan::new(tree, config).run()
}
