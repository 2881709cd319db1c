//! Per-tick collision pass
//!
//! The detection pass is split into a broad phase (quadtree candidate
//! retrieval) and a narrow phase (shape intersection through the dispatch
//! table), followed by resolution of every unique pair found.
//!
//! The detector borrows the caller's body slice for the duration of one
//! call. Body identity is the slice index, so the slice must not be
//! reordered between the broad phase and resolution; the borrow checker
//! guarantees that within a single [`CollisionDetector::detect_collisions`]
//! call.

use crate::foundation::math::IntRect;
use crate::physics::body::{Body, BodyId};
use crate::physics::collision::IntersectionTable;
use crate::physics::pair_registry::{CollisionPair, PairRegistry};
use crate::physics::resolver::resolve_pair;
use crate::spatial::{Quadtree, QuadtreeConfig};

/// Counters from the most recent pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionStats {
    /// Live bodies inserted into the quadtree
    pub bodies_indexed: usize,
    /// Narrow-phase tests run
    pub candidates_tested: usize,
    /// Unique overlapping pairs
    pub pairs_found: usize,
    /// Pairs that were approaching and got reaction callbacks
    pub pairs_resolved: usize,
}

/// Broad phase, narrow phase and resolution for one tick
#[derive(Debug, Clone)]
pub struct CollisionDetector {
    /// Broad-phase index, rebuilt every pass
    quadtree: Quadtree,

    /// Narrow-phase dispatch
    table: IntersectionTable,

    /// Pairs found in the current pass
    pairs: PairRegistry,

    /// Scratch buffer for candidate retrieval
    candidates: Vec<BodyId>,

    stats: CollisionStats,
}

impl CollisionDetector {
    /// Create a detector over a fixed world rectangle
    pub fn new(world_bounds: IntRect, config: QuadtreeConfig) -> Self {
        log::debug!(
            "Collision detector over {:?} (max_objects {}, max_levels {})",
            world_bounds,
            config.max_objects,
            config.max_levels
        );
        Self {
            quadtree: Quadtree::new(world_bounds, config),
            table: IntersectionTable::standard(),
            pairs: PairRegistry::new(),
            candidates: Vec::new(),
            stats: CollisionStats::default(),
        }
    }

    /// Replace the narrow-phase dispatch table
    #[must_use]
    pub fn with_intersection_table(mut self, table: IntersectionTable) -> Self {
        self.table = table;
        self
    }

    /// Broad-phase index as built by the last pass
    pub const fn quadtree(&self) -> &Quadtree {
        &self.quadtree
    }

    /// Pairs found by the last pass
    pub const fn pairs(&self) -> &PairRegistry {
        &self.pairs
    }

    /// Counters from the last pass
    pub const fn last_stats(&self) -> CollisionStats {
        self.stats
    }

    /// Run one full pass: find overlapping pairs, then resolve each in discovery order
    ///
    /// Bodies whose masks were not recentered before the call are tested at
    /// their stale positions. Dead bodies neither enter the index nor query
    /// it. A pair whose member died during an earlier reaction of the same
    /// pass is still resolved.
    pub fn detect_collisions<B: Body>(&mut self, bodies: &mut [B], ctx: &mut B::Context) {
        self.find_pairs(bodies);

        let mut resolved = 0;
        for pair in &self.pairs {
            if resolve_pair(bodies, pair, ctx) {
                resolved += 1;
            }
        }
        self.stats.pairs_resolved = resolved;

        log::trace!(
            "Collision pass: {} bodies, {} tests, {} pairs, {} resolved",
            self.stats.bodies_indexed,
            self.stats.candidates_tested,
            self.stats.pairs_found,
            self.stats.pairs_resolved
        );
    }

    /// Rebuild the index and collect overlapping pairs without resolving them
    pub fn find_pairs<B: Body>(&mut self, bodies: &[B]) -> &PairRegistry {
        self.quadtree.clear();
        self.pairs.clear();
        self.stats = CollisionStats::default();

        for (index, body) in bodies.iter().enumerate() {
            if body.is_alive() {
                self.quadtree.insert(BodyId(index), *body.shape());
                self.stats.bodies_indexed += 1;
            }
        }

        for (index, body) in bodies.iter().enumerate() {
            if !body.is_alive() {
                continue;
            }
            let id = BodyId(index);
            let shape = body.shape();

            self.candidates.clear();
            self.quadtree.retrieve_into(shape, &mut self.candidates);

            for &candidate in &self.candidates {
                if candidate == id {
                    continue;
                }
                self.stats.candidates_tested += 1;
                if self.table.test(shape, bodies[candidate.index()].shape()) {
                    self.pairs.insert(CollisionPair::new(id, candidate));
                }
            }
        }

        self.stats.pairs_found = self.pairs.len();
        &self.pairs
    }
}
