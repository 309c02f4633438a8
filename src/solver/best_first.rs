// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

use super::queue::BucketQueue;
use super::{BlockingHeuristic, Heuristic, PathArena, SearchStats, SolveResult, Solver};
use crate::board::Board;
use crate::{BoardValue, FxHashMap};
use log::{debug, trace};

struct Entry<V> {
    depth: usize,
    hash: u64,
    board: Board<V>,
    node: Option<usize>,
}

/// Best-first (A*-style) search, ordered by moves so far plus a [`Heuristic`] estimate of the
/// moves remaining. Among entries of equal priority, the one discovered first is expanded first.
///
/// With the default [`BlockingHeuristic`] this is usually much faster than
/// [`BreadthFirstSolver`](super::BreadthFirstSolver), but since that heuristic can overestimate,
/// the solution found is not guaranteed to be a shortest one. It does find a solution whenever
/// one exists (given no node budget).
#[derive(Clone, Debug, Default)]
pub struct BestFirstSolver<H = BlockingHeuristic> {
    heuristic: H,
    max_nodes: Option<usize>,
    stats: SearchStats,
}

impl BestFirstSolver {
    /// A solver using the [`BlockingHeuristic`] and no node budget.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H> BestFirstSolver<H>
where
    H: Heuristic,
{
    /// A solver using the provided heuristic and no node budget.
    pub fn with_heuristic(heuristic: H) -> Self {
        Self {
            heuristic,
            max_nodes: None,
            stats: SearchStats::default(),
        }
    }

    /// Give up, reporting [`SolveResult::Cutoff`], after expanding `max_nodes` states.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }
}

impl<H> Solver for BestFirstSolver<H>
where
    H: Heuristic,
{
    fn search<V: BoardValue>(&mut self, board: &Board<V>) -> SolveResult {
        self.stats = SearchStats::default();
        let mut arena = PathArena::default();
        // shallowest known depth of every discovered state
        let mut best = FxHashMap::default();
        let hash = board.canonical_hash();
        best.insert(hash, 0);
        let mut open = BucketQueue::new();
        open.push(
            self.heuristic.estimate(board),
            Entry {
                depth: 0,
                hash,
                board: board.clone(),
                node: None,
            },
        );

        while let Some(Entry {
            depth,
            hash,
            board: current,
            node,
        }) = open.pop_min()
        {
            if current.is_solved() {
                let solution = arena.path(node);
                self.stats.states_seen = best.len();
                debug!(
                    "best-first: solved in {} moves after expanding {} states",
                    solution.steps(),
                    self.stats.nodes_explored
                );
                return SolveResult::Solved(solution);
            }
            if best.get(&hash).is_some_and(|&known| depth > known) {
                trace!("best-first: dropping stale entry at depth {depth}");
                continue;
            }
            if self
                .max_nodes
                .is_some_and(|max| self.stats.nodes_explored >= max)
            {
                self.stats.states_seen = best.len();
                debug!(
                    "best-first: budget of {} states exhausted",
                    self.stats.nodes_explored
                );
                return SolveResult::Cutoff;
            }
            self.stats.nodes_explored += 1;

            let next_depth = depth + 1;
            for step in current.legal_moves() {
                let mut next = current.clone();
                if !next.move_vehicle(step.identity(), step.direction()) {
                    continue;
                }
                let next_hash = next.canonical_hash();
                if best
                    .get(&next_hash)
                    .is_none_or(|&known| next_depth < known)
                {
                    best.insert(next_hash, next_depth);
                    let id = arena.push(node, step);
                    let priority = next_depth + self.heuristic.estimate(&next);
                    trace!("best-first: queueing {step} with priority {priority}");
                    open.push(
                        priority,
                        Entry {
                            depth: next_depth,
                            hash: next_hash,
                            board: next,
                            node: Some(id),
                        },
                    );
                }
            }
            self.stats.max_frontier = self.stats.max_frontier.max(open.len());
        }

        self.stats.states_seen = best.len();
        debug!(
            "best-first: no solution among {} reachable states",
            best.len()
        );
        SolveResult::Impossible
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}
