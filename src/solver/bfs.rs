// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

use super::{PathArena, SearchStats, SolveResult, Solver};
use crate::board::Board;
use crate::{BoardValue, FxHashSet};
use alloc::collections::VecDeque;
use log::{debug, trace};

/// Exhaustive breadth-first search.
///
/// States are expanded in order of the number of moves needed to reach them, so the first solved
/// state found is reached by a shortest possible sequence of moves. Without a node budget the
/// search always terminates: every reachable state is visited at most once.
#[derive(Clone, Debug, Default)]
pub struct BreadthFirstSolver {
    max_nodes: Option<usize>,
    stats: SearchStats,
}

impl BreadthFirstSolver {
    /// A solver without a node budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Give up, reporting [`SolveResult::Cutoff`], after expanding `max_nodes` states.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }
}

impl Solver for BreadthFirstSolver {
    fn search<V: BoardValue>(&mut self, board: &Board<V>) -> SolveResult {
        self.stats = SearchStats::default();
        let mut arena = PathArena::default();
        let mut visited = FxHashSet::default();
        visited.insert(board.canonical_hash());
        let mut frontier = VecDeque::new();
        frontier.push_back((board.clone(), None));

        while let Some((current, node)) = frontier.pop_front() {
            if current.is_solved() {
                let solution = arena.path(node);
                self.stats.states_seen = visited.len();
                debug!(
                    "breadth-first: solved in {} moves after expanding {} states",
                    solution.steps(),
                    self.stats.nodes_explored
                );
                return SolveResult::Solved(solution);
            }
            if self
                .max_nodes
                .is_some_and(|max| self.stats.nodes_explored >= max)
            {
                self.stats.states_seen = visited.len();
                debug!(
                    "breadth-first: budget of {} states exhausted",
                    self.stats.nodes_explored
                );
                return SolveResult::Cutoff;
            }
            self.stats.nodes_explored += 1;

            for step in current.legal_moves() {
                let mut next = current.clone();
                if !next.move_vehicle(step.identity(), step.direction()) {
                    continue;
                }
                if visited.insert(next.canonical_hash()) {
                    trace!("breadth-first: discovered state via {step}");
                    let id = arena.push(node, step);
                    frontier.push_back((next, Some(id)));
                }
            }
            self.stats.max_frontier = self.stats.max_frontier.max(frontier.len());
        }

        self.stats.states_seen = visited.len();
        debug!(
            "breadth-first: no solution among {} reachable states",
            visited.len()
        );
        SolveResult::Impossible
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}
