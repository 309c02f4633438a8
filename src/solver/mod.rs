// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! Searching for solutions.
//!
//! Both solvers expand states the same way: every legal move of the current board is tried on a
//! clone, and the resulting board is kept only if its [canonical hash](Board::canonical_hash) has
//! not been seen before (or, for [`BestFirstSolver`], was only seen at a greater depth). The path
//! to each state is kept as a parent pointer into an arena rather than as a full move list, and
//! boards are dropped as soon as they have been expanded.

mod best_first;
mod bfs;
mod heuristic;
mod queue;

pub use best_first::BestFirstSolver;
pub use bfs::BreadthFirstSolver;
pub use heuristic::{BlockingHeuristic, Heuristic, NullHeuristic};

use crate::board::Board;
use crate::solution::{Move, Solution};
use crate::BoardValue;
use alloc::vec::Vec;

/// The outcome of a search.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SolveResult {
    /// A sequence of moves that solves the board.
    Solved(Solution),
    /// Every reachable state was explored and none is solved.
    Impossible,
    /// The node budget ran out before the search finished: the board is unsolvable within the
    /// budget, but may still be solvable.
    Cutoff,
}

impl SolveResult {
    /// The solution, if one was found.
    pub fn solution(self) -> Option<Solution> {
        match self {
            SolveResult::Solved(solution) => Some(solution),
            SolveResult::Impossible | SolveResult::Cutoff => None,
        }
    }
}

/// Counters describing the most recent search of a solver.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchStats {
    /// Number of states which were expanded.
    pub nodes_explored: usize,
    /// Number of distinct states which were discovered, including the initial one.
    pub states_seen: usize,
    /// The largest size the frontier reached.
    pub max_frontier: usize,
}

/// A search strategy. All solvers share [`Solver::solve`], so callers may stay agnostic of the
/// strategy in use.
pub trait Solver {
    /// Search for a solution to `board`.
    fn search<V: BoardValue>(&mut self, board: &Board<V>) -> SolveResult;

    /// Statistics about the most recent call to [`Solver::search`].
    fn stats(&self) -> SearchStats;

    /// Search for a solution to `board`, returning `None` if there is none (or none was found
    /// within the node budget). An already solved board yields an empty solution.
    fn solve<V: BoardValue>(&mut self, board: &Board<V>) -> Option<Solution> {
        self.search(board).solution()
    }
}

struct Node {
    parent: Option<usize>,
    step: Move,
}

/// Parent-pointer storage for search paths. `None` stands for the initial state.
#[derive(Default)]
struct PathArena {
    nodes: Vec<Node>,
}

impl PathArena {
    fn push(&mut self, parent: Option<usize>, step: Move) -> usize {
        self.nodes.push(Node { parent, step });
        self.nodes.len() - 1
    }

    fn path(&self, mut leaf: Option<usize>) -> Solution {
        let mut moves = Vec::new();
        while let Some(idx) = leaf {
            let node = &self.nodes[idx];
            moves.push(node.step);
            leaf = node.parent;
        }
        moves.reverse();
        Solution::from(moves)
    }
}


#[cfg(test)]
mod test {
    use super::PathArena;
    use crate::{Direction, Move};

    #[test]
    fn arena_paths() {
        let mut arena = PathArena::default();
        let a = arena.push(None, Move::new('A', Direction::Up));
        let b = arena.push(Some(a), Move::new('B', Direction::Left));
        let c = arena.push(Some(a), Move::new('C', Direction::Down));
        let d = arena.push(Some(c), Move::new('X', Direction::Right));

        assert!(arena.path(None).is_empty());
        assert_eq!(
            [Move::new('A', Direction::Up), Move::new('B', Direction::Left)].as_slice(),
            &*arena.path(Some(b))
        );
        assert_eq!(
            [
                Move::new('A', Direction::Up),
                Move::new('C', Direction::Down),
                Move::new('X', Direction::Right),
            ]
            .as_slice(),
            &*arena.path(Some(d))
        );
    }
}
