//! Solve crossword fill puzzles

use crate::puzzle::{Puzzle, Solution};

use self::constraint::{apply_unary_constraints, propagate_constraints, PropagateResult};
use self::markup::PuzzleMarkup;
use self::search::{search_solution, Assignment, SearchResult};

mod constraint;
mod markup;
mod search;

pub enum SolveResult {
    /// No complete fill exists with the given word list
    Unsolvable,
    /// The puzzle was filled
    Solved(SolvedData),
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }

    pub fn solved(&self) -> Option<&SolvedData> {
        match self {
            SolveResult::Solved(data) => Some(data),
            _ => None,
        }
    }
}

pub struct SolvedData {
    pub solution: Solution,
    /// whether backtracking was needed on top of constraint propagation
    pub used_search: bool,
}

pub struct PuzzleSolver<'a> {
    puzzle: &'a Puzzle,
}

impl<'a> PuzzleSolver<'a> {
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Self { puzzle }
    }

    pub fn solve(&self) -> SolveResult {
        let mut markup = PuzzleMarkup::new(self.puzzle);
        apply_unary_constraints(self.puzzle, &mut markup);
        match propagate_constraints(self.puzzle, &mut markup) {
            PropagateResult::EmptyDomain(var) => {
                debug!(
                    "propagation emptied the candidates of {}",
                    self.puzzle.variable(var)
                );
                return SolveResult::Unsolvable;
            }
            PropagateResult::Consistent => (),
        }
        if let Some(solution) = self.singleton_solution(&markup) {
            debug_assert!(self.puzzle.verify_solution(&solution));
            return SolveResult::Solved(SolvedData {
                solution,
                used_search: false,
            });
        }
        info!("Begin backtracking");
        let solution = match search_solution(self.puzzle, &markup) {
            SearchResult::NoSolution => return SolveResult::Unsolvable,
            SearchResult::Solution(solution) => solution,
        };
        debug_assert!(self.puzzle.verify_solution(&solution));
        SolveResult::Solved(SolvedData {
            solution,
            used_search: true,
        })
    }

    /// The fill left by propagation alone, when every slot is down to one
    /// candidate and the candidates do not collide
    fn singleton_solution(&self, markup: &PuzzleMarkup) -> Option<Solution> {
        let mut assignment = Assignment::new();
        for var in 0..self.puzzle.variable_count() {
            if markup.domain_len(var) != 1 {
                return None;
            }
            let word = *markup.domain(var).iter().next().expect("one candidate");
            assignment.assign(var, word);
        }
        if assignment.is_consistent(self.puzzle) {
            Some(assignment.to_solution(self.puzzle))
        } else {
            None
        }
    }
}
