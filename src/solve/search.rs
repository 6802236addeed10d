use std::cmp::Reverse;

use itertools::Itertools;
use vec_map::VecMap;

use crate::puzzle::{Puzzle, Solution, VarId, WordId};
use crate::solve::markup::PuzzleMarkup;
use crate::HashSet;

pub(crate) enum SearchResult {
    NoSolution,
    Solution(Solution),
}

/// Depth-first search for a complete fill over the propagated markup
///
/// Returns the first complete consistent fill found; candidate sets are
/// not touched, so failed branches only need their slot unassigned.
pub(crate) fn search_solution(puzzle: &Puzzle, markup: &PuzzleMarkup) -> SearchResult {
    let mut context = SearchContext {
        puzzle,
        markup,
        assignment: Assignment::new(),
    };
    if context.search_next(1) {
        SearchResult::Solution(context.assignment.to_solution(puzzle))
    } else {
        SearchResult::NoSolution
    }
}

struct SearchContext<'a> {
    puzzle: &'a Puzzle,
    markup: &'a PuzzleMarkup,
    assignment: Assignment,
}

impl SearchContext<'_> {
    fn search_next(&mut self, depth: u32) -> bool {
        if self.assignment.is_complete(self.puzzle) {
            return true;
        }
        debug!("Backtracking (depth={})", depth);
        let var = select_unassigned_variable(self.puzzle, self.markup, &self.assignment);
        let candidates = order_domain_values(self.puzzle, self.markup, &self.assignment, var);
        for (i, word) in candidates.into_iter().enumerate() {
            debug!(
                "Guessing with {} at {}, guess #: {}",
                self.puzzle.word(word),
                self.puzzle.variable(var),
                i + 1
            );
            self.assignment.assign(var, word);
            if self.assignment.is_consistent(self.puzzle) && self.search_next(depth + 1) {
                return true;
            }
            debug!("Guess failed");
            self.assignment.unassign(var);
        }
        false
    }
}

/// Picks the unassigned slot with the fewest candidates left, breaking
/// ties toward the slot with the most crossings
fn select_unassigned_variable(
    puzzle: &Puzzle,
    markup: &PuzzleMarkup,
    assignment: &Assignment,
) -> VarId {
    (0..puzzle.variable_count())
        .filter(|&var| !assignment.contains(var))
        .min_by_key(|&var| (markup.domain_len(var), Reverse(puzzle.neighbors(var).len())))
        .expect("no unassigned slots")
}

/// Orders a slot's candidates by how many candidates they would rule out
/// across unassigned crossing slots, fewest first
///
/// The count includes the candidate itself when it sits in a crossing
/// slot's set; the ordering is a performance heuristic either way.
fn order_domain_values(
    puzzle: &Puzzle,
    markup: &PuzzleMarkup,
    assignment: &Assignment,
    var: VarId,
) -> Vec<WordId> {
    let unassigned_neighbors: Vec<VarId> = puzzle
        .neighbors(var)
        .iter()
        .copied()
        .filter(|&u| !assignment.contains(u))
        .collect();
    markup
        .domain(var)
        .iter()
        .copied()
        .sorted_by_key(|&word| {
            unassigned_neighbors
                .iter()
                .map(|&u| {
                    let (i, j) = puzzle.overlap(var, u).expect("crossing slots overlap");
                    let letter = puzzle.word_letter(word, i);
                    markup
                        .domain(u)
                        .iter()
                        .filter(|&&other| puzzle.word_letter(other, j) != letter)
                        .count()
                })
                .sum::<usize>()
        })
        .collect()
}

/// A partial fill, built and torn down one slot at a time
#[derive(Debug, Default)]
pub(crate) struct Assignment {
    words: VecMap<WordId>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn contains(&self, var: VarId) -> bool {
        self.words.contains_key(var)
    }

    pub fn assign(&mut self, var: VarId, word: WordId) {
        self.words.insert(var, word);
    }

    pub fn unassign(&mut self, var: VarId) {
        self.words.remove(var);
    }

    pub fn is_complete(&self, puzzle: &Puzzle) -> bool {
        self.words.len() == puzzle.variable_count()
    }

    /// Whether the assigned words fit their slots without repeats or
    /// crossing disagreements; unassigned slots are ignored
    pub fn is_consistent(&self, puzzle: &Puzzle) -> bool {
        let mut seen = HashSet::default();
        for (var, &word) in self.words.iter() {
            if !seen.insert(word) {
                return false;
            }
            if puzzle.word_len(word) != puzzle.variable(var).length {
                return false;
            }
        }
        let vars: Vec<VarId> = self.words.keys().collect();
        vars.into_iter().tuple_combinations().all(|(x, y)| {
            match puzzle.overlap(x, y) {
                Some((i, j)) => {
                    puzzle.word_letter(self.words[x], i) == puzzle.word_letter(self.words[y], j)
                }
                None => true,
            }
        })
    }

    pub fn to_solution(&self, puzzle: &Puzzle) -> Solution {
        debug_assert!(self.is_complete(puzzle));
        let words = (0..puzzle.variable_count())
            .map(|var| puzzle.word(self.words[var]).to_string())
            .collect();
        Solution::new(words)
    }
}
