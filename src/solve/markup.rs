use crate::puzzle::{Puzzle, VarId, WordId};
use crate::LinkedHashSet;

/// Candidate words for one slot, in insertion order
pub(crate) type WordSet = LinkedHashSet<WordId>;

/// Tracks which words can still fill each slot
///
/// Candidate sets only ever shrink. Iteration order is the word bank
/// order, which keeps solving reproducible.
#[derive(Clone)]
pub(crate) struct PuzzleMarkup {
    domains: Vec<WordSet>,
}

impl PuzzleMarkup {
    /// Seeds every slot with the whole word bank
    pub fn new(puzzle: &Puzzle) -> Self {
        let mut all = WordSet::default();
        for word in 0..puzzle.word_count() {
            all.insert(word);
        }
        Self {
            domains: vec![all; puzzle.variable_count()],
        }
    }

    pub fn domain(&self, var: VarId) -> &WordSet {
        &self.domains[var]
    }

    pub fn domain_len(&self, var: VarId) -> usize {
        self.domains[var].len()
    }

    /// Snapshot of a slot's candidates, for iterating while removing
    pub fn candidates(&self, var: VarId) -> Vec<WordId> {
        self.domains[var].iter().copied().collect()
    }

    pub fn remove(&mut self, var: VarId, word: WordId) -> bool {
        self.domains[var].remove(&word)
    }
}
