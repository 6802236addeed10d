//! Crossword puzzles

pub use self::variable::{Direction, Variable};

pub mod error;
mod variable;

use crate::puzzle::error::InvalidPuzzle;
use crate::HashSet;

pub type VarId = usize;
pub type WordId = usize;

/// Offsets of the shared cell into each of the two crossing slots
pub type Overlap = (usize, usize);

/// An unfilled crossword puzzle: the slots to fill and the word list to
/// fill them from
///
/// Slot crossings are computed once from slot geometry at construction.
/// The solver refers to slots and words by `VarId`/`WordId` index.
pub struct Puzzle {
    variables: Vec<Variable>,
    words: Vec<Word>,
    overlaps: Vec<Vec<Option<Overlap>>>,
    neighbors: Vec<Vec<VarId>>,
}

struct Word {
    text: String,
    letters: Box<[char]>,
}

impl Puzzle {
    /// Creates a puzzle with the given slots and vocabulary
    ///
    /// Duplicate words are kept once, in first-seen order. Slots must have
    /// a positive length and must not repeat; parallel slots must not share
    /// cells.
    pub fn new<I, S>(variables: Vec<Variable>, words: I) -> Result<Self, InvalidPuzzle>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::default();
        for &variable in &variables {
            if variable.length == 0 {
                return Err(InvalidPuzzle::new(format!("empty slot {}", variable)));
            }
            if !seen.insert(variable) {
                return Err(InvalidPuzzle::new(format!("duplicate slot {}", variable)));
            }
        }
        let words = word_bank(words)?;
        let overlaps = compute_overlaps(&variables)?;
        let neighbors = compute_neighbors(&overlaps);
        Ok(Self {
            variables,
            words,
            overlaps,
            neighbors,
        })
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn variable(&self, id: VarId) -> Variable {
        self.variables[id]
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn word(&self, id: WordId) -> &str {
        &self.words[id].text
    }

    pub(crate) fn word_len(&self, id: WordId) -> usize {
        self.words[id].letters.len()
    }

    pub(crate) fn word_letter(&self, id: WordId, index: usize) -> char {
        self.words[id].letters[index]
    }

    /// The shared cell of two slots, as an offset into each slot's word
    ///
    /// Symmetric: `overlap(x, y) == Some((i, j))` iff
    /// `overlap(y, x) == Some((j, i))`.
    pub fn overlap(&self, x: VarId, y: VarId) -> Option<Overlap> {
        self.overlaps[x][y]
    }

    /// Slots crossing the given slot
    pub fn neighbors(&self, id: VarId) -> &[VarId] {
        &self.neighbors[id]
    }

    /// Checks that a solution covers every slot with the right lengths,
    /// distinct words and agreeing crossings
    pub fn verify_solution(&self, solution: &Solution) -> bool {
        if solution.len() != self.variables.len() {
            return false;
        }
        let mut seen = HashSet::default();
        for (id, word) in solution.iter() {
            if word.chars().count() != self.variables[id].length {
                return false;
            }
            if !seen.insert(word) {
                return false;
            }
        }
        for x in 0..self.variables.len() {
            for &y in self.neighbors(x).iter().filter(|&&y| y > x) {
                let (i, j) = self.overlaps[x][y].unwrap();
                let a = solution.word(x).chars().nth(i);
                let b = solution.word(y).chars().nth(j);
                if a != b {
                    return false;
                }
            }
        }
        true
    }
}

fn word_bank<I, S>(words: I) -> Result<Vec<Word>, InvalidPuzzle>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::default();
    let mut bank = Vec::new();
    for word in words {
        let text = word.into();
        if text.is_empty() {
            return Err(InvalidPuzzle::new("empty word".into()));
        }
        if !seen.insert(text.clone()) {
            continue;
        }
        let letters = text.chars().collect();
        bank.push(Word { text, letters });
    }
    Ok(bank)
}

fn compute_overlaps(variables: &[Variable]) -> Result<Vec<Vec<Option<Overlap>>>, InvalidPuzzle> {
    let count = variables.len();
    let mut overlaps = vec![vec![None; count]; count];
    for x in 0..count {
        for y in x + 1..count {
            if let Some((i, j)) = crossing(&variables[x], &variables[y]) {
                if variables[x].direction == variables[y].direction {
                    return Err(InvalidPuzzle::new(format!(
                        "slots {} and {} run through the same cell",
                        variables[x], variables[y]
                    )));
                }
                overlaps[x][y] = Some((i, j));
                overlaps[y][x] = Some((j, i));
            }
        }
    }
    Ok(overlaps)
}

fn crossing(a: &Variable, b: &Variable) -> Option<Overlap> {
    a.cells().enumerate().find_map(|(i, cell)| {
        b.cells()
            .enumerate()
            .find_map(|(j, other)| if cell == other { Some((i, j)) } else { None })
    })
}

fn compute_neighbors(overlaps: &[Vec<Option<Overlap>>]) -> Vec<Vec<VarId>> {
    overlaps
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter_map(|(y, overlap)| overlap.map(|_| y))
                .collect()
        })
        .collect()
}

/// A filled puzzle: one word per slot, indexed by `VarId`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    words: Vec<String>,
}

impl Solution {
    pub(crate) fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, id: VarId) -> &str {
        &self.words[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = (VarId, &str)> {
        self.words.iter().enumerate().map(|(id, word)| (id, word.as_str()))
    }
}

#[cfg(test)]
mod test {
    use super::{Direction, Puzzle, Solution, Variable};

    fn crossed_pair() -> Puzzle {
        // ("CAT" across).1 crosses ("ARM" down).0 at cell (0, 1)
        let variables = vec![
            Variable::new(0, 0, Direction::Across, 3),
            Variable::new(0, 1, Direction::Down, 3),
        ];
        Puzzle::new(variables, vec!["CAT", "ARM", "TEA"]).unwrap()
    }

    #[test]
    fn overlaps_are_symmetric() {
        let puzzle = crossed_pair();
        assert_eq!(puzzle.overlap(0, 1), Some((1, 0)));
        assert_eq!(puzzle.overlap(1, 0), Some((0, 1)));
    }

    #[test]
    fn neighbors_follow_overlaps() {
        let puzzle = crossed_pair();
        assert_eq!(puzzle.neighbors(0), [1]);
        assert_eq!(puzzle.neighbors(1), [0]);
    }

    #[test]
    fn disjoint_slots_do_not_overlap() {
        let variables = vec![
            Variable::new(0, 0, Direction::Across, 3),
            Variable::new(2, 0, Direction::Down, 2),
        ];
        let puzzle = Puzzle::new(variables, vec!["AB"]).unwrap();
        assert_eq!(puzzle.overlap(0, 1), None);
        assert!(puzzle.neighbors(0).is_empty());
    }

    #[test]
    fn duplicate_words_are_kept_once() {
        let puzzle = Puzzle::new(
            vec![Variable::new(0, 0, Direction::Across, 3)],
            vec!["CAT", "ARM", "CAT"],
        )
        .unwrap();
        assert_eq!(puzzle.word_count(), 2);
        assert_eq!(puzzle.word(0), "CAT");
        assert_eq!(puzzle.word(1), "ARM");
    }

    #[test]
    fn rejects_empty_slot() {
        let result = Puzzle::new(vec![Variable::new(0, 0, Direction::Across, 0)], vec!["A"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_duplicate_slot() {
        let variable = Variable::new(0, 0, Direction::Down, 4);
        let result = Puzzle::new(vec![variable, variable], vec!["WORD"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_collinear_slots_sharing_cells() {
        let variables = vec![
            Variable::new(0, 0, Direction::Across, 4),
            Variable::new(0, 2, Direction::Across, 3),
        ];
        assert!(Puzzle::new(variables, vec!["WORD"]).is_err());
    }

    #[test]
    fn verify_solution_accepts_agreeing_fill() {
        let puzzle = crossed_pair();
        let solution = Solution::new(vec!["CAT".into(), "ARM".into()]);
        assert!(puzzle.verify_solution(&solution));
    }

    #[test]
    fn verify_solution_rejects_crossing_disagreement() {
        let puzzle = crossed_pair();
        let solution = Solution::new(vec!["CAT".into(), "TEA".into()]);
        assert!(!puzzle.verify_solution(&solution));
    }

    #[test]
    fn verify_solution_rejects_repeated_word() {
        let variables = vec![
            Variable::new(0, 0, Direction::Across, 3),
            Variable::new(2, 0, Direction::Across, 3),
        ];
        let puzzle = Puzzle::new(variables, vec!["CAT"]).unwrap();
        let solution = Solution::new(vec!["CAT".into(), "CAT".into()]);
        assert!(!puzzle.verify_solution(&solution));
    }
}
