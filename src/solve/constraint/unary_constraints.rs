use crate::puzzle::Puzzle;
use crate::solve::markup::PuzzleMarkup;

/// Applies the slot-length constraint to every candidate set
///
/// Afterwards every candidate for a slot has exactly the slot's length. An
/// emptied candidate set is left in place; it is detected during
/// propagation or search.
pub(crate) fn apply_unary_constraints(puzzle: &Puzzle, markup: &mut PuzzleMarkup) {
    debug!("reducing candidate words to slot lengths");
    for var in 0..puzzle.variable_count() {
        let length = puzzle.variable(var).length;
        for word in markup.candidates(var) {
            if puzzle.word_len(word) != length {
                markup.remove(var, word);
            }
        }
    }
}
