use crate::puzzle::{Puzzle, VarId};
use crate::solve::markup::PuzzleMarkup;
use crate::LinkedHashSet;

/// An ordered pair of crossing slots, read "make `0` consistent with `1`"
type Arc = (VarId, VarId);

pub(crate) enum PropagateResult {
    /// Every remaining candidate has a compatible partner across every
    /// crossing
    Consistent,
    /// Propagation removed the last candidate of this slot
    EmptyDomain(VarId),
}

/// Enforces crossing consistency over all slot pairs (AC-3)
///
/// Requires a length-filtered markup (see `apply_unary_constraints`);
/// crossing offsets are only valid on words of the slot's length.
pub(crate) fn propagate_constraints(
    puzzle: &Puzzle,
    markup: &mut PuzzleMarkup,
) -> PropagateResult {
    let mut worklist: LinkedHashSet<Arc> = LinkedHashSet::default();
    for x in 0..puzzle.variable_count() {
        for &y in puzzle.neighbors(x) {
            worklist.insert((x, y));
        }
    }
    while let Some((x, y)) = worklist.pop_front() {
        if !revise(puzzle, markup, x, y) {
            continue;
        }
        if markup.domain_len(x) == 0 {
            debug!("no candidates left for {}", puzzle.variable(x));
            return PropagateResult::EmptyDomain(x);
        }
        for &z in puzzle.neighbors(x) {
            if z != y {
                worklist.insert((z, x));
            }
        }
    }
    PropagateResult::Consistent
}

/// Removes from `x`'s candidates every word with no compatible partner
/// among `y`'s candidates. Returns whether anything was removed.
fn revise(puzzle: &Puzzle, markup: &mut PuzzleMarkup, x: VarId, y: VarId) -> bool {
    let (i, j) = match puzzle.overlap(x, y) {
        Some(overlap) => overlap,
        None => return false,
    };
    let mut removed = 0;
    for wx in markup.candidates(x) {
        let letter = puzzle.word_letter(wx, i);
        let supported = markup
            .domain(y)
            .iter()
            .any(|&wy| puzzle.word_letter(wy, j) == letter);
        if !supported {
            markup.remove(x, wx);
            removed += 1;
        }
    }
    if removed > 0 {
        debug!(
            "removed {} candidates from {} against {}",
            removed,
            puzzle.variable(x),
            puzzle.variable(y)
        );
    }
    removed > 0
}

#[cfg(test)]
mod test {
    use super::{propagate_constraints, revise, PropagateResult};
    use crate::puzzle::{Direction, Puzzle, Variable};
    use crate::solve::constraint::apply_unary_constraints;
    use crate::solve::markup::PuzzleMarkup;

    fn filtered_markup(puzzle: &Puzzle) -> PuzzleMarkup {
        let mut markup = PuzzleMarkup::new(puzzle);
        apply_unary_constraints(puzzle, &mut markup);
        markup
    }

    fn crossed_pair(words: Vec<&str>) -> Puzzle {
        // slot 0 runs across, slot 1 down, crossing at 0's letter 1 and
        // 1's letter 0
        let variables = vec![
            Variable::new(0, 0, Direction::Across, 3),
            Variable::new(0, 1, Direction::Down, 3),
        ];
        Puzzle::new(variables, words).unwrap()
    }

    #[test]
    fn revise_removes_unsupported_words_only_from_x() {
        let puzzle = crossed_pair(vec!["CAT", "ARM", "TEA"]);
        let mut markup = filtered_markup(&puzzle);
        let before_y = markup.candidates(1);

        // "ARM"[1] = 'R' and "TEA"[1] = 'E' support no word start
        let revised = revise(&puzzle, &mut markup, 0, 1);
        assert!(revised);
        assert_eq!(markup.candidates(0), [0]); // CAT: 'A' matches ARM's start
        assert_eq!(markup.candidates(1), before_y);
    }

    #[test]
    fn revise_without_crossing_is_a_no_op() {
        let variables = vec![
            Variable::new(0, 0, Direction::Across, 3),
            Variable::new(2, 0, Direction::Across, 3),
        ];
        let puzzle = Puzzle::new(variables, vec!["CAT", "ARM", "TEA"]).unwrap();
        let mut markup = filtered_markup(&puzzle);
        assert!(!revise(&puzzle, &mut markup, 0, 1));
        assert_eq!(markup.candidates(0), [0, 1, 2]);
    }

    #[test]
    fn propagation_leaves_every_candidate_supported() {
        let puzzle = crossed_pair(vec!["CAT", "ARM", "TEA", "TAR", "ART"]);
        let mut markup = filtered_markup(&puzzle);
        match propagate_constraints(&puzzle, &mut markup) {
            PropagateResult::Consistent => (),
            PropagateResult::EmptyDomain(_) => panic!("unexpected empty domain"),
        }
        for x in 0..puzzle.variable_count() {
            for &y in puzzle.neighbors(x) {
                let (i, j) = puzzle.overlap(x, y).unwrap();
                for &wx in markup.domain(x) {
                    assert!(markup
                        .domain(y)
                        .iter()
                        .any(|&wy| puzzle.word_letter(wy, j) == puzzle.word_letter(wx, i)));
                }
            }
        }
    }

    #[test]
    fn propagation_is_idempotent() {
        let puzzle = crossed_pair(vec!["CAT", "ARM", "TEA", "TAR", "ART"]);
        let mut markup = filtered_markup(&puzzle);
        assert!(matches!(
            propagate_constraints(&puzzle, &mut markup),
            PropagateResult::Consistent
        ));
        let first: Vec<_> = (0..puzzle.variable_count())
            .map(|var| markup.candidates(var))
            .collect();
        assert!(matches!(
            propagate_constraints(&puzzle, &mut markup),
            PropagateResult::Consistent
        ));
        let second: Vec<_> = (0..puzzle.variable_count())
            .map(|var| markup.candidates(var))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn propagation_reports_an_emptied_slot() {
        // nothing in the vocabulary starts with 'T', so slot 1 empties
        // once slot 0 is reduced, and slot 0 empties in turn
        let puzzle = crossed_pair(vec!["CAT", "CUT", "COT"]);
        let mut markup = filtered_markup(&puzzle);
        match propagate_constraints(&puzzle, &mut markup) {
            PropagateResult::EmptyDomain(var) => assert!(var < 2),
            PropagateResult::Consistent => panic!("expected an empty domain"),
        }
    }
}
