//! Classic 9x9 Sudoku as a binary CSP: one variable per cell, domains
//! `1..=9` (or the single given clue), and a `!=` constraint for every pair
//! of peers sharing a row, column, or 3x3 box.

use std::collections::HashSet;

use crate::{
    error::{InstanceError, Result},
    solver::{
        constraints::not_equal::NotEqualConstraint,
        instance::{Csp, VariableId},
    },
};

pub const SIDE: usize = 9;
pub const CELLS: usize = SIDE * SIDE;

/// Builds a Sudoku instance from an 81-cell clue string.
///
/// Cells are read row by row; digits `1`-`9` are given clues, `0` or `.`
/// mark blanks, and whitespace is ignored. Anything else is a malformed
/// instance.
pub fn sudoku(clues: &str) -> Result<Csp<i64>> {
    let cells: Vec<char> = clues.chars().filter(|c| !c.is_whitespace()).collect();
    if cells.len() != CELLS {
        return Err(InstanceError::MalformedInput(format!(
            "expected {} cells, got {}",
            CELLS,
            cells.len()
        )));
    }

    let mut builder = Csp::builder();
    for (index, &cell) in cells.iter().enumerate() {
        let var = index as VariableId;
        builder = match cell {
            '1'..='9' => builder.variable(var, [(cell as u8 - b'0') as i64]),
            '0' | '.' => builder.variable(var, 1..=SIDE as i64),
            other => {
                return Err(InstanceError::MalformedInput(format!(
                    "unexpected cell {other:?} at index {index}"
                )))
            }
        };
    }

    let mut seen: HashSet<(VariableId, VariableId)> = HashSet::new();
    for unit in units() {
        for i in 0..unit.len() {
            for j in (i + 1)..unit.len() {
                let (a, b) = (unit[i].min(unit[j]), unit[i].max(unit[j]));
                if seen.insert((a, b)) {
                    builder = builder.constraint(a, b, NotEqualConstraint::new());
                }
            }
        }
    }

    builder.build()
}

/// The 27 units of the grid: 9 rows, 9 columns, 9 boxes, each a list of
/// cell variables that must hold pairwise distinct values.
pub fn units() -> Vec<Vec<VariableId>> {
    let cell = |row: usize, col: usize| (row * SIDE + col) as VariableId;
    let mut units = Vec::with_capacity(27);
    for row in 0..SIDE {
        units.push((0..SIDE).map(|col| cell(row, col)).collect());
    }
    for col in 0..SIDE {
        units.push((0..SIDE).map(|row| cell(row, col)).collect());
    }
    for band in 0..3 {
        for stack in 0..3 {
            units.push(
                (0..SIDE)
                    .map(|k| cell(band * 3 + k / 3, stack * 3 + k % 3))
                    .collect(),
            );
        }
    }
    units
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{
        heuristics::{value::AscendingValueHeuristic, variable::MinimumRemainingValuesHeuristic},
        search::{BacktrackingSearch, Consistency},
        solution::Assignment,
    };

    /// A 17-clue grid, the minimum number of clues a uniquely solvable
    /// Sudoku can have.
    const HARD_17: &str = "\
        000000010400000000020000000000050407\
        008000300001090000300400200050100000\
        000806000";

    const EASY: &str = "\
        003020600900305001001806400008102900\
        700000008006708200002609500800203009\
        005010300";

    fn solve(clues: &str) -> (Csp<i64>, Assignment<i64>) {
        let csp = sudoku(clues).unwrap();
        let solver = BacktrackingSearch::new(
            Consistency::Arc,
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(AscendingValueHeuristic),
        );
        let (outcome, _stats) = solver.solve(&csp);
        let assignment = outcome.solution().expect("puzzle is satisfiable");
        (csp, assignment)
    }

    fn assert_all_units_distinct(assignment: &Assignment<i64>) {
        for unit in units() {
            let mut values: Vec<i64> = unit.iter().map(|v| *assignment.get(v).unwrap()).collect();
            values.sort_unstable();
            assert_eq!(values, (1..=9).collect::<Vec<i64>>(), "unit {unit:?}");
        }
    }

    fn assert_clues_preserved(clues: &str, assignment: &Assignment<i64>) {
        let cells: Vec<char> = clues.chars().filter(|c| !c.is_whitespace()).collect();
        for (index, &cell) in cells.iter().enumerate() {
            if let Some(digit) = cell.to_digit(10).filter(|&d| d != 0) {
                assert_eq!(
                    assignment.get(&(index as VariableId)),
                    Some(&(digit as i64)),
                    "clue at index {index}"
                );
            }
        }
    }

    #[test]
    fn grid_structure_has_27_units_and_20_peers_per_cell() {
        let csp = sudoku(EASY).unwrap();
        assert_eq!(units().len(), 27);
        assert_eq!(csp.variables().len(), CELLS);
        for &var in csp.variables() {
            assert_eq!(csp.neighbors(var).len(), 20);
        }
    }

    #[test]
    fn easy_puzzle_is_solved() {
        let (_csp, assignment) = solve(EASY);
        assert_all_units_distinct(&assignment);
        assert_clues_preserved(EASY, &assignment);
    }

    #[test]
    fn seventeen_clue_puzzle_is_solved() {
        let (_csp, assignment) = solve(HARD_17);
        assert_all_units_distinct(&assignment);
        assert_clues_preserved(HARD_17, &assignment);
    }

    #[test]
    fn short_clue_strings_are_rejected() {
        let err = sudoku("123").unwrap_err();
        assert!(matches!(err, InstanceError::MalformedInput(_)));
    }

    #[test]
    fn stray_characters_are_rejected() {
        let mut clues = String::from(EASY);
        clues.replace_range(0..1, "x");
        let err = sudoku(&clues).unwrap_err();
        assert!(matches!(err, InstanceError::MalformedInput(_)));
    }
}
