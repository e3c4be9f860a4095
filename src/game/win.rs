use super::board::{Grid, Mark, CONNECT, HEIGHT, WIDTH};

/// (column step, row step) for horizontal, vertical, diagonal-up and
/// diagonal-down lines.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// True iff `mark` owns four consecutive cells along any line.
///
/// Scans every cell as a potential run origin in every direction; runs that
/// would leave the board are skipped. `Mark::Empty` never wins.
pub fn is_win(grid: &Grid, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            for &(dc, dr) in &DIRECTIONS {
                if run_matches(grid, mark, column, row, dc, dr) {
                    return true;
                }
            }
        }
    }

    false
}

fn run_matches(grid: &Grid, mark: Mark, column: usize, row: usize, dc: isize, dr: isize) -> bool {
    let span = CONNECT as isize - 1;
    let end_column = column as isize + dc * span;
    let end_row = row as isize + dr * span;
    if !(0..WIDTH as isize).contains(&end_column) || !(0..HEIGHT as isize).contains(&end_row) {
        return false;
    }

    (0..CONNECT as isize).all(|step| {
        let c = (column as isize + dc * step) as usize;
        let r = (row as isize + dr * step) as usize;
        grid.get(c, r) == mark
    })
}
