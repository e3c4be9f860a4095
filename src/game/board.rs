use std::fmt;

use crate::error::GameError;

pub const WIDTH: usize = 7;
pub const HEIGHT: usize = 6;

/// Length of a winning line.
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    Red,
    Black,
}

impl Mark {
    fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Red => 'R',
            Mark::Black => 'B',
        }
    }
}

/// Fixed-size board. Cells are stored column-major, `row + column * HEIGHT`,
/// with row 0 at the bottom of each column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Mark; WIDTH * HEIGHT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Grid {
            cells: [Mark::Empty; WIDTH * HEIGHT],
        }
    }

    fn index(column: usize, row: usize) -> usize {
        row + column * HEIGHT
    }

    /// Bounds-checked read. Row 0 is the bottom.
    pub fn cell_at(&self, column: usize, row: usize) -> Result<Mark, GameError> {
        if column >= WIDTH || row >= HEIGHT {
            return Err(GameError::OutOfRange { column, row });
        }
        Ok(self.cells[Self::index(column, row)])
    }

    /// Unchecked read for callers that already iterate within bounds.
    pub(crate) fn get(&self, column: usize, row: usize) -> Mark {
        self.cells[Self::index(column, row)]
    }

    /// Lowest unoccupied row in `column`, or `None` if the column is full
    /// or does not exist.
    pub fn next_empty_row(&self, column: usize) -> Option<usize> {
        if column >= WIDTH {
            return None;
        }
        (0..HEIGHT).find(|&row| self.get(column, row) == Mark::Empty)
    }

    pub fn can_play(&self, column: usize) -> bool {
        self.next_empty_row(column).is_some()
    }

    /// Drop `mark` into `column`, returning the row where it landed.
    /// The grid is left untouched on error.
    pub fn place(&mut self, mark: Mark, column: usize) -> Result<usize, GameError> {
        if mark == Mark::Empty {
            return Err(GameError::EmptyMark);
        }
        if column >= WIDTH {
            return Err(GameError::OutOfRange { column, row: 0 });
        }
        let row = self
            .next_empty_row(column)
            .ok_or(GameError::ColumnFull { column })?;
        self.cells[Self::index(column, row)] = mark;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.can_play(column))
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            for column in 0..WIDTH {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(column, row).symbol())?;
            }
            writeln!(f)?;
        }
        for column in 0..WIDTH {
            if column > 0 {
                write!(f, " ")?;
            }
            write!(f, "{column}")?;
        }
        Ok(())
    }
}
