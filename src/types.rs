//! Type definitions for cells, coordinates, directions and the glyph alphabet.

use std::fmt;

use color_eyre::eyre::{ensure, Result};

/// State of a single maze cell.
///
/// Cells only ever move forward through their states: a [`Clear`](Cell::Clear) cell becomes
/// [`Path`](Cell::Path) when the search enters it, and a [`Path`](Cell::Path) cell becomes
/// [`Visited`](Cell::Visited) when the search backtracks out of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Impassable cell.
    Wall,
    /// Passable cell the search has not entered yet.
    Clear,
    /// Cell on the candidate path currently being built.
    Path,
    /// Dead end the search has already given up on.
    Visited,
}

/// Zero-indexed grid coordinate.
///
/// Rows grow downward and columns grow rightward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Row index, counted from the top of the grid.
    pub row: usize,
    /// Column index, counted from the left edge of the grid.
    pub column: usize,
}

impl Position {
    /// Builds a position from a row and a column.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns the neighbouring position one step in `direction`.
    ///
    /// Stepping above the first row or left of the first column yields [`None`]; stepping past
    /// the far edges is left to the maze to reject, since rows may differ in length.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::North => match self.row.checked_sub(1) {
                Some(row) => Some(Self::new(row, self.column)),
                None => None,
            },
            Direction::South => match self.row.checked_add(1) {
                Some(row) => Some(Self::new(row, self.column)),
                None => None,
            },
            Direction::East => match self.column.checked_add(1) {
                Some(column) => Some(Self::new(self.row, column)),
                None => None,
            },
            Direction::West => match self.column.checked_sub(1) {
                Some(column) => Some(Self::new(self.row, column)),
                None => None,
            },
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.row, self.column)
    }
}

/// One of the four moves the search can make.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up, towards row zero.
    North,
    /// Down, towards the last row.
    South,
    /// Right, towards the end of a row.
    East,
    /// Left, towards column zero.
    West,
}

impl Direction {
    /// Order in which the search leaves the start cell.
    pub const ROOT_ORDER: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Returns the directions to try after having just moved in this direction.
    ///
    /// The search always keeps going straight first and then tries the two perpendicular
    /// directions. The reverse is never listed: that cell is where the search came from.
    #[must_use]
    pub const fn continuations(self) -> [Self; 3] {
        match self {
            Self::North => [Self::North, Self::West, Self::East],
            Self::South => [Self::South, Self::West, Self::East],
            Self::East => [Self::East, Self::North, Self::South],
            Self::West => [Self::West, Self::North, Self::South],
        }
    }

    /// Returns the direction pointing the other way.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Returns the letter used when reporting a path.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.symbol())
    }
}

/// Character alphabet used to read and print a maze.
///
/// Only the wall and clear glyphs may appear in a maze file. The path and visited glyphs are
/// reserved for rendering the state the search leaves behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    /// Glyph for [`Cell::Wall`].
    pub wall: char,
    /// Glyph for [`Cell::Clear`].
    pub clear: char,
    /// Glyph for [`Cell::Path`].
    pub path: char,
    /// Glyph for [`Cell::Visited`].
    pub visited: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            wall: 'x',
            clear: ' ',
            path: '*',
            visited: '+',
        }
    }
}

impl Glyphs {
    /// Builds an alphabet, checking that the four glyphs are distinct.
    ///
    /// # Errors
    ///
    /// This function returns an error if any two glyphs are the same character.
    pub fn new(wall: char, clear: char, path: char, visited: char) -> Result<Self> {
        let glyphs = [wall, clear, path, visited];
        for (index, glyph) in glyphs.iter().enumerate() {
            ensure!(
                !glyphs.iter().skip(index + 1).any(|other| other == glyph),
                "glyph {glyph:?} is assigned to more than one cell state"
            );
        }

        Ok(Self {
            wall,
            clear,
            path,
            visited,
        })
    }

    /// Returns the glyph rendering `cell`.
    #[must_use]
    pub const fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Wall => self.wall,
            Cell::Clear => self.clear,
            Cell::Path => self.path,
            Cell::Visited => self.visited,
        }
    }

    /// Maps a character read from a maze file to its cell.
    ///
    /// Returns [`None`] for anything that is neither the wall nor the clear glyph, reserved
    /// glyphs included.
    #[must_use]
    pub fn parse(&self, glyph: char) -> Option<Cell> {
        if glyph == self.wall {
            Some(Cell::Wall)
        } else if glyph == self.clear {
            Some(Cell::Clear)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuations_never_reverse() {
        for direction in Direction::ROOT_ORDER {
            let continuations = direction.continuations();

            assert_eq!(continuations.first(), Some(&direction));
            assert!(!continuations.contains(&direction.reverse()));
        }
    }

    #[test]
    fn test_continuation_table() {
        use Direction::{East, North, South, West};

        assert_eq!(North.continuations(), [North, West, East]);
        assert_eq!(South.continuations(), [South, West, East]);
        assert_eq!(East.continuations(), [East, North, South]);
        assert_eq!(West.continuations(), [West, North, South]);
    }

    #[test]
    fn test_position_step() {
        let position = Position::new(1, 1);

        assert_eq!(position.step(Direction::North), Some(Position::new(0, 1)));
        assert_eq!(position.step(Direction::South), Some(Position::new(2, 1)));
        assert_eq!(position.step(Direction::East), Some(Position::new(1, 2)));
        assert_eq!(position.step(Direction::West), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_position_step_off_the_top_left() {
        let origin = Position::new(0, 0);

        assert_eq!(origin.step(Direction::North), None);
        assert_eq!(origin.step(Direction::West), None);
    }

    #[test]
    fn test_direction_symbols() {
        let letters: String = Direction::ROOT_ORDER
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(letters, "NSEW");
    }

    #[test]
    fn test_glyphs_round_trip_input_cells() {
        let glyphs = Glyphs::default();

        assert_eq!(glyphs.parse('x'), Some(Cell::Wall));
        assert_eq!(glyphs.parse(' '), Some(Cell::Clear));
        assert_eq!(glyphs.glyph(Cell::Path), '*');
        assert_eq!(glyphs.glyph(Cell::Visited), '+');
    }

    #[test]
    fn test_glyphs_reject_reserved_characters() {
        let glyphs = Glyphs::default();

        assert_eq!(glyphs.parse('*'), None);
        assert_eq!(glyphs.parse('+'), None);
        assert_eq!(glyphs.parse('?'), None);
    }

    #[test]
    fn test_glyphs_must_be_distinct() {
        assert!(Glyphs::new('#', '.', 'o', '-').is_ok());
        assert!(Glyphs::new('#', '#', 'o', '-').is_err());
        assert!(Glyphs::new('#', '.', 'o', 'o').is_err());
    }
}
