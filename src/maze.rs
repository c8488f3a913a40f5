//! Maze model module.
//!
//! This module contains the [`Maze`] struct, which owns the grid of cells together with the start
//! and exit coordinates and the path found by the search. It exposes the cell queries and
//! mutations the path finder relies on and a plain-text rendering of the grid.

use std::{fmt, path::Path, str::FromStr};

use color_eyre::eyre::{Report, Result};
use tracing::error;

use crate::{
    file_loader,
    pathfinding::{PathFinder, Search, Strategy},
    types::{Cell, Direction, Glyphs, Position},
};

/// Rectangular (possibly ragged) grid maze with a start, an exit and the path between them.
///
/// The grid is stored row by row. Each row keeps exactly the cells its source line had, so a
/// row whose trailing clear cells were stripped by an editor is simply shorter than the others.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Width announced by the maze header.
    width: usize,
    /// Height announced by the maze header.
    height: usize,
    /// Cells, one vector per row.
    grid: Vec<Vec<Cell>>,
    /// Cell the search starts from.
    start: Position,
    /// Cell the search is trying to reach.
    exit: Position,
    /// Moves from the start to the exit, once a search has run.
    path: Vec<Direction>,
    /// Alphabet used to parse and render the grid.
    glyphs: Glyphs,
}

impl Default for Maze {
    fn default() -> Self {
        Self::empty(Glyphs::default())
    }
}

impl Maze {
    /// Creates an empty maze with zero width and height.
    #[must_use]
    pub const fn empty(glyphs: Glyphs) -> Self {
        Self {
            width: 0,
            height: 0,
            grid: Vec::new(),
            start: Position::new(0, 0),
            exit: Position::new(0, 0),
            path: Vec::new(),
            glyphs,
        }
    }

    /// Assembles a maze from already-parsed parts.
    pub(crate) const fn from_parts(
        (width, height): (usize, usize),
        grid: Vec<Vec<Cell>>,
        start: Position,
        exit: Position,
        glyphs: Glyphs,
    ) -> Self {
        Self {
            width,
            height,
            grid,
            start,
            exit,
            path: Vec::new(),
            glyphs,
        }
    }

    /// Parses a maze from the text format, using `glyphs` to read the grid.
    ///
    /// # Errors
    ///
    /// This function may return errors if the header is incomplete or not numeric, if fewer grid
    /// rows than announced follow it, or if a row contains a character other than the wall and
    /// clear glyphs.
    pub fn parse(input: &str, glyphs: Glyphs) -> Result<Self> {
        file_loader::parse_maze(input, glyphs)
    }

    /// Replaces this maze with the one stored in the file at `path`.
    ///
    /// The glyph alphabet of the current maze is used to read the file. On failure the maze is
    /// left empty, with zero width and height, and the failure is logged before being returned.
    ///
    /// # Errors
    ///
    /// This function may return errors if the file cannot be read or does not hold a valid maze.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        match file_loader::load_file(path, self.glyphs) {
            Ok(maze) => {
                *self = maze;
                Ok(())
            }
            Err(err) => {
                error!(path = %path.display(), "unable to load maze: {err:#}");
                *self = Self::empty(self.glyphs);
                Err(err)
            }
        }
    }

    /// Width announced by the maze header.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height announced by the maze header.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Cell the search starts from.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Cell the search is trying to reach.
    #[must_use]
    pub const fn exit(&self) -> Position {
        self.exit
    }

    /// Alphabet used to parse and render this maze.
    #[must_use]
    pub const fn glyphs(&self) -> Glyphs {
        self.glyphs
    }

    /// Rows of the grid, each as long as its source line.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.grid
    }

    /// Moves found by the last search, empty if none succeeded.
    #[must_use]
    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    /// Moves found by the last search as a string of direction letters.
    #[must_use]
    pub fn path_string(&self) -> String {
        self.path.iter().map(|direction| direction.symbol()).collect()
    }

    /// Returns true iff `position` is the exit.
    #[must_use]
    pub fn at_exit(&self, position: Position) -> bool {
        position == self.exit
    }

    /// Returns true iff `position` lies on the grid.
    ///
    /// The column is checked against the length of that particular row.
    #[must_use]
    pub fn is_inside(&self, position: Position) -> bool {
        self.grid
            .get(position.row)
            .is_some_and(|row| position.column < row.len())
    }

    /// Returns the cell at `position`, or [`None`] if it lies outside the grid.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.grid
            .get(position.row)
            .and_then(|row| row.get(position.column))
            .copied()
    }

    /// Returns true iff the cell at `position` has not been entered and is not a wall.
    ///
    /// # Panics
    ///
    /// This function panics if `position` lies outside the grid.
    #[must_use]
    pub fn is_clear(&self, position: Position) -> bool {
        match self.cell(position) {
            Some(cell) => cell == Cell::Clear,
            None => panic!("cell {position} lies outside the maze"),
        }
    }

    /// Marks the cell at `position` as part of the path being built.
    ///
    /// # Panics
    ///
    /// This function panics if `position` lies outside the grid.
    pub fn mark_as_path(&mut self, position: Position) {
        *self.cell_mut(position) = Cell::Path;
    }

    /// Marks the cell at `position` as a dead end.
    ///
    /// # Panics
    ///
    /// This function panics if `position` lies outside the grid.
    pub fn mark_as_visited(&mut self, position: Position) {
        *self.cell_mut(position) = Cell::Visited;
    }

    /// Searches for a path with the recursive strategy and keeps the result.
    ///
    /// Solving consumes the clear cells it walks through, so a maze should be reloaded before
    /// being solved again.
    pub fn solve(&mut self) -> bool {
        self.explore(Strategy::Recursive).solved
    }

    /// Searches for a path with `strategy`, keeps the path and returns the full outcome.
    pub fn explore(&mut self, strategy: Strategy) -> Search {
        let (search, path) = PathFinder::new(self).run(strategy);
        self.path = path;
        search
    }

    /// Returns a mutable reference to the cell at `position`.
    fn cell_mut(&mut self, position: Position) -> &mut Cell {
        match self
            .grid
            .get_mut(position.row)
            .and_then(|row| row.get_mut(position.column))
        {
            Some(cell) => cell,
            None => panic!("cell {position} lies outside the maze"),
        }
    }
}

impl FromStr for Maze {
    type Err = Report;

    fn from_str(input: &str) -> Result<Self> {
        Self::parse(input, Glyphs::default())
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for cell in row {
                write!(formatter, "{}", self.glyphs.glyph(*cell))?;
            }
            writeln!(formatter)?;
        }
        writeln!(formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three by three corridor running down the left edge and along the bottom.
    const CORRIDOR: &str = "3 3\n2 2\n0 0\n xx\n xx\n   \n";

    /// Maze whose northern branch is a dead end the search has to back out of.
    const DEAD_END: &str = "5 3\n0 4\n2 0\n xxx \n x   \n   x \n";

    /// Maze whose start is sealed off from the exit.
    const SEALED: &str = "4 3\n2 3\n0 0\n  x \n xx \nxx  \n";

    fn maze(input: &str) -> Maze {
        input.parse().expect("test maze should parse")
    }

    /// Walks `path` from the start of `original`, checking every cell on the way.
    fn replay(original: &Maze, path: &[Direction]) -> Position {
        let mut position = original.start();
        for direction in path {
            position = position
                .step(*direction)
                .expect("replayed move should stay on the grid");
            assert_eq!(
                original.cell(position),
                Some(Cell::Clear),
                "replayed cell {position} should have been clear before the search"
            );
        }
        position
    }

    #[test]
    fn test_corridor_path() {
        let mut maze = maze(CORRIDOR);

        assert!(maze.solve());
        assert_eq!(maze.path_string(), "SSEE");
    }

    #[test]
    fn test_backtracks_out_of_dead_end() {
        let mut maze = maze(DEAD_END);

        assert!(maze.solve());
        assert_eq!(maze.path_string(), "EENEEN");
        assert_eq!(maze.to_string(), "+xxx*\n+x***\n***x \n\n");
    }

    #[test]
    fn test_path_replays_to_exit() {
        for input in [CORRIDOR, DEAD_END, include_str!("../mazes/labyrinth.txt")] {
            let original = maze(input);
            let mut solved = original.clone();

            assert!(solved.solve(), "maze should be solvable");
            assert_eq!(replay(&original, solved.path()), original.exit());
        }
    }

    #[test]
    fn test_start_at_exit() {
        let mut maze = maze("3 1\n0 1\n0 1\nx x\n");

        assert!(maze.solve());
        assert!(maze.path().is_empty());
        assert_eq!(maze.to_string(), "x x\n\n");
    }

    #[test]
    fn test_walled_start_fails() {
        let mut maze = maze("3 1\n0 2\n0 0\nx  \n");

        assert!(!maze.solve());
        assert!(maze.path().is_empty());
        assert_eq!(maze.to_string(), "x  \n\n");
    }

    #[test]
    fn test_unsolvable_leaves_reachable_cells_visited() {
        let mut maze = maze(SEALED);

        assert!(!maze.solve());
        assert!(maze.path().is_empty());
        assert_eq!(maze.to_string(), "++x \n+xx \nxx  \n\n");
        assert!(maze
            .rows()
            .iter()
            .flatten()
            .all(|cell| *cell != Cell::Path));
    }

    #[test]
    fn test_solving_twice_does_not_find_the_path_again() {
        let mut maze = maze(CORRIDOR);

        assert!(maze.solve());
        assert!(!maze.solve());
    }

    #[test]
    fn test_is_inside_respects_ragged_rows() {
        let maze = maze("3 2\n1 0\n0 0\n  x\n \n");

        assert!(maze.is_inside(Position::new(0, 2)));
        assert!(maze.is_inside(Position::new(1, 0)));
        assert!(!maze.is_inside(Position::new(1, 1)));
        assert!(!maze.is_inside(Position::new(2, 0)));
    }

    #[test]
    fn test_cell_marking() {
        let mut maze = maze(CORRIDOR);
        let position = Position::new(1, 0);

        assert!(maze.is_clear(position));
        maze.mark_as_path(position);
        assert_eq!(maze.cell(position), Some(Cell::Path));
        assert!(!maze.is_clear(position));
        maze.mark_as_visited(position);
        assert_eq!(maze.cell(position), Some(Cell::Visited));
    }

    #[test]
    #[should_panic(expected = "lies outside the maze")]
    fn test_is_clear_outside_panics() {
        let maze = maze(CORRIDOR);
        let _ = maze.is_clear(Position::new(3, 0));
    }

    #[test]
    #[should_panic(expected = "lies outside the maze")]
    fn test_mark_outside_panics() {
        let mut maze = maze(CORRIDOR);
        maze.mark_as_visited(Position::new(0, 3));
    }

    #[test]
    fn test_at_exit() {
        let maze = maze(CORRIDOR);

        assert!(maze.at_exit(Position::new(2, 2)));
        assert!(!maze.at_exit(Position::new(0, 0)));
        assert!(!maze.at_exit(Position::new(9, 9)));
    }

    #[test]
    fn test_load_nonexistent_file_empties_maze() {
        let mut maze = maze(CORRIDOR);

        let result = maze.load(Path::new("this-maze-does-not-exist.txt"));

        assert!(result.is_err());
        assert_eq!(maze.width(), 0);
        assert_eq!(maze.height(), 0);
        assert!(maze.rows().is_empty());
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("mazetrail-load-{}.txt", std::process::id()));
        std::fs::write(&path, CORRIDOR).expect("should write temporary maze");

        let mut maze = Maze::default();
        let result = maze.load(&path);
        let _ = std::fs::remove_file(&path);

        assert!(result.is_ok());
        assert_eq!(maze.width(), 3);
        assert_eq!(maze.height(), 3);
        assert_eq!(maze.start(), Position::new(0, 0));
        assert_eq!(maze.exit(), Position::new(2, 2));
    }

    #[test]
    fn test_display_uses_custom_glyphs() {
        let glyphs = Glyphs::new('#', '.', 'o', '-').expect("glyphs should be distinct");
        let mut maze =
            Maze::parse("3 3\n2 2\n0 0\n.##\n.##\n...\n", glyphs).expect("maze should parse");

        assert!(maze.solve());
        assert_eq!(maze.to_string(), "o##\no##\nooo\n\n");
    }

    #[test]
    fn test_default_is_empty() {
        let maze = Maze::default();

        assert_eq!(maze.width(), 0);
        assert_eq!(maze.height(), 0);
        assert_eq!(maze.to_string(), "\n");
    }
}
