//! Command-line configuration.

use std::{path::PathBuf, time::Duration};

use clap::{ArgAction, Parser};
use color_eyre::eyre::Result;

use crate::{
    pathfinding::{Strategy, ANIMATION_FRAME_DELAY_MS},
    types::Glyphs,
};

/// Options accepted on the command line.
///
/// The glyph options describe the alphabet of the maze file; the path and visited glyphs are
/// only used when printing the solved grid.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// Maze file to solve.
    pub file: PathBuf,
    /// How the search keeps track of cells it still has to return to.
    #[arg(long, value_enum, default_value_t)]
    pub strategy: Strategy,
    /// Print the grid with the path and dead ends after the path.
    #[arg(long)]
    pub render: bool,
    /// Replay the search in an animated terminal view.
    #[arg(long, conflicts_with = "render")]
    pub watch: bool,
    /// Milliseconds between two frames of the replay.
    #[arg(long, value_name = "MS", default_value_t = ANIMATION_FRAME_DELAY_MS)]
    pub frame_delay: u64,
    /// Character marking walls.
    #[arg(long, value_name = "CHAR", default_value_t = 'x')]
    pub wall: char,
    /// Character marking clear cells.
    #[arg(long, value_name = "CHAR", default_value_t = ' ')]
    pub clear: char,
    /// Character marking cells on the path.
    #[arg(long, value_name = "CHAR", default_value_t = '*')]
    pub path: char,
    /// Character marking dead ends.
    #[arg(long, value_name = "CHAR", default_value_t = '+')]
    pub visited: char,
    /// Log more; repeat for more detail. Overridden by `MAZETRAIL_LOG`.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Returns the glyph alphabet described by the options.
    ///
    /// # Errors
    ///
    /// This function returns an error if two cell states share a glyph.
    pub fn glyphs(&self) -> Result<Glyphs> {
        Glyphs::new(self.wall, self.clear, self.path, self.visited)
    }

    /// Returns the delay between two replay frames.
    #[must_use]
    pub const fn animation_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay)
    }
}
