//! Depth-first backtracking maze solver.
//!
//! A [`Maze`] is read from a small text format, searched from its start cell towards its exit
//! by trying to keep going straight and turning only when blocked, and reported as a string of
//! direction letters. Every step of the search is recorded so it can be replayed in the terminal
//! with [`App`].

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod config;
mod events;
mod file_loader;
mod logging;
mod maze;
mod pathfinding;
mod types;
mod ui;

pub use app::App;
pub use config::Config;
pub use logging::{install_subscriber, LOG_ENV};
pub use maze::Maze;
pub use pathfinding::{AnimationManager, Search, SearchStep, Strategy, ANIMATION_FRAME_DELAY_MS};
pub use types::{Cell, Direction, Glyphs, Position};
