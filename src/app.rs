//! Core application state and logic for the search replay viewer.

use std::{io, time::Duration};

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{
    events,
    maze::Maze,
    pathfinding::{AnimationManager, Search},
    ui,
};

/// Application state container for the replay viewer.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the replay and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit but it starts off `false`.
    pub(crate) exit: bool,
    /// Whether the replay is currently frozen.
    pub(crate) paused: bool,
    /// Maze that was searched, used to draw its walls and exit.
    pub(crate) maze: Maze,
    /// Whether the search being replayed reached the exit.
    pub(crate) solved: bool,
    /// Animation manager for the search replay.
    ///
    /// This field manages the animation state including timing, current step tracking, and the
    /// cells being displayed during the replay.
    pub(crate) animation_manager: AnimationManager,
}

impl App {
    /// Creates a viewer replaying `search` over `maze`, one step every `frame_delay`.
    #[must_use]
    pub fn new(maze: Maze, search: Search, frame_delay: Duration) -> Self {
        Self {
            exit: false,
            paused: false,
            maze,
            solved: search.solved,
            animation_manager: AnimationManager::new(search.steps, frame_delay),
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function draws the current frame, handles user input and advances the replay. The
    /// loop continues until the exit condition is `true`, after which the function returns to the
    /// call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(io::Error::other))?;
            events::handle_events(self)?;

            if !self.paused {
                self.animation_manager.update();
            }
        }

        Ok(())
    }

    /// Describes where the replay stands.
    pub(crate) fn status(&self) -> String {
        let animation = &self.animation_manager;

        if animation.is_finished() {
            if self.solved {
                format!("solved: {}", self.maze.path_string())
            } else {
                format!(
                    "no path from {} to {}",
                    self.maze.start(),
                    self.maze.exit()
                )
            }
        } else {
            format!(
                "exploring: step {} of {}",
                animation.current_index,
                animation.steps.len()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathfinding::Strategy;

    fn create_test_app(input: &str) -> App {
        let mut maze: Maze = input.parse().expect("test maze should parse");
        let search = maze.explore(Strategy::Recursive);
        App::new(maze, search, Duration::ZERO)
    }

    #[test]
    fn test_new_app() {
        let app = create_test_app("3 3\n2 2\n0 0\n xx\n xx\n   \n");

        assert!(!app.exit);
        assert!(!app.paused);
        assert!(app.solved);
        assert_eq!(app.animation_manager.steps.len(), 5);
        assert_eq!(app.animation_manager.current_index, 0);
    }

    #[test]
    fn test_status_while_exploring() {
        let app = create_test_app("3 3\n2 2\n0 0\n xx\n xx\n   \n");

        assert_eq!(app.status(), "exploring: step 0 of 5");
    }

    #[test]
    fn test_status_when_solved() {
        let mut app = create_test_app("3 3\n2 2\n0 0\n xx\n xx\n   \n");
        while app.animation_manager.advance() {}

        assert_eq!(app.status(), "solved: SSEE");
    }

    #[test]
    fn test_status_when_unsolved() {
        let mut app = create_test_app("3 1\n0 2\n0 0\n x \n");
        while app.animation_manager.advance() {}

        assert!(!app.solved);
        assert_eq!(app.status(), "no path from (0, 0) to (0, 2)");
    }
}
