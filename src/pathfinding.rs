//! Pathfinding algorithm and animation module.
//!
//! This module contains the depth-first backtracking search, in both a recursive and an
//! explicit-stack form, the animation system that replays a recorded search, and coordinate
//! transformation utilities for the replay canvas.

use std::time::{Duration, Instant};

use clap::ValueEnum;
use color_eyre::eyre::Result;
use tracing::{debug, trace};

use crate::{
    maze::Maze,
    types::{Direction, Position},
};

/// Default animation frame delay in milliseconds.
///
/// This constant controls the timing between animation frames in the replay. A lower value
/// results in faster animation, while a higher value slows it down to make the search easier to
/// follow.
pub const ANIMATION_FRAME_DELAY_MS: u64 = 200;

/// Way the search keeps track of the cells it still has to return to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Use the call stack, one call per cell on the current path.
    #[default]
    Recursive,
    /// Use a heap-allocated stack of frames, for grids too large for the call stack.
    Iterative,
}

/// Single step taken by the search.
///
/// The recorded steps are replayed by the [`AnimationManager`] to show the exploration and
/// backtracking the search went through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStep {
    /// The search entered the cell and marked it as part of the path.
    Enter(Position),
    /// The search backtracked out of the cell and marked it as a dead end.
    Leave(Position),
}

/// Outcome of a search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Search {
    /// Whether the exit was reached.
    pub solved: bool,
    /// Every step the search took, in order.
    pub steps: Vec<SearchStep>,
}

/// Depth-first search over a maze it holds exclusively.
///
/// The finder tracks the current position and the moves that lead to it. Every move in a
/// direction tries to keep going straight and then turns, never doubling back, and marks the
/// cells it gives up on so they are never entered again.
pub(crate) struct PathFinder<'maze> {
    /// Maze being searched; its cells are marked as the search proceeds.
    maze: &'maze mut Maze,
    /// Cell the search is currently standing on.
    position: Position,
    /// Moves from the start to [`position`](PathFinder::position).
    path: Vec<Direction>,
    /// Every step taken so far.
    steps: Vec<SearchStep>,
}

/// Pending work for one cell of the iterative search.
#[derive(Clone, Copy, Debug)]
struct Frame {
    /// Direction taken to reach the cell, [`None`] for the start.
    entered: Option<Direction>,
    /// Cell the search came from.
    previous: Position,
    /// Number of directions already tried from the cell.
    tried: usize,
}

impl Frame {
    /// Returns the next direction to try from this cell, if any is left.
    fn next_direction(&mut self) -> Option<Direction> {
        let direction = match self.entered {
            Some(entered) => entered.continuations().get(self.tried).copied(),
            None => Direction::ROOT_ORDER.get(self.tried).copied(),
        };
        self.tried += 1;
        direction
    }
}

impl<'maze> PathFinder<'maze> {
    /// Prepares a search of `maze` starting from its start cell.
    pub(crate) fn new(maze: &'maze mut Maze) -> Self {
        let position = maze.start();
        Self {
            maze,
            position,
            path: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Runs the search and returns its outcome along with the moves it found.
    ///
    /// The returned moves are empty unless the search succeeded.
    pub(crate) fn run(mut self, strategy: Strategy) -> (Search, Vec<Direction>) {
        debug!(
            ?strategy,
            start = %self.maze.start(),
            exit = %self.maze.exit(),
            "searching maze"
        );

        let solved = self.solve(strategy);

        debug!(
            solved,
            moves = self.path.len(),
            steps = self.steps.len(),
            "search finished"
        );

        (
            Search {
                solved,
                steps: self.steps,
            },
            self.path,
        )
    }

    /// Searches from the start cell.
    ///
    /// A start that already is the exit succeeds without touching the grid. A start that is not
    /// clear fails without touching it. When every direction out of the start fails, the start is
    /// marked as a dead end like every other cell the search backed out of.
    fn solve(&mut self, strategy: Strategy) -> bool {
        let start = self.maze.start();
        self.position = start;

        if self.maze.at_exit(start) {
            return true;
        }

        if !self.maze.is_inside(start) || !self.maze.is_clear(start) {
            return false;
        }

        self.enter(start, None);

        let solved = match strategy {
            Strategy::Recursive => Direction::ROOT_ORDER
                .into_iter()
                .any(|direction| self.advance(direction)),
            Strategy::Iterative => self.advance_iteratively(),
        };

        if !solved {
            self.retreat(start);
        }

        solved
    }

    /// Moves one cell in `direction` and keeps searching from there.
    ///
    /// Returns false without changing anything if the neighbour is off the grid or not clear.
    fn advance(&mut self, direction: Direction) -> bool {
        let previous = self.position;
        let Some(next) = self.open_neighbour(direction) else {
            return false;
        };

        self.enter(next, Some(direction));
        if self.maze.at_exit(next) {
            return true;
        }

        if direction
            .continuations()
            .into_iter()
            .any(|continuation| self.advance(continuation))
        {
            return true;
        }

        self.retreat(previous);
        false
    }

    /// Same search as [`advance`](PathFinder::advance), driven by an explicit stack.
    ///
    /// Cells are entered, marked and left in exactly the order the recursive form would use.
    fn advance_iteratively(&mut self) -> bool {
        let mut stack = vec![Frame {
            entered: None,
            previous: self.position,
            tried: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            if let Some(direction) = frame.next_direction() {
                let previous = self.position;
                if let Some(next) = self.open_neighbour(direction) {
                    self.enter(next, Some(direction));
                    if self.maze.at_exit(next) {
                        return true;
                    }
                    stack.push(Frame {
                        entered: Some(direction),
                        previous,
                        tried: 0,
                    });
                }
            } else if frame.entered.is_some() {
                let previous = frame.previous;
                let _ = stack.pop();
                self.retreat(previous);
            } else {
                return false;
            }
        }

        false
    }

    /// Returns the neighbour in `direction` if it is on the grid and still clear.
    fn open_neighbour(&self, direction: Direction) -> Option<Position> {
        self.position
            .step(direction)
            .filter(|next| self.maze.is_inside(*next) && self.maze.is_clear(*next))
    }

    /// Steps onto `position` and marks it as part of the path.
    fn enter(&mut self, position: Position, direction: Option<Direction>) {
        self.position = position;
        self.maze.mark_as_path(position);
        self.steps.push(SearchStep::Enter(position));
        if let Some(direction) = direction {
            self.path.push(direction);
        }
    }

    /// Gives up on the current cell and steps back to `previous`.
    fn retreat(&mut self, previous: Position) {
        trace!(position = %self.position, "backtracking");
        self.maze.mark_as_visited(self.position);
        self.steps.push(SearchStep::Leave(self.position));
        let _ = self.path.pop();
        self.position = previous;
    }
}

/// Animation state manager for search replays.
///
/// This structure manages the animation state including timing, current step tracking, and the
/// cells being displayed while a recorded search is replayed.
pub struct AnimationManager {
    /// Steps recorded during the search.
    ///
    /// This field stores the sequence of steps the search took, forward moves and backtracking
    /// alike, in the order they happened.
    pub steps: Vec<SearchStep>,
    /// Current step in the animation sequence.
    ///
    /// This field tracks the current position in the [`steps`](AnimationManager::steps) vector to
    /// determine which steps have been rendered and which are still pending.
    pub current_index: usize,
    /// Timestamp of the last animation frame update.
    pub last_update_time: Instant,
    /// Time to wait between two animation frames.
    pub frame_delay: Duration,
    /// Path currently displayed, from the start to the cell the replay has reached.
    pub current_path: Vec<Position>,
    /// Cells the replay has already backtracked out of.
    pub abandoned: Vec<Position>,
}

impl Default for AnimationManager {
    fn default() -> Self {
        Self::new(Vec::new(), Duration::from_millis(ANIMATION_FRAME_DELAY_MS))
    }
}

impl AnimationManager {
    /// Creates an animation manager that replays `steps`, one every `frame_delay`.
    #[must_use]
    pub fn new(steps: Vec<SearchStep>, frame_delay: Duration) -> Self {
        Self {
            steps,
            current_index: 0,
            last_update_time: Instant::now(),
            frame_delay,
            current_path: Vec::new(),
            abandoned: Vec::new(),
        }
    }

    /// Resets the animation state to the beginning.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.current_path.clear();
        self.abandoned.clear();
        self.last_update_time = Instant::now();
    }

    /// Returns true once every recorded step has been replayed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current_index >= self.steps.len()
    }

    /// Applies the next recorded step, returning false if there was none left.
    pub fn advance(&mut self) -> bool {
        let Some(step) = self.steps.get(self.current_index) else {
            return false;
        };

        match *step {
            SearchStep::Enter(position) => self.current_path.push(position),
            SearchStep::Leave(position) => {
                // Backtracking always leaves the end of the path, but search from the back in
                // case a replay was started midway.
                if let Some(index) = self
                    .current_path
                    .iter()
                    .rposition(|coord| *coord == position)
                {
                    let _ = self.current_path.remove(index);
                }
                self.abandoned.push(position);
            }
        }

        self.current_index += 1;
        true
    }

    /// Updates the animation state based on timing and current progress.
    ///
    /// This method applies the next step once the frame delay has passed. The animation holds on
    /// its final frame once every step has been replayed.
    pub fn update(&mut self) {
        if self.last_update_time.elapsed() >= self.frame_delay {
            self.last_update_time = Instant::now();
            let _ = self.advance();
        }
    }
}

/// Transforms maze coordinates to screen coordinates for canvas rendering.
///
/// This function converts maze positions to canvas coordinates centred on the origin using the
/// formulas y = (rows - 1) / 2 - row and x = column - (columns - 1) / 2, so that row zero ends up
/// at the top of the canvas.
///
/// # Errors
///
/// This function may return errors if a dimension or coordinate does not fit in a `u16`.
pub(crate) fn transform_maze_to_screen_coords(
    maze_coords: &[Position],
    rows: usize,
    columns: usize,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(rows)?);
    let cols_n = f64::from(u16::try_from(columns)?);

    maze_coords
        .iter()
        .map(|position| {
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(position.row)?);
            let screen_x = f64::from(u16::try_from(position.column)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}
