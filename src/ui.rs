//! User interface rendering for the search replay.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear, Paragraph,
    },
    Frame,
};

use crate::{
    pathfinding,
    types::{Cell, Position},
    App,
};

/// Key bindings shown in the footer.
const KEY_HELP: &str = "(q) quit / (r) replay / (space) pause";

/// Renders the maze and the current state of the replay.
///
/// Walls are drawn in green, cells the replay has backtracked out of in dark grey, the path the
/// replay is currently on in red and the exit in yellow. A footer shows the replay status and
/// the key bindings.
///
/// # Errors
///
/// This function may return errors from layout lookups or if the maze is too large to map onto
/// the canvas.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    frame.render_widget(Clear, frame.area());

    let maze_rows = app.maze.rows().len();
    let maze_columns = app.maze.rows().iter().map(Vec::len).max().unwrap_or(0);

    // Create overall layout: maze area + footer at bottom
    let overall_layout = Layout::vertical([Constraint::Min(1), Constraint::Length(3)])
        .split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let footer_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get footer area from layout")?;

    let maze_area = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_rows)?),
        Constraint::Min(1),
    ])
    .split(maze_content_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze area from layout")?;

    let space = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_columns)?),
        Constraint::Min(1),
    ])
    .split(maze_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")?;

    // Pre-compute screen coordinates to handle errors before the paint closure
    let walls = app
        .maze
        .rows()
        .iter()
        .enumerate()
        .flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| **cell == Cell::Wall)
                .map(move |(column, _)| Position::new(row, column))
        })
        .collect::<Vec<_>>();
    let animation = &app.animation_manager;
    let to_screen = |coords: &[Position]| {
        pathfinding::transform_maze_to_screen_coords(coords, maze_rows, maze_columns)
    };
    let wall_coords = to_screen(walls.as_slice())?;
    let abandoned_coords = to_screen(animation.abandoned.as_slice())?;
    let path_coords = to_screen(animation.current_path.as_slice())?;
    let exit_coords = if app.maze.is_inside(app.maze.exit()) {
        to_screen([app.maze.exit()].as_slice())?
    } else {
        Vec::new()
    };

    let maze = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_coords,
                color: Color::Green,
            });
            ctx.draw(&Points {
                coords: &exit_coords,
                color: Color::Yellow,
            });
            ctx.draw(&Points {
                coords: &abandoned_coords,
                color: Color::DarkGray,
            });
            ctx.draw(&Points {
                coords: &path_coords,
                color: Color::Red,
            });
        });

    frame.render_widget(maze, space);

    let footer = Block::bordered()
        .title(KEY_HELP)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    let status_area = footer.inner(footer_area);

    frame.render_widget(footer, footer_area);
    frame.render_widget(
        Paragraph::new(Line::raw(app.status()).centered()),
        status_area,
    );

    Ok(())
}
