//! This crate contains the source code for the mazetrail command-line solver.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::process::ExitCode;

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazetrail::{install_subscriber, App, Config, Maze};

fn main() -> Result<ExitCode> {
    install()?;

    let config = Config::parse();
    install_subscriber(config.verbose)?;

    let mut maze = Maze::empty(config.glyphs()?);
    maze.load(&config.file)?;
    let search = maze.explore(config.strategy);
    let solved = search.solved;

    if config.watch {
        let mut terminal = ratatui::init();
        let result = App::new(maze, search, config.animation_delay()).run(&mut terminal);
        ratatui::restore();
        result?;
    } else {
        if solved {
            println!("{}", maze.path_string());
        } else {
            eprintln!("no path from {} to {}", maze.start(), maze.exit());
        }

        if config.render {
            print!("{maze}");
        }
    }

    Ok(if solved {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
