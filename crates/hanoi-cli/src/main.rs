//! Terminal front end for the Towers of Hanoi.
//!
//! Reads `<from> <to>` commands from standard input and prints the board after
//! every move. Set `RUST_LOG=debug` to trace the engine.

use std::{io, process};

use clap::Parser as _;
use hanoi_game::Game;

use crate::{args::Args, session::SessionEnd};

mod args;
mod render;
mod session;

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let mut game = match Game::new(args.to_config()) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Invalid game configuration: {err}");
            process::exit(2);
        }
    };
    if let Some(seed) = game.seed() {
        println!("Seed: {seed}");
    }

    let stdin = io::stdin();
    match session::run(&mut game, stdin.lock(), io::stdout()) {
        Ok(SessionEnd::Won { moves }) => log::info!("game won in {moves} moves"),
        Ok(SessionEnd::Quit | SessionEnd::EndOfInput) => {
            log::info!("game left after {} moves", game.move_count());
        }
        Err(err) => {
            eprintln!("I/O error: {err}");
            process::exit(1);
        }
    }
}
