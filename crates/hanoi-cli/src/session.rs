use std::io::{self, BufRead, Write};

use hanoi_game::{Game, MoveOutcome};

use crate::render;

const HELP: &str = "\
Commands:
  <from> <to>   move the top ring of tower <from> onto tower <to>
  help          show this list
  quit          leave the game
";

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Move { source: usize, destination: usize },
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum CommandError {
    #[display("not a tower number: {_0:?}")]
    InvalidTower(#[error(not(source))] String),
    #[display("unknown command {_0:?} (type `help` for the list of commands)")]
    Unknown(#[error(not(source))] String),
}

impl Command {
    pub(crate) fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => return Ok(Self::Empty),
            "h" | "help" | "?" => return Ok(Self::Help),
            "q" | "quit" | "exit" => return Ok(Self::Quit),
            _ => {}
        }

        let tokens = line.split_whitespace().collect::<Vec<_>>();
        let &[source, destination] = tokens.as_slice() else {
            return Err(CommandError::Unknown(line.to_owned()));
        };
        let tower = |token: &str| {
            token
                .parse::<usize>()
                .map_err(|_| CommandError::InvalidTower(token.to_owned()))
        };
        Ok(Self::Move {
            source: tower(source)?,
            destination: tower(destination)?,
        })
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionEnd {
    Won { moves: u64 },
    Quit,
    EndOfInput,
}

/// Plays `game` with commands read line by line from `input`.
///
/// Rejected moves and malformed commands are reported and the session goes
/// on; it ends when the game is won, the player quits, or input runs out.
pub(crate) fn run<R, W>(game: &mut Game, input: R, mut output: W) -> io::Result<SessionEnd>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", render::render_game(game))?;
    writeln!(output, "Type `help` for the list of commands.")?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(Command::Empty) => {}
            Ok(Command::Help) => write!(output, "{HELP}")?,
            Ok(Command::Quit) => return Ok(SessionEnd::Quit),
            Ok(Command::Move {
                source,
                destination,
            }) => match game.move_ring(source, destination) {
                Ok(MoveOutcome::NoOp) => {
                    writeln!(output, "The ring stays on tower {source}.")?;
                }
                Ok(MoveOutcome::Moved(_)) => {
                    write!(output, "{}", render::render_game(game))?;
                    if game.is_won() {
                        return finish(game, output);
                    }
                }
                Err(err) => writeln!(output, "{err}")?,
            },
            Err(err) => writeln!(output, "{err}")?,
        }
        prompt(&mut output)?;
    }

    writeln!(output)?;
    Ok(SessionEnd::EndOfInput)
}

fn prompt<W: Write>(output: &mut W) -> io::Result<()> {
    write!(output, "> ")?;
    output.flush()
}

fn finish<W: Write>(game: &Game, mut output: W) -> io::Result<SessionEnd> {
    let moves = game.move_count();
    writeln!(output, "You won in {moves} moves.")?;
    Ok(SessionEnd::Won { moves })
}
