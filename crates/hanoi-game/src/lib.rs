//! Game session management for the Towers of Hanoi.
//!
//! This crate owns the rules: it builds a [`Game`] from a [`GameConfig`],
//! checks and applies moves, and tracks the move count and whether the
//! winning layout has been reached.
//!
//! # Examples
//!
//! ```
//! use hanoi_game::{Game, GameConfig, MoveError};
//!
//! let mut game = Game::new(GameConfig::default().tower_count(2).ring_count(1))?;
//! assert!(matches!(
//!     game.move_ring(1, 0),
//!     Err(MoveError::EmptySource { tower: 1 })
//! ));
//!
//! game.move_ring(0, 1)?;
//! assert!(game.is_won());
//! assert_eq!(game.move_count(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{config::*, error::*, game::*};

mod config;
mod error;
mod game;
