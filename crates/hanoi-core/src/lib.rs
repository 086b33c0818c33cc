//! Core data structures for the Towers of Hanoi puzzle.
//!
//! This crate provides the board model shared by layout generation, the game
//! engine, and front ends.
//!
//! # Overview
//!
//! - [`ring`]: a sized disc carrying a set label
//! - [`tower`]: a stack of rings, topmost ring first
//! - [`board`]: every tower at one instant, plus the pure board utilities
//!   ([`Board::rotated`], [`Board::count_sets`], [`Board::standard`]) and a
//!   compact text format for layouts
//!
//! # Examples
//!
//! ```
//! use hanoi_core::{Board, Ring};
//!
//! // Two sets of three rings on four towers.
//! let board = Board::standard(4, 3, 2);
//! assert_eq!(board.ring_count(), 6);
//! assert_eq!(board.count_sets(), 2);
//! assert_eq!(board.tower(0).and_then(|t| t.top()), Some(Ring::new(1, 0)));
//! assert_eq!(board.tower(3).and_then(|t| t.top()), Some(Ring::new(1, 1)));
//!
//! // Layouts can be written down and read back.
//! let parsed: Board = "1 2 3 / / ".parse()?;
//! assert_eq!(parsed, Board::standard(3, 3, 1));
//! # Ok::<(), hanoi_core::ParseBoardError>(())
//! ```

pub mod board;
pub mod ring;
pub mod tower;

// Re-export commonly used types
pub use self::{
    board::{Board, ParseBoardError},
    ring::Ring,
    tower::Tower,
};
