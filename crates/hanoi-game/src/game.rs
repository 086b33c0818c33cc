use hanoi_core::{Board, Ring};
use hanoi_generator::{LayoutGenerator, LayoutSeed};

use crate::{ConfigError, Dimensions, GameConfig, MoveError, Randomization};

/// The effect of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveOutcome {
    /// Source and destination are the same tower; nothing changed.
    NoOp,
    /// The ring was moved.
    Moved(Ring),
}

/// A Towers of Hanoi game session.
///
/// Owns the live board, the winning layout, the move counter and the won
/// flag. The live board only changes through [`Game::move_ring`]; the winning
/// layout never changes after construction.
///
/// # Example
///
/// ```
/// use hanoi_core::Ring;
/// use hanoi_game::{Game, GameConfig, MoveError, MoveOutcome};
///
/// let mut game = Game::new(GameConfig::default())?;
/// assert_eq!(game.top_ring(0), Some(Ring::new(1, 0)));
///
/// assert_eq!(game.move_ring(0, 2)?, MoveOutcome::Moved(Ring::new(1, 0)));
/// assert!(matches!(
///     game.move_ring(0, 2),
///     Err(MoveError::IllegalStack { .. })
/// ));
/// assert_eq!(game.move_count(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    winning_board: Board,
    dimensions: Dimensions,
    seed: Option<LayoutSeed>,
    move_count: u64,
    won: bool,
}

impl Game {
    /// Creates a new game from `config`.
    ///
    /// Without a starting layout, the standard layout for the configured
    /// tower, ring and set counts is used. With one, the layout is used as is
    /// and the counts are inferred from it: tower count from the board, ring
    /// count from the largest ring, set count from the distinct set ids.
    ///
    /// Without a winning layout, the target is the standard layout for the
    /// effective counts rotated by one tower, so the first set has to travel
    /// from the first tower to the last one.
    ///
    /// Randomization, when requested, is applied to the starting layout after
    /// the counts are settled, so it never affects the winning layout.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the effective counts are invalid, if a
    /// supplied starting layout does not hold complete ring sets, or if a
    /// supplied winning layout differs from the starting layout in tower count
    /// or in the rings it holds.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let GameConfig {
            tower_count,
            ring_count,
            set_count,
            start_position,
            winning_position,
            randomization,
        } = config;

        let (start, dimensions) = match start_position {
            Some(board) => {
                let dimensions = Dimensions::infer(&board)?;
                (board, dimensions)
            }
            None => {
                let dimensions = Dimensions::new(tower_count, ring_count, set_count)?;
                (dimensions.standard_layout(), dimensions)
            }
        };

        let winning_board = match winning_position {
            Some(board) if board.tower_count() != dimensions.tower_count => {
                return Err(ConfigError::TowerCountMismatch {
                    start: dimensions.tower_count,
                    winning: board.tower_count(),
                });
            }
            Some(board) if board.sorted_rings() != start.sorted_rings() => {
                return Err(ConfigError::UnreachableWinningLayout);
            }
            Some(board) => board,
            None => dimensions.standard_layout().rotated(),
        };

        let seed = match randomization {
            Randomization::Off => None,
            Randomization::Random => Some(LayoutSeed::random()),
            Randomization::Seeded(seed) => Some(seed),
        };
        let board = match seed {
            Some(seed) => {
                log::debug!("randomizing starting layout with seed {seed}");
                LayoutGenerator::new(&start).generate_with_seed(seed).board
            }
            None => start,
        };

        log::debug!(
            "new game: {} towers, {} rings, {} sets",
            dimensions.tower_count,
            dimensions.ring_count,
            dimensions.set_count
        );

        Ok(Self {
            board,
            winning_board,
            dimensions,
            seed,
            move_count: 0,
            won: false,
        })
    }

    /// Returns the live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the layout that wins the game.
    #[must_use]
    pub fn winning_board(&self) -> &Board {
        &self.winning_board
    }

    /// Returns the effective tower, ring and set counts.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Returns the seed of the randomized starting layout, if any.
    #[must_use]
    pub fn seed(&self) -> Option<LayoutSeed> {
        self.seed
    }

    /// Returns the number of moves made so far.
    ///
    /// No-op moves and rejected moves are not counted.
    #[must_use]
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Returns `true` once the winning layout has been reached.
    ///
    /// The flag stays set even if later moves leave the winning layout.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Returns the topmost ring of a tower.
    ///
    /// Returns `None` if the tower is empty or does not exist.
    #[must_use]
    pub fn top_ring(&self, tower: usize) -> Option<Ring> {
        self.board.tower(tower)?.top()
    }

    /// Checks whether the live board is exactly the winning layout.
    ///
    /// Every tower must hold the same rings, with the same sets, in the same
    /// order. This is evaluated automatically after each move; see
    /// [`Game::is_won`].
    #[must_use]
    pub fn winning_condition(&self) -> bool {
        self.board == self.winning_board
    }

    /// Returns what moving the top ring of `source` onto `destination` would do,
    /// without changing the game.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::TowerOutOfRange`] if either tower does not exist,
    /// [`MoveError::EmptySource`] if `source` is empty, and
    /// [`MoveError::IllegalStack`] if the ring is larger than the top ring of
    /// `destination`.
    pub fn move_capability(
        &self,
        source: usize,
        destination: usize,
    ) -> Result<MoveOutcome, MoveError> {
        let tower_count = self.board.tower_count();
        let (Some(from), Some(to)) = (self.board.tower(source), self.board.tower(destination))
        else {
            let tower = if source >= tower_count {
                source
            } else {
                destination
            };
            return Err(MoveError::TowerOutOfRange { tower, tower_count });
        };

        if source == destination {
            return Ok(MoveOutcome::NoOp);
        }

        let ring = from
            .top()
            .ok_or(MoveError::EmptySource { tower: source })?;
        match to.top() {
            Some(onto) if !ring.fits_on(onto) => Err(MoveError::IllegalStack { ring, onto }),
            _ => Ok(MoveOutcome::Moved(ring)),
        }
    }

    /// Moves the top ring of `source` onto `destination`.
    ///
    /// Moving a ring onto its own tower is a no-op. A successful move
    /// increments the move count and re-evaluates the win condition.
    ///
    /// # Errors
    ///
    /// Same as [`Game::move_capability`]. The game is unchanged on error.
    pub fn move_ring(&mut self, source: usize, destination: usize) -> Result<MoveOutcome, MoveError> {
        let outcome = self
            .move_capability(source, destination)
            .inspect_err(|err| log::debug!("rejected move {source} -> {destination}: {err}"))?;

        if let MoveOutcome::Moved(ring) = outcome {
            let moved = self.board.relocate_top(source, destination);
            debug_assert_eq!(moved, Some(ring));
            self.move_count += 1;
            log::trace!(
                "move {}: ring {ring} from tower {source} to tower {destination}",
                self.move_count
            );

            if !self.won && self.winning_condition() {
                self.won = true;
                log::debug!("winning layout reached in {} moves", self.move_count);
            }
        }

        Ok(outcome)
    }
}
