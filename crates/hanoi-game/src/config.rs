use hanoi_core::Board;
use hanoi_generator::LayoutSeed;

use crate::ConfigError;

/// How the starting layout is randomized.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Randomization {
    /// Keep the starting layout as it is.
    #[default]
    Off,
    /// Scatter the rings using a fresh random seed.
    Random,
    /// Scatter the rings using the given seed.
    Seeded(LayoutSeed),
}

/// Settings used to build a [`Game`](crate::Game).
///
/// The defaults describe the classic puzzle: three towers, five rings, one
/// set, the standard starting layout, and no randomization.
///
/// # Examples
///
/// ```
/// use hanoi_core::Board;
/// use hanoi_game::{Game, GameConfig};
///
/// let config = GameConfig::default()
///     .tower_count(4)
///     .ring_count(3)
///     .set_count(2)
///     .randomize();
/// let game = Game::new(config)?;
/// assert_eq!(game.board().ring_count(), 6);
///
/// let custom = GameConfig::default().start_position("2 / 1 / 3".parse()?);
/// let game = Game::new(custom)?;
/// assert_eq!(game.dimensions().ring_count, 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of towers. Ignored when a starting layout is supplied.
    pub tower_count: usize,
    /// Number of rings per set. Ignored when a starting layout is supplied.
    pub ring_count: u32,
    /// Number of ring sets. Ignored when a starting layout is supplied.
    pub set_count: u32,
    /// Starting layout used verbatim instead of the standard one.
    pub start_position: Option<Board>,
    /// Target layout used verbatim instead of the rotated standard layout.
    pub winning_position: Option<Board>,
    /// Randomization applied to the starting layout.
    pub randomization: Randomization,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tower_count: 3,
            ring_count: 5,
            set_count: 1,
            start_position: None,
            winning_position: None,
            randomization: Randomization::Off,
        }
    }
}

impl GameConfig {
    /// Sets the number of towers.
    #[must_use]
    pub fn tower_count(mut self, tower_count: usize) -> Self {
        self.tower_count = tower_count;
        self
    }

    /// Sets the number of rings per set.
    #[must_use]
    pub fn ring_count(mut self, ring_count: u32) -> Self {
        self.ring_count = ring_count;
        self
    }

    /// Sets the number of ring sets.
    #[must_use]
    pub fn set_count(mut self, set_count: u32) -> Self {
        self.set_count = set_count;
        self
    }

    /// Uses `board` as the starting layout.
    #[must_use]
    pub fn start_position(mut self, board: Board) -> Self {
        self.start_position = Some(board);
        self
    }

    /// Uses `board` as the winning layout.
    #[must_use]
    pub fn winning_position(mut self, board: Board) -> Self {
        self.winning_position = Some(board);
        self
    }

    /// Randomizes the starting layout with a fresh seed.
    #[must_use]
    pub fn randomize(mut self) -> Self {
        self.randomization = Randomization::Random;
        self
    }

    /// Randomizes the starting layout with `seed`.
    #[must_use]
    pub fn seed(mut self, seed: LayoutSeed) -> Self {
        self.randomization = Randomization::Seeded(seed);
        self
    }
}

/// The effective size of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of towers.
    pub tower_count: usize,
    /// Number of rings per set (the largest ring size).
    pub ring_count: u32,
    /// Number of ring sets.
    pub set_count: u32,
}

impl Dimensions {
    /// Validates and returns the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoTowers`], [`ConfigError::NoRings`] or
    /// [`ConfigError::NoSets`] if the respective count is zero, and
    /// [`ConfigError::TooManySets`] if there are more sets than towers.
    pub fn new(tower_count: usize, ring_count: u32, set_count: u32) -> Result<Self, ConfigError> {
        if tower_count == 0 {
            return Err(ConfigError::NoTowers);
        }
        if ring_count == 0 {
            return Err(ConfigError::NoRings);
        }
        if set_count == 0 {
            return Err(ConfigError::NoSets);
        }
        if !usize::try_from(set_count).is_ok_and(|sets| sets <= tower_count) {
            return Err(ConfigError::TooManySets {
                sets: set_count,
                towers: tower_count,
            });
        }
        Ok(Self {
            tower_count,
            ring_count,
            set_count,
        })
    }

    /// Infers and validates the dimensions of a supplied layout.
    ///
    /// The ring count is the largest ring size and the set count is the number
    /// of distinct set ids on the board. The board must then hold exactly the
    /// rings of the standard layout for those counts, in any placement.
    ///
    /// # Errors
    ///
    /// Same as [`Dimensions::new`]; a layout without rings yields
    /// [`ConfigError::NoRings`]. Returns [`ConfigError::InconsistentLayout`]
    /// if a size is missing or repeated within a set, or if the set ids are
    /// not `0..set_count`.
    pub fn infer(board: &Board) -> Result<Self, ConfigError> {
        let ring_count = board.max_ring_size().unwrap_or(0);
        let set_count = u32::try_from(board.count_sets()).unwrap_or(u32::MAX);
        let dimensions = Self::new(board.tower_count(), ring_count, set_count)?;

        if board.ring_count() != dimensions.total_rings()
            || board.sorted_rings() != dimensions.standard_layout().sorted_rings()
        {
            return Err(ConfigError::InconsistentLayout {
                ring_count,
                set_count,
            });
        }
        Ok(dimensions)
    }

    /// Returns the standard starting layout for these dimensions.
    #[must_use]
    pub fn standard_layout(self) -> Board {
        Board::standard(self.tower_count, self.ring_count, self.set_count)
    }

    /// Returns the number of rings a standard layout of these dimensions holds.
    #[must_use]
    pub fn total_rings(self) -> usize {
        self.ring_count as usize * self.set_count as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.tower_count, 3);
        assert_eq!(config.ring_count, 5);
        assert_eq!(config.set_count, 1);
        assert!(config.start_position.is_none());
        assert!(config.winning_position.is_none());
        assert!(config.randomization.is_off());
    }

    #[test]
    fn test_builder_setters() {
        let seed = LayoutSeed::from_bytes([7; 32]);
        let config = GameConfig::default()
            .tower_count(6)
            .ring_count(2)
            .set_count(4)
            .start_position(Board::empty(2))
            .winning_position(Board::empty(2))
            .seed(seed);
        assert_eq!(config.tower_count, 6);
        assert_eq!(config.ring_count, 2);
        assert_eq!(config.set_count, 4);
        assert_eq!(config.start_position, Some(Board::empty(2)));
        assert_eq!(config.winning_position, Some(Board::empty(2)));
        assert_eq!(config.randomization, Randomization::Seeded(seed));

        assert!(GameConfig::default().randomize().randomization.is_random());
    }

    #[test]
    fn test_dimensions_validation() {
        assert!(Dimensions::new(1, 1, 1).is_ok());
        assert_eq!(Dimensions::new(0, 5, 1), Err(ConfigError::NoTowers));
        assert_eq!(Dimensions::new(3, 0, 1), Err(ConfigError::NoRings));
        assert_eq!(Dimensions::new(3, 5, 0), Err(ConfigError::NoSets));
        assert_eq!(
            Dimensions::new(3, 5, 4),
            Err(ConfigError::TooManySets { sets: 4, towers: 3 })
        );
        assert!(Dimensions::new(3, 5, 3).is_ok());
    }

    #[test]
    fn test_dimensions_infer() {
        let board: Board = "1:0 3:1 / 2:1 3:0 / 2:0 1:1".parse().unwrap();
        assert_eq!(
            Dimensions::infer(&board),
            Ok(Dimensions {
                tower_count: 3,
                ring_count: 3,
                set_count: 2,
            })
        );
        assert_eq!(Dimensions::infer(&Board::empty(3)), Err(ConfigError::NoRings));
        assert_eq!(Dimensions::infer(&Board::default()), Err(ConfigError::NoTowers));

        let crowded: Board = "1:0 / 1:1 1:2".parse().unwrap();
        assert_eq!(
            Dimensions::infer(&crowded),
            Err(ConfigError::TooManySets { sets: 3, towers: 2 })
        );
    }

    #[test]
    fn test_dimensions_infer_rejects_incomplete_sets() {
        for layout in [
            "1 1 3 / / ",
            "1 3 / / ",
            "1:5 2:5 / / ",
            "1:0 2:0 / 2:1 / ",
            "1:0 2:0 / 1:1 2:1 1:1 / ",
        ] {
            let board: Board = layout.parse().unwrap();
            assert!(
                matches!(
                    Dimensions::infer(&board),
                    Err(ConfigError::InconsistentLayout { .. })
                ),
                "{layout:?} was accepted"
            );
        }
    }

    #[test]
    fn test_total_rings() {
        let dimensions = Dimensions::new(4, 5, 3).unwrap();
        assert_eq!(dimensions.total_rings(), 15);
        assert_eq!(dimensions.standard_layout().ring_count(), 15);
    }
}
