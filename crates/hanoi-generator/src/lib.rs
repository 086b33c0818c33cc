//! Randomized starting layouts for the Towers of Hanoi.
//!
//! [`LayoutGenerator`] takes a layout and scatters its rings across the same
//! towers. Every ring keeps its size and set; only its tower and depth change.
//! Rings are not required to end up in legal stacking order, since legality
//! only constrains the moves that follow.
//!
//! Generation is deterministic for a given [`LayoutSeed`], so a layout can be
//! reproduced from the seed reported in [`GeneratedLayout`].
//!
//! # Examples
//!
//! ```
//! use hanoi_core::Board;
//! use hanoi_generator::LayoutGenerator;
//!
//! let standard = Board::standard(3, 5, 1);
//! let generator = LayoutGenerator::new(&standard);
//!
//! let layout = generator.generate();
//! assert_eq!(layout.board.ring_count(), 5);
//! assert_eq!(layout.board.size_histogram(), standard.size_histogram());
//!
//! // The same seed reproduces the same layout.
//! let replay = generator.generate_with_seed(layout.seed);
//! assert_eq!(replay.board, layout.board);
//! ```

use hanoi_core::{Board, Ring, Tower};
use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

pub use self::seed::{LayoutSeed, ParseSeedError};

mod seed;

/// A randomized layout together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLayout {
    /// The randomized board.
    pub board: Board,
    /// Seed that reproduces `board` from the same base layout.
    pub seed: LayoutSeed,
}

/// Scatters the rings of a base layout across its towers.
#[derive(Debug, Clone, Copy)]
pub struct LayoutGenerator<'a> {
    base: &'a Board,
}

impl<'a> LayoutGenerator<'a> {
    /// Creates a generator that redistributes the rings of `base`.
    #[must_use]
    pub fn new(base: &'a Board) -> Self {
        Self { base }
    }

    /// Generates a layout from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedLayout {
        self.generate_with_seed(LayoutSeed::random())
    }

    /// Generates the layout determined by `seed`.
    ///
    /// The rings are shuffled together with one separator per tower boundary;
    /// the shuffled sequence is then cut at the separators, each piece
    /// becoming one tower listed top first. Every way of splitting the rings
    /// into ordered towers is equally likely.
    #[must_use]
    pub fn generate_with_seed(&self, seed: LayoutSeed) -> GeneratedLayout {
        let tower_count = self.base.tower_count();
        if tower_count == 0 {
            return GeneratedLayout {
                board: self.base.clone(),
                seed,
            };
        }

        let mut slots = self
            .base
            .rings()
            .map(Some)
            .chain(std::iter::repeat_n(None, tower_count - 1))
            .collect::<Vec<Option<Ring>>>();
        let mut rng = Pcg64::from_seed(seed.to_bytes());
        slots.shuffle(&mut rng);

        let board = slots
            .split(Option::is_none)
            .map(|piece| piece.iter().flatten().copied().collect::<Tower>())
            .collect::<Board>();
        debug_assert_eq!(board.tower_count(), tower_count);

        GeneratedLayout { board, seed }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SEED: &str = "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3";

    #[test]
    fn test_same_seed_same_layout() {
        let base = Board::standard(4, 6, 2);
        let generator = LayoutGenerator::new(&base);
        let seed = SEED.parse().unwrap();

        let first = generator.generate_with_seed(seed);
        let second = generator.generate_with_seed(seed);
        assert_eq!(first, second);
        assert_eq!(first.seed, seed);
    }

    #[test]
    fn test_generate_keeps_tower_count_and_rings() {
        let base = Board::standard(5, 4, 3);
        let layout = LayoutGenerator::new(&base).generate();

        assert_eq!(layout.board.tower_count(), 5);
        assert_eq!(layout.board.ring_count(), 12);
        assert_eq!(layout.board.count_sets(), 3);
        assert_eq!(layout.board.size_histogram(), base.size_histogram());
    }

    #[test]
    fn test_single_tower_keeps_every_ring_there() {
        let base = Board::standard(1, 3, 1);
        let layout = LayoutGenerator::new(&base).generate();
        assert_eq!(layout.board.tower_count(), 1);
        assert_eq!(layout.board.ring_count(), 3);
    }

    #[test]
    fn test_empty_board_is_returned_unchanged() {
        let base = Board::default();
        let layout = LayoutGenerator::new(&base).generate();
        assert_eq!(layout.board, base);

        let no_rings = Board::empty(3);
        let layout = LayoutGenerator::new(&no_rings).generate();
        assert_eq!(layout.board, no_rings);
    }

    proptest! {
        #[test]
        fn test_generation_conserves_rings(
            bytes in any::<[u8; 32]>(),
            towers in 1_usize..6,
            rings in 1_u32..9
        ) {
            let base = Board::standard(towers, rings, 1);
            let layout = LayoutGenerator::new(&base).generate_with_seed(LayoutSeed::from_bytes(bytes));

            prop_assert_eq!(layout.board.tower_count(), towers);
            prop_assert_eq!(layout.board.ring_count(), rings as usize);
            let histogram = layout.board.size_histogram();
            for size in 1..=rings {
                prop_assert_eq!(histogram.get(&size).copied(), Some(1));
            }

            let mut expected = base.rings().collect::<Vec<_>>();
            let mut actual = layout.board.rings().collect::<Vec<_>>();
            expected.sort_unstable();
            actual.sort_unstable();
            prop_assert_eq!(actual, expected);
        }
    }
}
