//! The full arrangement of rings across towers.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Ring, Tower};

/// Every tower of a puzzle at one instant.
///
/// Equality is structural: two boards are equal when they have the same number
/// of towers and every tower holds the same rings in the same order.
///
/// # Text format
///
/// Boards implement [`Display`] and [`FromStr`] with a compact layout format:
///
/// - towers are separated by `/`
/// - rings within a tower are separated by whitespace or `,`, topmost first
/// - a ring is written `<size>` (set 0) or `<size>:<set>`
///
/// ```
/// use hanoi_core::{Board, Ring};
///
/// let board: Board = "1:0 2:0 / 1:1, 2:1 /".parse()?;
/// assert_eq!(board.tower_count(), 3);
/// assert_eq!(board.tower(1).and_then(|t| t.top()), Some(Ring::new(1, 1)));
/// assert!(board.tower(2).is_some_and(|t| t.is_empty()));
///
/// assert_eq!(board.to_string(), "1:0 2:0 / 1:1 2:1 / ");
/// # Ok::<(), hanoi_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    towers: Vec<Tower>,
}

impl Board {
    /// Creates a board from towers.
    #[must_use]
    pub fn new(towers: Vec<Tower>) -> Self {
        Self { towers }
    }

    /// Creates a board with `tower_count` empty towers.
    #[must_use]
    pub fn empty(tower_count: usize) -> Self {
        Self {
            towers: vec![Tower::new(); tower_count],
        }
    }

    /// Creates the standard starting layout.
    ///
    /// Each of the `set_count` sets holds rings sized `1..=ring_count`, stacked
    /// smallest on top on a tower of its own: set 0 on the first tower, set 1
    /// on the last tower, and any further sets on towers `1, 2, ...` in order.
    ///
    /// # Panics
    ///
    /// Panics if `tower_count` is zero or `set_count` exceeds `tower_count`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hanoi_core::Board;
    ///
    /// let board = Board::standard(4, 2, 3);
    /// assert_eq!(board.to_string(), "1:0 2:0 / 1:2 2:2 /  / 1:1 2:1");
    /// ```
    #[must_use]
    pub fn standard(tower_count: usize, ring_count: u32, set_count: u32) -> Self {
        assert!(tower_count > 0, "a board needs at least one tower");
        assert!(
            usize::try_from(set_count).is_ok_and(|sets| sets <= tower_count),
            "{set_count} sets do not fit on {tower_count} towers"
        );

        let mut board = Self::empty(tower_count);
        for set in 0..set_count {
            let index = match set {
                0 => 0,
                1 => tower_count - 1,
                n => n as usize - 1,
            };
            board.towers[index] = (1..=ring_count).map(|size| Ring::new(size, set)).collect();
        }
        board
    }

    /// Returns the number of towers.
    #[must_use]
    pub fn tower_count(&self) -> usize {
        self.towers.len()
    }

    /// Returns the tower at `index`, or `None` if it is out of range.
    #[must_use]
    pub fn tower(&self, index: usize) -> Option<&Tower> {
        self.towers.get(index)
    }

    /// Returns all towers in index order.
    #[must_use]
    pub fn towers(&self) -> &[Tower] {
        &self.towers
    }

    /// Returns every ring on the board, tower by tower, each tower top first.
    pub fn rings(&self) -> impl Iterator<Item = Ring> + '_ {
        self.towers.iter().flat_map(Tower::iter)
    }

    /// Returns the total number of rings on the board.
    #[must_use]
    pub fn ring_count(&self) -> usize {
        self.towers.iter().map(Tower::len).sum()
    }

    /// Returns the size of the largest ring, or `None` if the board is empty.
    #[must_use]
    pub fn max_ring_size(&self) -> Option<u32> {
        self.rings().map(Ring::size).max()
    }

    /// Returns how many rings of each size are on the board.
    #[must_use]
    pub fn size_histogram(&self) -> BTreeMap<u32, usize> {
        let mut histogram = BTreeMap::new();
        for ring in self.rings() {
            *histogram.entry(ring.size()).or_insert(0) += 1;
        }
        histogram
    }

    /// Returns the number of distinct set ids present on the board.
    ///
    /// A board without rings has no sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use hanoi_core::Board;
    ///
    /// let board: Board = "1:0 2:1 / 2:1 / 1:2".parse()?;
    /// assert_eq!(board.count_sets(), 3);
    /// assert_eq!(Board::empty(3).count_sets(), 0);
    /// # Ok::<(), hanoi_core::ParseBoardError>(())
    /// ```
    #[must_use]
    pub fn count_sets(&self) -> usize {
        self.rings().map(Ring::set).collect::<BTreeSet<_>>().len()
    }

    /// Returns every ring on the board sorted by size, then set.
    ///
    /// Two boards hold the same rings, wherever they sit, exactly when their
    /// sorted rings are equal.
    #[must_use]
    pub fn sorted_rings(&self) -> Vec<Ring> {
        let mut rings = self.rings().collect::<Vec<_>>();
        rings.sort_unstable();
        rings
    }

    /// Returns a copy of this board where tower `i` holds what tower `i + 1`
    /// held, the first tower wrapping around to the last index.
    ///
    /// Each tower keeps its internal order. Rotating a board `tower_count`
    /// times gives back the original board.
    ///
    /// # Examples
    ///
    /// ```
    /// use hanoi_core::Board;
    ///
    /// let board = Board::standard(3, 2, 1);
    /// assert_eq!(board.rotated().to_string(), " /  / 1:0 2:0");
    /// ```
    #[must_use]
    pub fn rotated(&self) -> Self {
        let mut towers = self.towers.clone();
        if !towers.is_empty() {
            towers.rotate_left(1);
        }
        Self { towers }
    }

    /// Moves the topmost ring of `source` onto `destination` without checking
    /// sizes, returning the ring that moved.
    ///
    /// Returns `None` and leaves the board unchanged if either index is out of
    /// range or `source` is empty.
    pub fn relocate_top(&mut self, source: usize, destination: usize) -> Option<Ring> {
        if destination >= self.towers.len() {
            return None;
        }
        let ring = self.towers.get_mut(source)?.pop()?;
        self.towers[destination].push(ring);
        Some(ring)
    }
}

impl FromIterator<Tower> for Board {
    fn from_iter<I: IntoIterator<Item = Tower>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tower) in self.towers.iter().enumerate() {
            if i > 0 {
                f.write_str(" / ")?;
            }
            for (j, ring) in tower.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                Display::fmt(&ring, f)?;
            }
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`Board`] from its text format.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// A ring size is not a number.
    #[display("tower {tower}: invalid ring size {token:?}")]
    InvalidSize {
        /// Index of the tower holding the ring.
        tower: usize,
        /// The offending text.
        token: String,
    },
    /// A ring size is zero.
    #[display("tower {tower}: ring size must be positive")]
    ZeroSize {
        /// Index of the tower holding the ring.
        tower: usize,
    },
    /// A set id is not a number.
    #[display("tower {tower}: invalid set id {token:?}")]
    InvalidSet {
        /// Index of the tower holding the ring.
        tower: usize,
        /// The offending text.
        token: String,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split('/')
            .enumerate()
            .map(|(tower, text)| {
                text.split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|token| !token.is_empty())
                    .map(|token| parse_ring(tower, token))
                    .collect::<Result<Tower, _>>()
            })
            .collect()
    }
}

fn parse_ring(tower: usize, token: &str) -> Result<Ring, ParseBoardError> {
    let (size_text, set_text) = token.split_once(':').unwrap_or((token, "0"));
    let size = size_text
        .parse::<u32>()
        .map_err(|_| ParseBoardError::InvalidSize {
            tower,
            token: size_text.to_owned(),
        })?;
    if size == 0 {
        return Err(ParseBoardError::ZeroSize { tower });
    }
    let set = set_text
        .parse::<u32>()
        .map_err(|_| ParseBoardError::InvalidSet {
            tower,
            token: set_text.to_owned(),
        })?;
    Ok(Ring::new(size, set))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn arb_board() -> impl Strategy<Value = Board> {
        prop::collection::vec(prop::collection::vec((1_u32..8, 0_u32..4), 0..6), 1..7).prop_map(
            |towers| {
                towers
                    .into_iter()
                    .map(|rings| {
                        rings
                            .into_iter()
                            .map(|(size, set)| Ring::new(size, set))
                            .collect::<Tower>()
                    })
                    .collect()
            },
        )
    }

    #[test]
    fn test_standard_single_set() {
        let board = Board::standard(3, 5, 1);
        assert_eq!(board.tower_count(), 3);
        assert_eq!(board.ring_count(), 5);
        let first = board.tower(0).unwrap();
        assert_eq!(first.top(), Some(Ring::new(1, 0)));
        assert_eq!(first.iter().last(), Some(Ring::new(5, 0)));
        assert!(first.is_ordered());
        assert!(board.tower(1).unwrap().is_empty());
        assert!(board.tower(2).unwrap().is_empty());
    }

    #[test]
    fn test_standard_set_placement() {
        let board = Board::standard(5, 1, 4);
        let tops = board
            .towers()
            .iter()
            .map(|tower| tower.top().map(Ring::set))
            .collect::<Vec<_>>();
        assert_eq!(tops, [Some(0), Some(2), Some(3), None, Some(1)]);
    }

    #[test]
    fn test_standard_counts_every_size_once_per_set() {
        let board = Board::standard(4, 6, 3);
        assert_eq!(board.ring_count(), 18);
        assert_eq!(board.count_sets(), 3);
        assert_eq!(board.max_ring_size(), Some(6));
        for size in 1..=6 {
            assert_eq!(board.size_histogram()[&size], 3);
        }
    }

    #[test]
    fn test_standard_single_tower() {
        let board = Board::standard(1, 2, 1);
        assert_eq!(board.to_string(), "1:0 2:0");
        assert_eq!(board.rotated(), board);
    }

    #[test]
    #[should_panic(expected = "3 sets do not fit on 2 towers")]
    fn test_standard_too_many_sets_panics() {
        let _ = Board::standard(2, 1, 3);
    }

    #[test]
    fn test_count_sets() {
        let board = Board::new(vec![
            Tower::from_top_down([Ring::new(1, 0), Ring::new(2, 1)]),
            Tower::from_top_down([Ring::new(1, 1)]),
            Tower::from_top_down([Ring::new(2, 2)]),
        ]);
        assert_eq!(board.count_sets(), 3);
        assert_eq!(Board::empty(4).count_sets(), 0);
        assert_eq!(Board::default().count_sets(), 0);
    }

    #[test]
    fn test_sorted_rings_ignore_placement() {
        let board: Board = "2:1 / 1:0 2:0 / 1:1".parse().unwrap();
        assert_eq!(
            board.sorted_rings(),
            [
                Ring::new(1, 0),
                Ring::new(1, 1),
                Ring::new(2, 0),
                Ring::new(2, 1)
            ]
        );
        assert_eq!(board.sorted_rings(), Board::standard(2, 2, 2).sorted_rings());
        assert!(Board::empty(2).sorted_rings().is_empty());
    }

    #[test]
    fn test_rotated_shifts_towers_left() {
        let board: Board = "1 / 2 3 / 4:1".parse().unwrap();
        assert_eq!(board.rotated().to_string(), "2:0 3:0 / 4:1 / 1:0");
        assert_eq!(Board::default().rotated(), Board::default());
    }

    #[test]
    fn test_relocate_top() {
        let mut board = Board::standard(3, 2, 1);
        assert_eq!(board.relocate_top(0, 2), Some(Ring::new(1, 0)));
        assert_eq!(board.relocate_top(0, 2), Some(Ring::new(2, 0)));
        assert_eq!(board.to_string(), " /  / 2:0 1:0");

        let before = board.clone();
        assert_eq!(board.relocate_top(0, 1), None);
        assert_eq!(board.relocate_top(2, 3), None);
        assert_eq!(board.relocate_top(7, 0), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_parse_accepts_commas_and_default_set() {
        let board: Board = "1,2 ,3/ /".parse().unwrap();
        assert_eq!(board, Board::standard(3, 3, 1));
        let single: Board = "".parse().unwrap();
        assert_eq!(single, Board::empty(1));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "1 x / 2".parse::<Board>(),
            Err(ParseBoardError::InvalidSize {
                tower: 0,
                token: "x".to_owned()
            })
        );
        assert_eq!(
            "1 / 0:1".parse::<Board>(),
            Err(ParseBoardError::ZeroSize { tower: 1 })
        );
        assert_eq!(
            "1 / / 2:b".parse::<Board>(),
            Err(ParseBoardError::InvalidSet {
                tower: 2,
                token: "b".to_owned()
            })
        );
        assert!(matches!(
            "-1".parse::<Board>(),
            Err(ParseBoardError::InvalidSize { .. })
        ));
    }

    proptest! {
        #[test]
        fn test_rotating_tower_count_times_is_identity(board in arb_board()) {
            let mut rotated = board.clone();
            for _ in 0..board.tower_count() {
                rotated = rotated.rotated();
            }
            prop_assert_eq!(rotated, board);
        }

        #[test]
        fn test_rotation_preserves_rings(board in arb_board()) {
            let rotated = board.rotated();
            prop_assert_eq!(rotated.ring_count(), board.ring_count());
            prop_assert_eq!(rotated.size_histogram(), board.size_histogram());
            prop_assert_eq!(rotated.count_sets(), board.count_sets());
            let n = board.tower_count();
            for i in 0..n {
                prop_assert_eq!(rotated.tower(i), board.tower((i + 1) % n));
            }
        }

        #[test]
        fn test_display_output_parses_back(board in arb_board()) {
            let parsed = board.to_string().parse::<Board>();
            prop_assert_eq!(parsed, Ok(board));
        }
    }
}
