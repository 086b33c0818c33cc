use hanoi_core::Ring;

/// Errors returned when a game cannot be built from its configuration.
///
/// No partially built game is ever returned alongside these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The board would have no towers.
    #[display("a game needs at least one tower")]
    NoTowers,
    /// The board would have no rings.
    #[display("a game needs at least one ring")]
    NoRings,
    /// No ring set was requested.
    #[display("a game needs at least one ring set")]
    NoSets,
    /// More ring sets than towers were requested.
    #[display("{sets} ring sets do not fit on {towers} towers")]
    TooManySets {
        /// Requested number of sets.
        sets: u32,
        /// Number of towers on the board.
        towers: usize,
    },
    /// The winning layout and the starting layout disagree on the tower count.
    #[display("winning layout has {winning} towers but the board has {start}")]
    TowerCountMismatch {
        /// Towers on the starting board.
        start: usize,
        /// Towers in the winning layout.
        winning: usize,
    },
    /// The starting layout does not hold each ring size exactly once per set.
    #[display(
        "starting layout must hold rings 1..={ring_count} once in each of sets 0..{set_count}"
    )]
    InconsistentLayout {
        /// Largest ring size on the starting board.
        ring_count: u32,
        /// Distinct set ids on the starting board.
        set_count: u32,
    },
    /// The winning layout holds different rings than the starting layout.
    #[display("winning layout does not hold the same rings as the starting layout")]
    UnreachableWinningLayout,
}

/// Errors returned when a move is rejected.
///
/// A rejected move never changes the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum MoveError {
    /// A tower index does not exist on the board.
    #[display("tower {tower} does not exist (the board has {tower_count} towers)")]
    TowerOutOfRange {
        /// The rejected index.
        tower: usize,
        /// Number of towers on the board.
        tower_count: usize,
    },
    /// The source tower holds no ring to take.
    #[display("tower {tower} has no ring to move")]
    EmptySource {
        /// The empty tower.
        tower: usize,
    },
    /// The ring is larger than the ring it would cover.
    #[display("cannot put ring {ring} on top of smaller ring {onto}")]
    IllegalStack {
        /// The ring being moved.
        ring: Ring,
        /// The top ring of the destination tower.
        onto: Ring,
    },
}
