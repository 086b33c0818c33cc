//! Ring representation.

use std::fmt::{self, Display};

/// A disc that can be stacked on a tower.
///
/// The size alone decides whether a ring may rest on another one. The set id
/// is a label: front ends use it to pick a color, and multi-set layouts use
/// it to tell apart rings of equal size.
///
/// # Examples
///
/// ```
/// use hanoi_core::Ring;
///
/// let small = Ring::new(1, 0);
/// let large = Ring::new(3, 1);
///
/// assert!(small.fits_on(large));
/// assert!(!large.fits_on(small));
///
/// // Equal sizes may share a tower regardless of set.
/// assert!(Ring::new(2, 0).fits_on(Ring::new(2, 1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ring {
    size: u32,
    set: u32,
}

impl Ring {
    /// Creates a ring of the given size belonging to the given set.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    ///
    /// ```should_panic
    /// use hanoi_core::Ring;
    ///
    /// // This will panic
    /// let _ = Ring::new(0, 0);
    /// ```
    #[must_use]
    pub fn new(size: u32, set: u32) -> Self {
        assert!(size > 0, "Invalid ring size: {size}");
        Self { size, set }
    }

    /// Returns the size of this ring (1 is the smallest).
    #[must_use]
    pub const fn size(self) -> u32 {
        self.size
    }

    /// Returns the set this ring belongs to.
    #[must_use]
    pub const fn set(self) -> u32 {
        self.set
    }

    /// Returns `true` if this ring may be placed directly on top of `below`.
    #[must_use]
    pub const fn fits_on(self, below: Self) -> bool {
        self.size <= below.size
    }
}

impl Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.size, self.set)
    }
}
