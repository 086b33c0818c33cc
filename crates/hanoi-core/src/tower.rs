//! A single stack of rings.

use crate::Ring;

/// An ordered stack of rings.
///
/// The topmost ring is the only one that can be taken or covered. Iteration
/// order is always top to bottom.
///
/// # Examples
///
/// ```
/// use hanoi_core::{Ring, Tower};
///
/// let mut tower = Tower::from_top_down([Ring::new(1, 0), Ring::new(2, 0)]);
/// assert_eq!(tower.top(), Some(Ring::new(1, 0)));
///
/// let ring = tower.pop();
/// assert_eq!(ring, Some(Ring::new(1, 0)));
/// assert_eq!(tower.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Tower {
    // Bottom ring first, so the top is at the end of the vector.
    rings: Vec<Ring>,
}

impl Tower {
    /// Creates an empty tower.
    #[must_use]
    pub const fn new() -> Self {
        Self { rings: Vec::new() }
    }

    /// Creates a tower from rings listed top first.
    #[must_use]
    pub fn from_top_down<I>(rings: I) -> Self
    where
        I: IntoIterator<Item = Ring>,
    {
        let mut rings = rings.into_iter().collect::<Vec<_>>();
        rings.reverse();
        Self { rings }
    }

    /// Returns the number of rings on this tower.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    /// Returns `true` if the tower holds no rings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Returns the topmost ring, or `None` if the tower is empty.
    #[must_use]
    pub fn top(&self) -> Option<Ring> {
        self.rings.last().copied()
    }

    /// Returns the rings of this tower from top to bottom.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Ring> + DoubleEndedIterator + '_ {
        self.rings.iter().rev().copied()
    }

    /// Places `ring` on top of this tower without checking sizes.
    pub fn push(&mut self, ring: Ring) {
        self.rings.push(ring);
    }

    /// Removes and returns the topmost ring.
    pub fn pop(&mut self) -> Option<Ring> {
        self.rings.pop()
    }

    /// Returns `true` if no ring rests on a strictly smaller one.
    ///
    /// Caller-supplied and randomized layouts may violate this; moves never
    /// introduce a violation.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.rings
            .windows(2)
            .all(|pair| pair[1].fits_on(pair[0]))
    }
}

impl FromIterator<Ring> for Tower {
    /// Collects rings listed top first.
    fn from_iter<I: IntoIterator<Item = Ring>>(iter: I) -> Self {
        Self::from_top_down(iter)
    }
}
