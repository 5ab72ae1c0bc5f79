//! Compass headings.

use std::fmt;

use crate::geom::Point;

/// One of the four compass directions a walker can face.
///
/// Headings only matter for equality: moving in the current heading is a
/// straight step, any other heading is a turn. Left, right and reverse
/// turns are not distinguished.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in clockwise order starting from north.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Unit step for this heading (y grows down).
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Heading::North => Point::new(0, -1),
            Heading::East => Point::new(1, 0),
            Heading::South => Point::new(0, 1),
            Heading::West => Point::new(-1, 0),
        }
    }

    /// Position of this heading in [`ALL`](Self::ALL).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index`](Self::index), wrapping modulo 4.
    #[inline]
    pub const fn from_index(i: usize) -> Self {
        Self::ALL[i % 4]
    }

    /// The heading pointing the other way.
    #[inline]
    pub const fn reverse(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Heading of a single cardinal step from `from` to `to`, if any.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        let d = to - from;
        Self::ALL.into_iter().find(|h| h.delta() == d)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Heading::North => "N",
            Heading::East => "E",
            Heading::South => "S",
            Heading::West => "W",
        };
        f.write_str(s)
    }
}
