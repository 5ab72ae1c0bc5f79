use mazeway_core::Range;

use crate::state::StateSpace;

/// Central coordinator for heading-aware searches on a grid rectangle.
///
/// Unlike a cache-holding pathfinder, `StateRange` keeps no tables between
/// queries: every search builds its own frontier, cost table and
/// predecessor table and drops them on return, so repeated queries on the
/// same input always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateRange {
    pub(crate) rng: Range,
}

impl StateRange {
    /// Create a new `StateRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self { rng }
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of (cell, heading) states in the range.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.space().len()
    }

    #[inline]
    pub(crate) fn space(&self) -> StateSpace {
        StateSpace::new(self.rng)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StateRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.rng, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StateRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = <Range as serde::Deserialize>::deserialize(deserializer)?;
        Ok(StateRange::new(range))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn staterange_round_trip() {
        let sr = StateRange::new(Range::new(1, 2, 10, 20));
        let json = serde_json::to_string(&sr).unwrap();
        let back: StateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sr);
    }
}
