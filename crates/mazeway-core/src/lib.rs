//! **mazeway-core** — core types for heading-aware maze search.
//!
//! This crate provides the foundational types shared across the *mazeway*
//! crates: geometry primitives, compass headings, and the validated
//! [`Maze`] grid the search engines consume.

pub mod geom;
pub mod heading;
pub mod maze;

pub use geom::{Point, Range, RangeIter};
pub use heading::Heading;
pub use maze::{Endpoint, Maze, MazeError};
