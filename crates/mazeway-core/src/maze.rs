//! Validated wall grids with a start and a goal cell.
//!
//! A [`Maze`] is immutable once built. Every constructor checks the same
//! invariants, so search code can rely on them without re-checking:
//!
//! - the grid is non-empty and rectangular;
//! - `start` and `goal` lie inside the grid and are not walls.

use std::fmt;

use crate::geom::{Point, Range};

/// Which designated cell an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Errors that can occur when building a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The grid has no rows or no columns.
    Empty,
    /// A row's width differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Start or goal lies outside the grid.
    OutOfBounds { endpoint: Endpoint, pos: Point },
    /// Start or goal lies on a wall.
    OnWall { endpoint: Endpoint, pos: Point },
    /// An extra wall lies outside the grid.
    WallOutOfBounds(Point),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: empty grid"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze: row {row} has width {found}, expected {expected}"
            ),
            Self::OutOfBounds { endpoint, pos } => {
                write!(f, "maze: {endpoint} {pos} is outside the grid")
            }
            Self::OnWall { endpoint, pos } => write!(f, "maze: {endpoint} {pos} is a wall"),
            Self::WallOutOfBounds(pos) => write!(f, "maze: wall {pos} is outside the grid"),
        }
    }
}

impl std::error::Error for MazeError {}

/// An immutable rectangular wall mask with designated start and goal cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    walls: Vec<bool>,
    bounds: Range,
    start: Point,
    goal: Point,
}

impl Maze {
    /// Build a maze from rows of wall flags (`true` = wall).
    ///
    /// `rows[y][x]` is the cell at `Point::new(x, y)`.
    pub fn new(rows: Vec<Vec<bool>>, start: Point, goal: Point) -> Result<Self, MazeError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MazeError::Empty);
        }
        for (row, r) in rows.iter().enumerate() {
            if r.len() != width {
                return Err(MazeError::Ragged {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
        }
        let bounds = Range::new(0, 0, width as i32, rows.len() as i32);
        let walls = rows.into_iter().flatten().collect();
        Self::validated(walls, bounds, start, goal)
    }

    /// Build a wall-free maze of the given size.
    pub fn open(width: i32, height: i32, start: Point, goal: Point) -> Result<Self, MazeError> {
        if width <= 0 || height <= 0 {
            return Err(MazeError::Empty);
        }
        let bounds = Range::new(0, 0, width, height);
        Self::validated(vec![false; bounds.len()], bounds, start, goal)
    }

    /// Return a copy of this maze with additional walls.
    ///
    /// Fails if a wall falls outside the grid or covers start or goal.
    pub fn with_walls(&self, walls: impl IntoIterator<Item = Point>) -> Result<Self, MazeError> {
        let mut mask = self.walls.clone();
        for p in walls {
            let i = self.bounds.index(p).ok_or(MazeError::WallOutOfBounds(p))?;
            mask[i] = true;
        }
        Self::validated(mask, self.bounds, self.start, self.goal)
    }

    fn validated(
        walls: Vec<bool>,
        bounds: Range,
        start: Point,
        goal: Point,
    ) -> Result<Self, MazeError> {
        for (endpoint, pos) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
            match bounds.index(pos) {
                None => return Err(MazeError::OutOfBounds { endpoint, pos }),
                Some(i) if walls[i] => return Err(MazeError::OnWall { endpoint, pos }),
                Some(_) => {}
            }
        }
        Ok(Self {
            walls,
            bounds,
            start,
            goal,
        })
    }

    /// The grid rectangle, anchored at the origin.
    #[inline]
    pub fn range(&self) -> Range {
        self.bounds
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Whether `p` is a wall. Points outside the grid are not walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.bounds.index(p).is_some_and(|i| self.walls[i])
    }

    /// Whether `p` is inside the grid and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.bounds.index(p).is_some_and(|i| !self.walls[i])
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }
}
