//! Find the obstacle that first cuts the start off from the goal.
//!
//! Obstacles fall onto the maze one at a time, in order. Adding walls can
//! only remove paths, so reachability is monotone in the number of fallen
//! obstacles and the first blocking one is found by binary search over
//! prefix lengths.

use mazeway_core::{Maze, MazeError, Point};

use crate::bfs::is_reachable;

/// The obstacle after whose placement the goal is unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blocking {
    /// Position of the obstacle in the input slice.
    pub index: usize,
    pub pos: Point,
}

/// Return the first obstacle whose placement leaves no path from start to
/// goal, or `None` if a path survives every obstacle.
///
/// An obstacle landing on the start or goal blocks immediately. Obstacles
/// outside the maze are rejected with [`MazeError::WallOutOfBounds`].
pub fn first_blocking(maze: &Maze, obstacles: &[Point]) -> Result<Option<Blocking>, MazeError> {
    if let Some(&p) = obstacles.iter().find(|&&p| !maze.range().contains(p)) {
        return Err(MazeError::WallOutOfBounds(p));
    }
    if !is_reachable(maze) {
        log::debug!("goal unreachable before any obstacle falls");
        return Ok(None);
    }

    // Invariant: blocked(hi) is true, blocked(lo) is false, where blocked(k)
    // means the first k obstacles cut the path.
    let blocked = |k: usize| -> Result<bool, MazeError> {
        match maze.with_walls(obstacles[..k].iter().copied()) {
            Ok(m) => Ok(!is_reachable(&m)),
            Err(MazeError::OnWall { .. }) => Ok(true),
            Err(e) => Err(e),
        }
    };

    if !blocked(obstacles.len())? {
        return Ok(None);
    }
    let (mut lo, mut hi) = (0, obstacles.len());
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if blocked(mid)? {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    let index = hi - 1;
    log::debug!(
        "obstacle {index} at {} blocks the goal ({} obstacles total)",
        obstacles[index],
        obstacles.len()
    );
    Ok(Some(Blocking {
        index,
        pos: obstacles[index],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_of_obstacles_blocks_on_last_piece() {
        let m = Maze::open(3, 3, Point::ZERO, Point::new(2, 2)).unwrap();
        let obstacles = [Point::new(2, 0), Point::new(1, 0), Point::new(1, 1), Point::new(1, 2)];
        let b = first_blocking(&m, &obstacles).unwrap();
        assert_eq!(
            b,
            Some(Blocking {
                index: 3,
                pos: Point::new(1, 2)
            })
        );
    }

    #[test]
    fn first_obstacle_can_block() {
        // A single-row corridor is cut by any interior obstacle.
        let m = Maze::open(4, 1, Point::ZERO, Point::new(3, 0)).unwrap();
        let b = first_blocking(&m, &[Point::new(2, 0), Point::new(1, 0)]).unwrap();
        assert_eq!(b.map(|b| b.index), Some(0));
    }

    #[test]
    fn surviving_path_reports_none() {
        let m = Maze::open(3, 3, Point::ZERO, Point::new(2, 2)).unwrap();
        let b = first_blocking(&m, &[Point::new(1, 1), Point::new(2, 0)]).unwrap();
        assert_eq!(b, None);
        assert_eq!(first_blocking(&m, &[]).unwrap(), None);
    }

    #[test]
    fn obstacle_on_goal_blocks() {
        let m = Maze::open(3, 3, Point::ZERO, Point::new(2, 2)).unwrap();
        let b = first_blocking(&m, &[Point::new(0, 1), Point::new(2, 2)]).unwrap();
        assert_eq!(b.map(|b| b.index), Some(1));
    }

    #[test]
    fn out_of_bounds_obstacle_is_an_error() {
        let m = Maze::open(3, 3, Point::ZERO, Point::new(2, 2)).unwrap();
        let err = first_blocking(&m, &[Point::new(1, 1), Point::new(3, 0)]).unwrap_err();
        assert_eq!(err, MazeError::WallOutOfBounds(Point::new(3, 0)));
    }
}
