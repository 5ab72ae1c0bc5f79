use std::collections::VecDeque;

use mazeway_core::{Maze, Point, Range};

/// A position with its breadth-first distance from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub dist: u32,
}

/// Unweighted 4-directional distances from one source cell.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    rng: Range,
    dist: Vec<Option<u32>>,
    reached: Vec<PathNode>,
}

impl DistanceMap {
    /// Distance to `p`, or `None` if `p` is unreachable or outside the maze.
    pub fn at(&self, p: Point) -> Option<u32> {
        self.dist[self.rng.index(p)?]
    }

    /// Every reached cell in the order it was discovered.
    pub fn reached(&self) -> &[PathNode] {
        &self.reached
    }
}

/// Compute a breadth-first search distance map over the passable cells of
/// `maze`, starting from `source`.
///
/// Each step has cost 1 and headings play no role. A `source` that is a wall
/// or outside the maze reaches nothing.
pub fn bfs_map(maze: &Maze, source: Point) -> DistanceMap {
    let rng = maze.range();
    let mut map = DistanceMap {
        rng,
        dist: vec![None; rng.len()],
        reached: Vec::new(),
    };

    let mut queue: VecDeque<Point> = VecDeque::new();
    if let Some(si) = rng.index(source).filter(|_| maze.is_passable(source)) {
        map.dist[si] = Some(0);
        queue.push_back(source);
        map.reached.push(PathNode {
            pos: source,
            dist: 0,
        });
    }

    while let Some(cp) = queue.pop_front() {
        let Some(current_dist) = rng.index(cp).and_then(|ci| map.dist[ci]) else {
            continue;
        };

        for np in cp.neighbors_4() {
            if !maze.is_passable(np) {
                continue;
            }
            let Some(ni) = rng.index(np) else {
                continue;
            };
            if map.dist[ni].is_some() {
                continue;
            }
            let nd = current_dist + 1;
            map.dist[ni] = Some(nd);
            queue.push_back(np);
            map.reached.push(PathNode { pos: np, dist: nd });
        }
    }

    map
}

/// Whether the maze's goal can be reached from its start at all.
pub fn is_reachable(maze: &Maze) -> bool {
    bfs_map(maze, maze.start()).at(maze.goal()).is_some()
}
