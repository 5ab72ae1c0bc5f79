use mazeway_core::Maze;

use crate::cost::{Cost, CostConfig};
use crate::graph::TurnGraph;
use crate::reconstruct::OptimalCells;
use crate::state::State;
use crate::staterange::StateRange;

/// Maze-level entry point: runs the heading-aware search on a [`Maze`]
/// with a fixed [`CostConfig`].
#[derive(Debug, Clone, Copy)]
pub struct MazeSolver<'a> {
    graph: TurnGraph<'a>,
    range: StateRange,
}

impl<'a> MazeSolver<'a> {
    pub fn new(maze: &'a Maze, config: CostConfig) -> Self {
        Self {
            graph: TurnGraph::new(maze, config),
            range: StateRange::new(maze.range()),
        }
    }

    /// The state graph being searched.
    pub fn graph(&self) -> &TurnGraph<'a> {
        &self.graph
    }

    /// Minimum cost from start to the goal cell in any heading, or `None`
    /// if the goal is unreachable.
    pub fn min_cost(&self) -> Option<Cost> {
        self.range
            .min_cost(&self.graph, self.graph.start_state(), self.graph.maze().goal())
    }

    /// Minimum cost together with the union of cells on all paths of that
    /// cost, or `None` if the goal is unreachable.
    pub fn min_cost_cells(&self) -> Option<OptimalCells> {
        self.range
            .min_cost_cells(&self.graph, self.graph.start_state(), self.graph.maze().goal())
    }

    /// One minimum-cost path as a sequence of states, start first.
    pub fn best_path(&self) -> Option<Vec<State>> {
        self.range
            .best_path(&self.graph, self.graph.start_state(), self.graph.maze().goal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::bfs_map;
    use mazeway_core::{Heading, Point};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn maze(s: &str) -> Maze {
        let mut start = Point::ZERO;
        let mut goal = Point::ZERO;
        let mut rows = Vec::new();
        for (y, line) in s.lines().enumerate() {
            let mut row = Vec::new();
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    'S' => start = p,
                    'E' => goal = p,
                    _ => {}
                }
                row.push(ch == '#');
            }
            rows.push(row);
        }
        Maze::new(rows, start, goal).unwrap()
    }

    fn random_maze(rng: &mut StdRng) -> Maze {
        let w = rng.random_range(2..9);
        let h = rng.random_range(2..9);
        let start = Point::new(rng.random_range(0..w), rng.random_range(0..h));
        let goal = Point::new(rng.random_range(0..w), rng.random_range(0..h));
        let rows: Vec<Vec<bool>> = (0..h)
            .map(|y| {
                (0..w)
                    .map(|x| {
                        let p = Point::new(x, y);
                        p != start && p != goal && rng.random_bool(0.3)
                    })
                    .collect::<Vec<bool>>()
            })
            .collect();
        Maze::new(rows, start, goal).unwrap()
    }

    const EXAMPLE: &str = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############";

    #[test]
    fn example_maze_cost_and_tiles() {
        let m = maze(EXAMPLE);
        let s = MazeSolver::new(&m, CostConfig::DIRECTIONAL);
        assert_eq!(s.min_cost(), Some(7036));
        let oc = s.min_cost_cells().unwrap();
        assert_eq!(oc.cost, 7036);
        assert_eq!(oc.len(), 45);
    }

    #[test]
    fn open_square_with_turn_penalty() {
        let m = Maze::open(5, 5, Point::ZERO, Point::new(4, 4)).unwrap();
        let s = MazeSolver::new(&m, CostConfig::DIRECTIONAL);
        // East along the top row, one turn, south down the right column.
        assert_eq!(s.min_cost(), Some(1008));
        let oc = s.min_cost_cells().unwrap();
        assert_eq!(oc.len(), 9);
        for i in 0..5 {
            assert!(oc.contains(Point::new(i, 0)));
            assert!(oc.contains(Point::new(4, i)));
        }
    }

    #[test]
    fn open_square_without_turn_penalty() {
        let m = Maze::open(5, 5, Point::ZERO, Point::new(4, 4)).unwrap();
        let s = MazeSolver::new(&m, CostConfig::PLAIN);
        assert_eq!(s.min_cost(), Some(8));
        assert_eq!(s.min_cost_cells().unwrap().len(), 25);
    }

    #[test]
    fn initial_heading_changes_the_cost() {
        let m = Maze::open(5, 1, Point::ZERO, Point::new(4, 0)).unwrap();
        let east = MazeSolver::new(&m, CostConfig::DIRECTIONAL);
        let north = MazeSolver::new(
            &m,
            CostConfig::DIRECTIONAL.with_initial_heading(Heading::North),
        );
        assert_eq!(east.min_cost(), Some(4));
        assert_eq!(north.min_cost(), Some(1004));
    }

    #[test]
    fn start_on_goal_costs_nothing() {
        for config in [
            CostConfig::PLAIN,
            CostConfig::DIRECTIONAL,
            CostConfig::PLAIN.with_step(9).with_turn(3),
        ] {
            let m = Maze::open(3, 3, Point::new(1, 2), Point::new(1, 2)).unwrap();
            let s = MazeSolver::new(&m, config);
            assert_eq!(s.min_cost(), Some(0));
            let oc = s.min_cost_cells().unwrap();
            assert_eq!(oc.cost, 0);
            assert_eq!(oc.cells.into_iter().collect::<Vec<_>>(), vec![Point::new(1, 2)]);
        }
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        let m = maze(
            "\
S....
..#..
.#E#.
..#..",
        );
        let s = MazeSolver::new(&m, CostConfig::DIRECTIONAL);
        assert_eq!(s.min_cost(), None);
        assert_eq!(s.min_cost_cells(), None);
        assert_eq!(s.best_path(), None);
    }

    #[test]
    fn both_routes_around_a_pillar_count() {
        let m = maze(
            "\
#######
#.....#
#S###E#
#.....#
#######",
        );
        let s = MazeSolver::new(&m, CostConfig::DIRECTIONAL);
        // Up or down (turn), along (turn), back to the middle row (turn).
        assert_eq!(s.min_cost(), Some(3 * 1001 + 3));
        let oc = s.min_cost_cells().unwrap();
        assert!(oc.contains(Point::new(3, 1)));
        assert!(oc.contains(Point::new(3, 3)));
        assert_eq!(oc.len(), 12);
    }

    #[test]
    fn repeated_queries_agree() {
        let m = maze(EXAMPLE);
        let s = MazeSolver::new(&m, CostConfig::DIRECTIONAL);
        let first = (s.min_cost(), s.min_cost_cells(), s.best_path());
        let second = (s.min_cost(), s.min_cost_cells(), s.best_path());
        assert_eq!(first, second);
    }

    #[test]
    fn plain_cost_matches_bfs() {
        let mut rng = StdRng::seed_from_u64(16);
        for _ in 0..200 {
            let m = random_maze(&mut rng);
            let s = MazeSolver::new(&m, CostConfig::PLAIN);
            let expected = bfs_map(&m, m.start()).at(m.goal()).map(Cost::from);
            assert_eq!(s.min_cost(), expected);
        }
    }

    #[test]
    fn cost_never_drops_as_turns_get_dearer() {
        let mut rng = StdRng::seed_from_u64(18);
        for _ in 0..100 {
            let m = random_maze(&mut rng);
            let reachable = MazeSolver::new(&m, CostConfig::PLAIN).min_cost().is_some();
            let mut last = 0;
            for turn in [0, 1, 5, 50, 1000] {
                let cost = MazeSolver::new(&m, CostConfig::PLAIN.with_turn(turn)).min_cost();
                assert_eq!(cost.is_some(), reachable);
                if let Some(cur) = cost {
                    assert!(cur >= last, "turn {turn}: {cur} < {last}");
                    last = cur;
                }
            }
        }
    }

    #[test]
    fn optimal_cells_form_connected_passable_set() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let m = random_maze(&mut rng);
            let s = MazeSolver::new(&m, CostConfig::DIRECTIONAL);
            let Some(oc) = s.min_cost_cells() else {
                assert_eq!(s.min_cost(), None);
                continue;
            };
            assert_eq!(s.min_cost(), Some(oc.cost));
            assert!(oc.contains(m.start()));
            assert!(oc.contains(m.goal()));
            for &p in &oc.cells {
                assert!(m.is_passable(p));
                if oc.len() > 1 {
                    assert!(oc.cells.iter().any(|&q| q.is_adjacent(p)));
                }
            }
            let path = s.best_path().unwrap();
            assert!(path.iter().all(|st| oc.contains(st.pos)));
        }
    }
}
