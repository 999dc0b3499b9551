use std::collections::BTreeSet;

use super::grid::{Grid, Point};
use crate::games::RandomSource;

pub type Walls = BTreeSet<Point>;

/// Obstacle count for procedurally generated levels. Duplicate draws collapse.
pub const RANDOM_WALL_DRAWS: usize = 30;

/// Level 1 is open, levels 2 to 4 use fixed layouts scaled to the grid,
/// everything beyond draws random interior cells.
pub fn generate_walls(level: u32, grid: &Grid, rng: &mut impl RandomSource) -> Walls {
    let n = grid.size();
    let mut walls = Walls::new();

    match level {
        0 | 1 => {}
        2 => {
            let c = n / 2;
            for i in (c - 3)..(c + 3) {
                walls.insert(Point::new(i, c));
                walls.insert(Point::new(c, i));
            }
        }
        3 => {
            for x in 5..(n - 5) {
                walls.insert(Point::new(x, n / 3));
                walls.insert(Point::new(x, 2 * n / 3));
            }
        }
        4 => {
            for i in 1..(n - 1) {
                walls.insert(Point::new(i, 5));
                walls.insert(Point::new(i, n - 6));
                walls.insert(Point::new(5, i));
                walls.insert(Point::new(n - 6, i));
            }
        }
        _ => {
            for _ in 0..RANDOM_WALL_DRAWS {
                let x = rng.random_range_inclusive(2, n - 3);
                let y = rng.random_range_inclusive(2, n - 3);
                walls.insert(Point::new(x, y));
            }
        }
    }

    walls.retain(|p| grid.in_bounds(*p));
    walls
}
