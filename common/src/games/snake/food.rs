use super::error::GameError;
use super::grid::{Grid, Point};
use crate::games::RandomSource;

const REJECTION_ATTEMPTS_PER_CELL: usize = 4;

/// Draws uniformly until a free cell turns up. After `N² * 4` misses it falls back
/// to picking among the enumerated free cells, and fails only when none remain.
pub fn place_food(
    grid: &Grid,
    is_occupied: impl Fn(&Point) -> bool,
    rng: &mut impl RandomSource,
) -> Result<Point, GameError> {
    let max = grid.size() - 1;
    for _ in 0..grid.cell_count() * REJECTION_ATTEMPTS_PER_CELL {
        let candidate = Point::new(
            rng.random_range_inclusive(0, max),
            rng.random_range_inclusive(0, max),
        );
        if !is_occupied(&candidate) {
            return Ok(candidate);
        }
    }

    let free: Vec<Point> = grid.cells().filter(|p| !is_occupied(p)).collect();
    if free.is_empty() {
        return Err(GameError::GridFull {
            occupied: grid.cell_count(),
            capacity: grid.cell_count(),
        });
    }
    Ok(free[rng.pick_index(free.len())])
}
