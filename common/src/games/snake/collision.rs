use super::grid::{Grid, Point};
use super::levels::Walls;
use super::snake::Snake;
use super::types::DeathReason;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Collide(DeathReason),
}

/// Checked against the body before the move, so the current tail still counts
/// as occupied even on a tick where it would vacate.
pub fn resolve(new_head: Point, snake: &Snake, walls: &Walls, grid: &Grid) -> Outcome {
    if !grid.in_bounds(new_head) {
        Outcome::Collide(DeathReason::BoundaryCollision)
    } else if snake.contains(&new_head) {
        Outcome::Collide(DeathReason::SelfCollision)
    } else if walls.contains(&new_head) {
        Outcome::Collide(DeathReason::WallCollision)
    } else {
        Outcome::Continue
    }
}
