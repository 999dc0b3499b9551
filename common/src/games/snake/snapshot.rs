use super::grid::Point;

/// Read-only view of a session handed to the renderer after every change.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSnapshot {
    pub grid_size: i32,
    /// Head first.
    pub snake: Vec<Point>,
    pub food: Point,
    pub walls: Vec<Point>,
    pub score: u32,
    pub level: u32,
    pub speed: u32,
    pub best_score: u32,
    pub best_level: u32,
    pub paused: bool,
    pub game_over: bool,
}
