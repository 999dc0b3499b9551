mod collision;
mod error;
mod food;
mod game_state;
mod grid;
mod levels;
mod session;
mod settings;
mod snake;
mod snapshot;
mod types;

pub use error::GameError;
pub use food::place_food;
pub use game_state::SnakeGameState;
pub use grid::{Grid, Point};
pub use levels::{RANDOM_WALL_DRAWS, Walls, generate_walls};
pub use session::SnakeSession;
pub use settings::{DEFAULT_GRID_SIZE, SnakeSessionSettings};
pub use snake::Snake;
pub use snapshot::SnakeSnapshot;
pub use types::{
    DeathReason, Direction, GameEvent, GameOverSummary, InputEvent, SessionOutcome, SessionStatus,
    TickOutcome,
};
