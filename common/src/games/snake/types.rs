#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit vector in grid coordinates; y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    /// Head left the grid.
    BoundaryCollision,
    /// Head entered a level obstacle.
    WallCollision,
    SelfCollision,
    /// No free cell was left for food.
    GridFull,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOverSummary {
    pub reason: DeathReason,
    pub score: u32,
    pub level: u32,
    pub new_best: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing advanced.
    Skipped,
    Moved,
    Ate { level_up: bool },
    GameOver(GameOverSummary),
}

/// Notifications for audio and presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    LevelUp { level: u32 },
    GameOver(GameOverSummary),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    TogglePause,
    ToggleAudio,
    Restart,
    ReturnToMenu,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Restart,
    Menu,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites_are_symmetric() {
        for direction in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            assert!(direction.is_opposite(&direction.opposite()));
            assert!(direction.opposite().is_opposite(&direction));
            assert!(!direction.is_opposite(&direction));
        }
    }

    #[test]
    fn test_opposite_deltas_cancel() {
        for direction in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            let (dx, dy) = direction.delta();
            let (ox, oy) = direction.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }
}
