#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    GridFull { occupied: usize, capacity: usize },
    InvalidSettings(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::GridFull { occupied, capacity } => {
                write!(f, "No free cell left: {} of {} cells occupied", occupied, capacity)
            }
            GameError::InvalidSettings(e) => write!(f, "Invalid session settings: {}", e),
        }
    }
}

impl std::error::Error for GameError {}
