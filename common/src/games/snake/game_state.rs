use std::time::Duration;

use crate::config::Validate;
use crate::games::RandomSource;
use crate::high_score::HighScoreRecord;
use crate::log_warn;
use super::collision::{self, Outcome};
use super::error::GameError;
use super::food::place_food;
use super::grid::{Grid, Point};
use super::levels::{Walls, generate_walls};
use super::settings::SnakeSessionSettings;
use super::snake::Snake;
use super::snapshot::SnakeSnapshot;
use super::types::{DeathReason, Direction, GameOverSummary, SessionStatus, TickOutcome};

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    grid: Grid,
    settings: SnakeSessionSettings,
    snake: Snake,
    food: Point,
    walls: Walls,
    score: u32,
    level: u32,
    speed: u32,
    status: SessionStatus,
    /// Set once a direction was accepted; cleared by the next step.
    direction_latched: bool,
    best: HighScoreRecord,
    summary: Option<GameOverSummary>,
}

impl SnakeGameState {
    pub fn new(
        settings: SnakeSessionSettings,
        best: HighScoreRecord,
        rng: &mut impl RandomSource,
    ) -> Result<Self, GameError> {
        settings.validate().map_err(GameError::InvalidSettings)?;

        let grid = Grid::new(settings.grid_size);
        let snake = Snake::new(grid.center(), Direction::Right, settings.initial_length);
        let level = 1;
        let walls = generate_walls(level, &grid, rng);
        let food = place_food(&grid, |p| snake.contains(p) || walls.contains(p), rng)?;
        let speed = settings.initial_speed;

        Ok(Self {
            grid,
            settings,
            snake,
            food,
            walls,
            score: 0,
            level,
            speed,
            status: SessionStatus::Running,
            direction_latched: false,
            best,
            summary: None,
        })
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn best(&self) -> HighScoreRecord {
        self.best
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    pub fn summary(&self) -> Option<GameOverSummary> {
        self.summary
    }

    /// Accepts at most one turn per step. Reversals are dropped without
    /// using up the step's turn; turns are ignored unless running.
    pub fn propose_direction(&mut self, direction: Direction) -> bool {
        if self.status != SessionStatus::Running || self.direction_latched {
            return false;
        }
        if self.snake.set_direction(direction) {
            self.direction_latched = true;
            return true;
        }
        false
    }

    pub fn toggle_pause(&mut self) -> SessionStatus {
        self.status = match self.status {
            SessionStatus::Running => SessionStatus::Paused,
            SessionStatus::Paused => SessionStatus::Running,
            SessionStatus::GameOver => SessionStatus::GameOver,
        };
        self.status
    }

    pub fn tick(&mut self, rng: &mut impl RandomSource) -> TickOutcome {
        if self.status != SessionStatus::Running {
            return TickOutcome::Skipped;
        }
        self.direction_latched = false;

        let new_head = self.snake.next_head();
        if let Outcome::Collide(reason) =
            collision::resolve(new_head, &self.snake, &self.walls, &self.grid)
        {
            return TickOutcome::GameOver(self.finish(reason));
        }

        self.snake.push_head(new_head);
        if new_head != self.food {
            self.snake.pop_tail();
            return TickOutcome::Moved;
        }

        self.score += 1;
        let level_up = self.score % self.settings.level_up_every == 0;
        if level_up {
            self.level += 1;
            self.speed += self.settings.speed_step;
            let snake = &self.snake;
            self.walls = generate_walls(self.level, &self.grid, rng);
            self.walls.retain(|p| !snake.contains(p));
        }

        let (snake, walls) = (&self.snake, &self.walls);
        match place_food(&self.grid, |p| snake.contains(p) || walls.contains(p), rng) {
            Ok(food) => {
                self.food = food;
                TickOutcome::Ate { level_up }
            }
            Err(e) => {
                log_warn!("Ending session: {}", e);
                TickOutcome::GameOver(self.finish(DeathReason::GridFull))
            }
        }
    }

    fn finish(&mut self, reason: DeathReason) -> GameOverSummary {
        self.status = SessionStatus::GameOver;
        let new_best = self.best.is_beaten_by(self.score);
        if new_best {
            self.best = HighScoreRecord::new(self.score, self.level);
        }
        let summary = GameOverSummary {
            reason,
            score: self.score,
            level: self.level,
            new_best,
        };
        self.summary = Some(summary);
        summary
    }

    pub fn tick_interval(&self) -> Duration {
        match self.status {
            SessionStatus::Running => SnakeSessionSettings::tick_interval_for(self.speed),
            SessionStatus::Paused | SessionStatus::GameOver => {
                SnakeSessionSettings::tick_interval_for(self.settings.paused_tick_rate)
            }
        }
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            grid_size: self.grid.size(),
            snake: self.snake.segments().copied().collect(),
            food: self.food,
            walls: self.walls.iter().copied().collect(),
            score: self.score,
            level: self.level,
            speed: self.speed,
            best_score: self.best.score,
            best_level: self.best.level,
            paused: self.status == SessionStatus::Paused,
            game_over: self.status == SessionStatus::GameOver,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Point) {
        self.food = food;
    }

    #[cfg(test)]
    pub(crate) fn set_walls(&mut self, walls: Walls) {
        self.walls = walls;
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
