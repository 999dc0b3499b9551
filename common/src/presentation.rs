//! Render descriptions derived from a snapshot and elapsed time. Nothing here
//! touches session state or blocks; the renderer just paints what it gets.

use std::time::Duration;

use crate::games::snake::{Point, SnakeSnapshot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

pub mod palette {
    use super::Rgba;

    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const GREEN: Rgba = Rgba::rgb(0, 200, 0);
    pub const RED: Rgba = Rgba::rgb(255, 60, 60);
    pub const GRAY: Rgba = Rgba::rgb(40, 40, 40);
    pub const YELLOW: Rgba = Rgba::rgb(250, 250, 50);
    pub const BLUE: Rgba = Rgba::rgb(0, 150, 255);
    pub const ORANGE: Rgba = Rgba::rgb(255, 160, 50);
}

pub const LEVEL_UP_BANNER_DURATION: Duration = Duration::from_millis(1200);
pub const LEVEL_UP_FLASH_PERIOD: Duration = Duration::from_millis(180);

pub const FADE_FRAME_INTERVAL: Duration = Duration::from_millis(33);
pub const FADE_ALPHA_STEP: u8 = 10;
/// 255, 245, ... 5
pub const FADE_FRAMES: u32 = 26;
pub const FADE_HOLD: Duration = Duration::from_millis(350);

pub const PAUSE_OVERLAY_ALPHA: u8 = 160;
pub const GAME_OVER_OVERLAY_ALPHA: u8 = 200;

pub const PAUSE_TITLE: &str = "PAUSED";
pub const PAUSE_HINT: &str = "Press P to resume";
pub const GAME_OVER_TITLE: &str = "GAME OVER";
pub const GAME_OVER_HINT: &str = "Press R to Restart or Q for Menu";

pub fn animation_time(elapsed: Duration) -> f32 {
    elapsed.as_millis() as f32 / 500.0
}

pub fn food_color(t: f32) -> Rgba {
    let glow = (80.0 * (1.0 + (t * 3.0).sin()) / 2.0) as u8;
    Rgba::rgb(255, 80 + glow, 80)
}

/// Index 0 is the head.
pub fn snake_segment_color(index: usize, t: f32) -> Rgba {
    let phase = t * 6.0 + index as f32 * 0.5;
    let pulse = (40.0 * (1.0 + phase.sin()) / 2.0) as i32;
    if index == 0 {
        let g = (palette::YELLOW.g as i32 + pulse).min(255);
        Rgba::rgb(palette::YELLOW.r, g as u8, 60)
    } else {
        let g = (200 - index as i32 * 4 - pulse).max(20);
        Rgba::rgb(0, g as u8, 0)
    }
}

pub fn wall_color(index: usize, t: f32) -> Rgba {
    let shimmer = (30.0 * (1.0 + (t * 2.0 + index as f32).sin())) as u8;
    Rgba::rgb(0, 120 + shimmer, 200)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellPaint {
    pub cell: Point,
    pub color: Rgba,
}

/// Food, then snake, then walls. Later entries paint over earlier ones.
pub fn paint_board(snapshot: &SnakeSnapshot, t: f32) -> Vec<CellPaint> {
    let mut cells = Vec::with_capacity(1 + snapshot.snake.len() + snapshot.walls.len());
    cells.push(CellPaint {
        cell: snapshot.food,
        color: food_color(t),
    });
    cells.extend(snapshot.snake.iter().enumerate().map(|(i, &cell)| CellPaint {
        cell,
        color: snake_segment_color(i, t),
    }));
    cells.extend(snapshot.walls.iter().enumerate().map(|(i, &cell)| CellPaint {
        cell,
        color: wall_color(i, t),
    }));
    cells
}

/// Static colors for the game-over fade, with the snake layer at `snake_alpha`.
pub fn paint_fading_board(snapshot: &SnakeSnapshot, snake_alpha: u8) -> Vec<CellPaint> {
    let mut cells: Vec<CellPaint> = snapshot
        .walls
        .iter()
        .map(|&cell| CellPaint {
            cell,
            color: palette::BLUE,
        })
        .collect();
    cells.push(CellPaint {
        cell: snapshot.food,
        color: Rgba::rgb(255, 100, 100),
    });
    cells.extend(snapshot.snake.iter().enumerate().map(|(i, &cell)| {
        let color = if i == 0 {
            Rgba::rgb(palette::YELLOW.r, palette::YELLOW.g, 50)
        } else {
            palette::GREEN
        };
        CellPaint {
            cell,
            color: color.with_alpha(snake_alpha),
        }
    }));
    cells
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub text: String,
    pub color: Rgba,
}

/// `None` once the banner has run its course.
pub fn level_up_banner(level: u32, elapsed: Duration) -> Option<Banner> {
    if elapsed >= LEVEL_UP_BANNER_DURATION {
        return None;
    }
    let flash = elapsed.as_millis() / LEVEL_UP_FLASH_PERIOD.as_millis();
    let color = if flash % 2 == 0 {
        palette::ORANGE
    } else {
        palette::WHITE
    };
    Some(Banner {
        text: format!("LEVEL {}!", level),
        color,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverFade {
    /// Snake layer alpha and the black dimming overlay alpha.
    Fading { snake_alpha: u8, dim_alpha: u8 },
    Finished,
}

pub fn game_over_fade_duration() -> Duration {
    FADE_FRAME_INTERVAL * FADE_FRAMES + FADE_HOLD
}

/// The last fade frame stays on screen through the hold.
pub fn game_over_fade(elapsed: Duration) -> GameOverFade {
    if elapsed >= game_over_fade_duration() {
        return GameOverFade::Finished;
    }
    let frame = (elapsed.as_millis() / FADE_FRAME_INTERVAL.as_millis()).min(FADE_FRAMES as u128 - 1);
    let snake_alpha = 255 - frame as u8 * FADE_ALPHA_STEP;
    GameOverFade::Fading {
        snake_alpha,
        dim_alpha: (255 - snake_alpha) / 4,
    }
}

pub fn hud_lines(snapshot: &SnakeSnapshot) -> [String; 2] {
    [
        format!("Score: {}  Level: {}", snapshot.score, snapshot.level),
        format!(
            "High Score: {} (Level {})",
            snapshot.best_score, snapshot.best_level
        ),
    ]
}

pub fn game_over_result_line(snapshot: &SnakeSnapshot) -> String {
    format!("Score: {}   Level: {}", snapshot.score, snapshot.level)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> SnakeSnapshot {
        SnakeSnapshot {
            grid_size: 30,
            snake: vec![Point::new(15, 15), Point::new(14, 15), Point::new(13, 15)],
            food: Point::new(3, 4),
            walls: vec![Point::new(12, 15), Point::new(15, 12)],
            score: 7,
            level: 2,
            speed: 13,
            best_score: 11,
            best_level: 3,
            paused: false,
            game_over: false,
        }
    }

    #[test]
    fn test_colors_at_time_zero() {
        assert_eq!(food_color(0.0), Rgba::rgb(255, 120, 80));
        assert_eq!(snake_segment_color(0, 0.0), Rgba::rgb(250, 255, 60));
        assert_eq!(snake_segment_color(1, 0.0), Rgba::rgb(0, 167, 0));
        assert_eq!(wall_color(0, 0.0), Rgba::rgb(0, 150, 200));
    }

    #[test]
    fn test_long_body_bottoms_out() {
        for t in [0.0, 0.3, 1.7, 5.2] {
            assert_eq!(snake_segment_color(60, t).g, 20);
        }
    }

    #[test]
    fn test_color_ranges_hold_over_time() {
        for step in 0..200 {
            let t = animation_time(Duration::from_millis(step * 37));
            let food = food_color(t);
            assert!((80..=160).contains(&food.g));
            let wall = wall_color(step as usize, t);
            assert!((120..=180).contains(&wall.g));
            assert!(snake_segment_color(0, t).g >= 250);
        }
    }

    #[test]
    fn test_paint_board_order() {
        let cells = paint_board(&snapshot(), 0.0);
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0].cell, Point::new(3, 4));
        assert_eq!(cells[1].cell, Point::new(15, 15));
        assert_eq!(cells[5].cell, Point::new(15, 12));
    }

    #[test]
    fn test_fading_board_only_fades_snake() {
        let cells = paint_fading_board(&snapshot(), 45);
        for paint in &cells {
            if snapshot().snake.contains(&paint.cell) {
                assert_eq!(paint.color.a, 45);
            } else {
                assert_eq!(paint.color.a, 255);
            }
        }
    }

    #[test]
    fn test_level_up_banner_flashes_then_ends() {
        let first = level_up_banner(3, Duration::ZERO).unwrap();
        assert_eq!(first.text, "LEVEL 3!");
        assert_eq!(first.color, palette::ORANGE);
        assert_eq!(level_up_banner(3, Duration::from_millis(200)).unwrap().color, palette::WHITE);
        assert_eq!(level_up_banner(3, Duration::from_millis(400)).unwrap().color, palette::ORANGE);
        assert_eq!(level_up_banner(3, LEVEL_UP_BANNER_DURATION), None);
    }

    #[test]
    fn test_fade_sequence() {
        assert_eq!(
            game_over_fade(Duration::ZERO),
            GameOverFade::Fading { snake_alpha: 255, dim_alpha: 0 }
        );
        assert_eq!(
            game_over_fade(Duration::from_millis(70)),
            GameOverFade::Fading { snake_alpha: 235, dim_alpha: 5 }
        );
        // last frame is held
        let last = GameOverFade::Fading { snake_alpha: 5, dim_alpha: 62 };
        assert_eq!(game_over_fade(Duration::from_millis(860)), last);
        assert_eq!(game_over_fade(Duration::from_millis(1200)), last);
        assert_eq!(game_over_fade(game_over_fade_duration()), GameOverFade::Finished);
        assert_eq!(game_over_fade_duration(), Duration::from_millis(1208));
    }

    #[test]
    fn test_text_lines() {
        let s = snapshot();
        assert_eq!(
            hud_lines(&s),
            ["Score: 7  Level: 2".to_string(), "High Score: 11 (Level 3)".to_string()]
        );
        assert_eq!(game_over_result_line(&s), "Score: 7   Level: 2");
    }
}
