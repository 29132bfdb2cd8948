use std::f32::consts::PI;

use glam::Vec2;

/// Fixed tuning parameters. All speeds are pixels per tick; the
/// simulation runs one discrete update per frame at the target rate.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (VGA, y grows downward, positions are top-left corners)
    pub const ARENA_WIDTH: f32 = 640.0;
    pub const ARENA_HEIGHT: f32 = 480.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_SPEED: f32 = 5.0;

    // Ball (a square)
    pub const BALL_SIZE: f32 = 16.0;
    /// Max angle off the horizontal after a paddle bounce.
    pub const MAX_BOUNCE_ANGLE: f32 = PI / 5.0;

    // Match
    pub const SCORE_LIMIT: u8 = 7;
    /// Ticks between a point and the next serve (2 s at 60 fps).
    pub const SERVE_DELAY_TICKS: u32 = 120;
}

/// AI difficulty tier, selectable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// Reaction lag of the opponent, in ticks.
    pub fn reaction_ticks(self) -> usize {
        match self {
            Difficulty::Easy => 14,
            Difficulty::Normal => 8,
            Difficulty::Hard => 3,
        }
    }

    /// Ball speed on serve.
    pub fn serve_speed(self) -> f32 {
        match self {
            Difficulty::Easy => 10.0,
            Difficulty::Normal => 12.0,
            Difficulty::Hard => 14.0,
        }
    }

    /// Max angle off the horizontal on a serve.
    pub fn serve_cone(self) -> f32 {
        match self {
            Difficulty::Easy => PI / 36.0,
            Difficulty::Normal => PI / 18.0,
            Difficulty::Hard => PI / 12.0,
        }
    }
}

/// Game configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_size: f32,
    pub max_bounce_angle: f32,
    pub score_limit: u8,
    pub serve_delay_ticks: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            score_limit: Params::SCORE_LIMIT,
            serve_delay_ticks: Params::SERVE_DELAY_TICKS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn position for the human paddle (right side).
    pub fn player_spawn(&self) -> Vec2 {
        Vec2::new(self.arena_width - self.paddle_width - 20.0, 200.0)
    }

    /// Spawn position for the AI paddle (left side).
    pub fn opponent_spawn(&self) -> Vec2 {
        Vec2::new(self.paddle_width, 200.0)
    }

    /// Top-left corner that centers the ball on screen.
    pub fn ball_center(&self) -> Vec2 {
        Vec2::new(
            self.arena_width / 2.0 - self.ball_size / 2.0,
            self.arena_height / 2.0 - self.ball_size / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawns_at_arena_edges() {
        let config = Config::new();
        assert_eq!(config.player_spawn().x, 605.0);
        assert_eq!(config.opponent_spawn().x, 15.0);
        assert!(config.player_spawn().x + config.paddle_width < config.arena_width);
    }

    #[test]
    fn test_ball_center() {
        let config = Config::new();
        let center = config.ball_center();
        assert_eq!(center.x, 312.0);
        assert_eq!(center.y, 232.0);
    }

    #[test]
    fn test_difficulty_presets() {
        assert_eq!(Difficulty::Easy.reaction_ticks(), 14);
        assert_eq!(Difficulty::Normal.reaction_ticks(), 8);
        assert_eq!(Difficulty::Hard.reaction_ticks(), 3);
        assert!(Difficulty::Easy.serve_speed() < Difficulty::Hard.serve_speed());
        assert!(Difficulty::Easy.serve_cone() < Difficulty::Hard.serve_cone());
    }
}
