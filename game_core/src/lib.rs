//! Headless simulation core for a single-player Pong game: a human
//! paddle on the right, a delayed-reaction AI opponent on the left, and
//! the menu flow around a first-to-7 match.
//!
//! The embedding shell owns windowing, rendering, input polling and
//! frame pacing. It feeds typed [`InputEvent`]s into
//! [`session::Session::tick`] once per frame and reads the frame's
//! [`GameEvent`]s back out.

pub mod components;
pub mod config;
pub mod geom;
pub mod kinematics;
pub mod reaction;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use geom::Aabb;
pub use resources::*;
pub use session::{Phase, Session};

use hecs::World;

/// Run one fixed tick of an active match over the given world and
/// resources, in the fixed update order: player input, AI steering, ball
/// motion and collisions, then match control. The event queue is cleared
/// first, so it holds exactly this frame's broadcasts afterwards.
pub fn step(
    world: &mut World,
    config: &Config,
    difficulty: Difficulty,
    inputs: &[InputEvent],
    score: &mut Score,
    serve: &mut ServeState,
    rng: &mut GameRng,
    events: &mut Events,
) {
    events.clear();

    systems::apply_player_input(world, inputs);
    systems::drive_opponents(world, config);
    systems::step_ball(world, config, rng, events);
    systems::run_match(world, config, difficulty, score, serve, rng, events);
}

/// Spawn the human paddle on the right side.
pub fn spawn_player(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((
        Paddle::new(
            config.player_spawn(),
            config.paddle_width,
            config.paddle_height,
            config.paddle_speed,
            Side::Right,
        ),
        PlayerControl::new(),
    ))
}

/// Spawn the AI paddle on the left side.
pub fn spawn_opponent(world: &mut World, config: &Config, difficulty: Difficulty) -> hecs::Entity {
    world.spawn((
        Paddle::new(
            config.opponent_spawn(),
            config.paddle_width,
            config.paddle_height,
            config.paddle_speed,
            Side::Left,
        ),
        AiControl::new(difficulty),
    ))
}

/// Spawn the ball parked at screen center with zero velocity; the first
/// serve countdown launches it.
pub fn spawn_ball(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(
        config.ball_center(),
        config.ball_size,
        config.max_bounce_angle,
    ),))
}
