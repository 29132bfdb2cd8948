//! AI opponent steering.

use hecs::World;

use crate::components::{AiControl, Ball, Paddle};
use crate::config::{Config, Difficulty};

/// Drive every AI paddle for one tick.
///
/// The live ball position is recorded into the paddle's reaction buffer
/// every tick; steering only ever looks at the sample from `lag` ticks
/// ago, and only while the ball is in play and a full lag window has
/// accumulated, so the AI is decision-blind for the first `lag` ticks of
/// each rally.
pub fn drive_opponents(world: &mut World, config: &Config) {
    // Snapshot the ball before borrowing paddles mutably.
    let ball = {
        let mut query = world.query::<&Ball>();
        query
            .iter()
            .next()
            .map(|(_e, b)| (b.pos, b.direction, b.is_in_play(config.arena_width)))
    };
    let Some((ball_pos, ball_direction, in_play)) = ball else {
        return;
    };

    for (_entity, (paddle, control)) in world.query_mut::<(&mut Paddle, &mut AiControl)>() {
        let lag = control.difficulty.reaction_ticks();
        control.memory.record(ball_pos, lag);

        if !in_play {
            continue;
        }
        let Some(delayed) = control.memory.recall(lag) else {
            continue;
        };

        // Hard plays a defensive return: once the ball is heading away
        // from this (left-side) paddle, fall back toward mid-screen
        // instead of chasing the delayed position.
        if control.difficulty == Difficulty::Hard && ball_direction.cos() > 0.0 {
            seek_center(paddle, config.arena_height / 2.0);
        } else {
            track_target(paddle, delayed.y, config.arena_height);
        }
    }
}

/// Move one speed step toward the target y, with a dead-zone the size of
/// the paddle's own step to stop it jittering on target, and never moving
/// past the arena's vertical bounds.
fn track_target(paddle: &mut Paddle, target_y: f32, arena_height: f32) {
    let center = paddle.center_y();
    let rect = paddle.rect();
    if center < target_y - paddle.speed && rect.max.y < arena_height {
        paddle.move_down();
    } else if center > target_y + paddle.speed && rect.min.y > 0.0 {
        paddle.move_up();
    }
}

/// Drift toward mid-screen under the same speed-sized dead-zone.
fn seek_center(paddle: &mut Paddle, mid_y: f32) {
    let center = paddle.center_y();
    if center < mid_y - paddle.speed {
        paddle.move_down();
    } else if center > mid_y + paddle.speed {
        paddle.move_up();
    }
}
