//! Ball motion and collision resolution.

use std::f32::consts::PI;

use hecs::World;

use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::geom::Aabb;
use crate::kinematics;
use crate::resources::{Events, GameEvent, GameRng};

/// Advance the ball by one tick: derive speed components, predict the
/// next position, resolve wall and paddle bounces against that
/// prediction, then move with the (possibly just-changed) components.
pub fn step_ball(world: &mut World, config: &Config, rng: &mut GameRng, events: &mut Events) {
    let paddle_rects: Vec<Aabb> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| p.rect())
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let mut speed = ball.speed_components();

        // Predicted next position; vertical sign flipped because screen
        // y grows downward while the direction angle is mathematical.
        let next_x = ball.pos.x + speed.x;
        let next_y = ball.pos.y - speed.y;

        // Wall bounce: reflect vertically and recover the direction from
        // the new component pair.
        if next_y < 0.0 || next_y > config.arena_height - ball.size {
            speed.y = -speed.y;
            ball.direction = kinematics::direction_from_components(speed.x, speed.y);
        }

        // Paddle bounce: AABB test of the predicted ball box against each
        // paddle's current box. The direction flip moves the predicted
        // position off the paddle before the next tick, so no extra
        // de-duplication state is needed.
        let next_box = ball.rect_at(glam::Vec2::new(next_x, next_y));
        for rect in &paddle_rects {
            if next_box.overlaps(rect) {
                let base = if speed.x < 0.0 { 0.0 } else { PI };
                ball.deflect_random(base, ball.max_bounce_angle, rng);
                speed = ball.speed_components();
                events.post(GameEvent::PaddleHit);
            }
        }

        ball.pos.x += speed.x;
        ball.pos.y -= speed.y;
    }
}
