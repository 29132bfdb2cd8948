//! Match control: point detection, serve restarts, and the win check.

use std::f32::consts::PI;

use hecs::World;
use rand::Rng;

use crate::components::{Ball, Side};
use crate::config::{Config, Difficulty};
use crate::resources::{Events, GameEvent, GameRng, MatchOutcome, Score, ServeState};

/// One tick of match control.
///
/// A ball that crossed a side boundary scores for the side it exited
/// *away from* (the rule is screen-side-relative, not paddle-relative):
/// out past the left edge is the right-side player's point, and vice
/// versa. The ball is then parked at center with zero velocity until the
/// serve countdown relaunches it.
pub fn run_match(
    world: &mut World,
    config: &Config,
    difficulty: Difficulty,
    score: &mut Score,
    serve: &mut ServeState,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let launch = serve.tick();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !ball.is_in_play(config.arena_width) {
            let scorer = if ball.pos.x < 0.0 {
                Some(Side::Right)
            } else if ball.pos.x > config.arena_width {
                Some(Side::Left)
            } else {
                None
            };

            if let Some(side) = scorer {
                score.award_point(side);
                events.post(GameEvent::PointScored(side));
                log::debug!(
                    "point to {side:?}, score {}-{}",
                    score.player,
                    score.opponent
                );
            }

            ball.set_velocity(0.0);
            ball.set_position(config.ball_center());
            serve.arm(config.serve_delay_ticks);

            // Scores only change on this tick, so the match-end broadcast
            // can fire at most once per match.
            if scorer.is_some() {
                if let Some(winner) = score.winner(config.score_limit) {
                    let outcome = match winner {
                        Side::Right => MatchOutcome::Won,
                        Side::Left => MatchOutcome::Lost,
                    };
                    events.post(GameEvent::MatchEnded(outcome));
                    log::info!("match over: {}", outcome.message());
                }
            }
        }

        if launch {
            let base = if rng.0.gen_bool(0.5) { 0.0 } else { PI };
            ball.deflect_random(base, difficulty.serve_cone(), rng);
            ball.set_velocity(difficulty.serve_speed());
            events.post(GameEvent::ServeLaunched);
        }
    }
}
