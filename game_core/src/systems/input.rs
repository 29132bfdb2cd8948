//! Human paddle control.

use hecs::World;

use crate::components::{MoveDir, Paddle, PlayerControl};
use crate::resources::{InputEvent, Key};

/// Ingest this frame's key events and move the human paddle.
///
/// Holding both keys repeats whichever direction was most recently held
/// on its own (a sticky tie-break, instead of freezing); releasing both
/// keys clears that memory. The paddle is deliberately not clamped to the
/// arena here.
pub fn apply_player_input(world: &mut World, inputs: &[InputEvent]) {
    for (_entity, (paddle, control)) in world.query_mut::<(&mut Paddle, &mut PlayerControl)>() {
        for input in inputs {
            match input {
                InputEvent::KeyDown(Key::MoveUp) => control.up_held = true,
                InputEvent::KeyDown(Key::MoveDown) => control.down_held = true,
                InputEvent::KeyUp(Key::MoveUp) => control.up_held = false,
                InputEvent::KeyUp(Key::MoveDown) => control.down_held = false,
                _ => {}
            }
        }

        match (control.up_held, control.down_held) {
            (true, true) => match control.last_sole_dir {
                Some(MoveDir::Up) => paddle.move_up(),
                Some(MoveDir::Down) => paddle.move_down(),
                None => {}
            },
            (true, false) => {
                paddle.move_up();
                control.last_sole_dir = Some(MoveDir::Up);
            }
            (false, true) => {
                paddle.move_down();
                control.last_sole_dir = Some(MoveDir::Down);
            }
            (false, false) => control.last_sole_dir = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Side;
    use glam::Vec2;

    fn spawn_player(world: &mut World) -> hecs::Entity {
        world.spawn((
            Paddle::new(Vec2::new(605.0, 200.0), 15.0, 80.0, 5.0, Side::Right),
            PlayerControl::new(),
        ))
    }

    fn paddle_y(world: &World, entity: hecs::Entity) -> f32 {
        world.get::<&Paddle>(entity).unwrap().pos.y
    }

    #[test]
    fn test_single_key_moves_and_repeats() {
        let mut world = World::new();
        let entity = spawn_player(&mut world);

        apply_player_input(&mut world, &[InputEvent::KeyDown(Key::MoveUp)]);
        assert_eq!(paddle_y(&world, entity), 195.0);
        // Key stays held; no new events.
        apply_player_input(&mut world, &[]);
        assert_eq!(paddle_y(&world, entity), 190.0);
    }

    #[test]
    fn test_both_held_repeats_last_sole_direction() {
        let mut world = World::new();
        let entity = spawn_player(&mut world);

        // Down first, then up joins: up was the most recent sole direction.
        apply_player_input(&mut world, &[InputEvent::KeyDown(Key::MoveDown)]);
        assert_eq!(paddle_y(&world, entity), 205.0);
        apply_player_input(&mut world, &[InputEvent::KeyUp(Key::MoveDown)]);
        apply_player_input(&mut world, &[InputEvent::KeyDown(Key::MoveUp)]);
        assert_eq!(paddle_y(&world, entity), 200.0);
        apply_player_input(&mut world, &[InputEvent::KeyDown(Key::MoveDown)]);
        // Both held now: keeps moving up.
        assert_eq!(paddle_y(&world, entity), 195.0);
        apply_player_input(&mut world, &[]);
        assert_eq!(paddle_y(&world, entity), 190.0);
    }

    #[test]
    fn test_releasing_both_clears_sticky_memory() {
        let mut world = World::new();
        let entity = spawn_player(&mut world);

        apply_player_input(&mut world, &[InputEvent::KeyDown(Key::MoveUp)]);
        apply_player_input(
            &mut world,
            &[InputEvent::KeyUp(Key::MoveUp)],
        );
        let y = paddle_y(&world, entity);

        // Press both in the same frame: no remembered sole direction, so
        // the paddle freezes.
        apply_player_input(
            &mut world,
            &[
                InputEvent::KeyDown(Key::MoveUp),
                InputEvent::KeyDown(Key::MoveDown),
            ],
        );
        assert_eq!(paddle_y(&world, entity), y);
    }

    #[test]
    fn test_no_keys_no_motion() {
        let mut world = World::new();
        let entity = spawn_player(&mut world);
        apply_player_input(&mut world, &[]);
        assert_eq!(paddle_y(&world, entity), 200.0);
    }
}
