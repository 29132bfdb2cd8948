use glam::Vec2;
use rand::Rng;

use crate::config::Difficulty;
use crate::geom::Aabb;
use crate::kinematics;
use crate::reaction::ReactionBuffer;
use crate::resources::GameRng;

/// Which side of the arena an entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The AI opponent.
    Left,
    /// The human player.
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component. Position is the top-left corner in screen pixels.
///
/// `move_up`/`move_down` never clamp to the arena: bounds checking is the
/// caller's responsibility (the AI gates its own moves, the human paddle
/// is free to leave the arena vertically).
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub side: Side,
}

impl Paddle {
    pub fn new(pos: Vec2, width: f32, height: f32, speed: f32, side: Side) -> Self {
        Self {
            pos,
            width,
            height,
            speed,
            side,
        }
    }

    /// One fixed speed step toward the top of the screen.
    pub fn move_up(&mut self) {
        self.pos.y -= self.speed;
    }

    /// One fixed speed step toward the bottom of the screen.
    pub fn move_down(&mut self) {
        self.pos.y += self.speed;
    }

    /// Absolute teleport, used at spawn only.
    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_top_left(self.pos, Vec2::new(self.width, self.height))
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }
}

/// Vertical movement direction of the human paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDir {
    Up,
    Down,
}

/// Key-held state for the human paddle.
///
/// When both keys are held, movement repeats whichever direction was most
/// recently the *sole* held direction instead of freezing; releasing both
/// keys clears that memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerControl {
    pub up_held: bool,
    pub down_held: bool,
    pub last_sole_dir: Option<MoveDir>,
}

impl PlayerControl {
    pub fn new() -> Self {
        Self::default()
    }
}

/// AI opponent state: a difficulty tier and the delayed-position memory.
#[derive(Debug, Clone)]
pub struct AiControl {
    pub difficulty: Difficulty,
    pub memory: ReactionBuffer,
}

impl AiControl {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            memory: ReactionBuffer::new(),
        }
    }
}

/// The ball: a square whose motion is stored as a scalar velocity plus a
/// direction angle in radians (0 = rightward, counter-clockwise positive).
///
/// Speed components are always derived from velocity + direction at the
/// point of use, never stored, so they can never drift out of sync.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub velocity: f32,
    pub direction: f32,
    pub size: f32,
    pub max_bounce_angle: f32,
}

impl Ball {
    pub fn new(pos: Vec2, size: f32, max_bounce_angle: f32) -> Self {
        Self {
            pos,
            velocity: 0.0,
            direction: 0.0,
            size,
            max_bounce_angle,
        }
    }

    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn set_velocity(&mut self, velocity: f32) {
        self.velocity = velocity;
    }

    pub fn set_direction(&mut self, direction: f32) {
        self.direction = direction;
    }

    /// Horizontal/vertical speed derived from the current velocity and
    /// direction.
    pub fn speed_components(&self) -> Vec2 {
        kinematics::speed_components(self.velocity, self.direction)
    }

    /// Re-aim to `base` plus a uniform offset within `+-cone` radians.
    pub fn deflect_random(&mut self, base: f32, cone: f32, rng: &mut GameRng) {
        let offset = rng.0.gen_range(0.0..cone * 2.0);
        self.direction = base + cone - offset;
    }

    /// Strictly inside the arena horizontally. Gates both AI tracking and
    /// point detection.
    pub fn is_in_play(&self, arena_width: f32) -> bool {
        self.pos.x > 0.0 && self.pos.x < arena_width
    }

    pub fn rect_at(&self, pos: Vec2) -> Aabb {
        Aabb::from_top_left(pos, Vec2::splat(self.size))
    }
}
