//! Per-match resources: score, RNG, serve countdown, and the frame event
//! queue.

use crate::components::Side;

/// Match score. Points only ever increment by exactly one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub player: u8,
    pub opponent: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award_point(&mut self, side: Side) {
        match side {
            Side::Right => self.player += 1,
            Side::Left => self.opponent += 1,
        }
    }

    /// First side to reach the limit *exactly* wins. Checked only on the
    /// tick a point is awarded, so it can report a winner at most once
    /// per match.
    pub fn winner(&self, limit: u8) -> Option<Side> {
        if self.player == limit {
            Some(Side::Right)
        } else if self.opponent == limit {
            Some(Side::Left)
        } else {
            None
        }
    }
}

/// Seedable random number generator, so serves and bounce cones are
/// reproducible in tests.
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// One-shot countdown between a point and the next serve. Armed when a
/// point ends, polled each tick, disarmed when it fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServeState {
    remaining: Option<u32>,
}

impl ServeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, delay_ticks: u32) {
        self.remaining = Some(delay_ticks);
    }

    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance the countdown by one tick. Returns true on the single tick
    /// the timer elapses.
    pub fn tick(&mut self) -> bool {
        match self.remaining.take() {
            None => false,
            Some(0) | Some(1) => true,
            Some(n) => {
                self.remaining = Some(n - 1);
                false
            }
        }
    }
}

/// How the match ended, from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Won,
    Lost,
}

impl MatchOutcome {
    pub fn message(self) -> &'static str {
        match self {
            MatchOutcome::Won => "You Won!",
            MatchOutcome::Lost => "You Lost :(",
        }
    }
}

/// Signals broadcast during a tick. Any system may post one; the session
/// and the embedding shell read the queue after the tick, and it is
/// cleared at the start of the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The ball bounced off a paddle (cosmetic feedback only).
    PaddleHit,
    /// The serve countdown elapsed and the ball was relaunched.
    ServeLaunched,
    /// A point was awarded to this side.
    PointScored(Side),
    /// The match is over; the session tears the match down on seeing this.
    MatchEnded(MatchOutcome),
    /// The player asked to quit from a menu phase.
    QuitRequested,
}

/// Frame-scoped event queue.
#[derive(Debug, Clone, Default)]
pub struct Events {
    queue: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, event: GameEvent) {
        self.queue.push(event);
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.queue.iter()
    }

    pub fn contains(&self, event: &GameEvent) -> bool {
        self.queue.contains(event)
    }

    pub fn match_outcome(&self) -> Option<MatchOutcome> {
        self.queue.iter().find_map(|e| match e {
            GameEvent::MatchEnded(outcome) => Some(*outcome),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Key events consumed from the windowing shell, named by function rather
/// than by physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    MoveUp,
    MoveDown,
    Play,
    Quit,
    SelectEasy,
    SelectNormal,
    SelectHard,
    ChangeDifficulty,
}

/// One input event from the shell's per-frame event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
}
