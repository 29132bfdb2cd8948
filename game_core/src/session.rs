//! Top-level game session: the menu state machine and per-match entity
//! lifecycle.

use hecs::World;

use crate::config::{Config, Difficulty};
use crate::resources::{
    Events, GameEvent, GameRng, InputEvent, Key, MatchOutcome, Score, ServeState,
};

/// Menu/game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    DifficultySelect,
    Playing,
    EndGame,
}

/// Everything a single match owns: the entity world plus its resources.
/// Created whole on entering [`Phase::Playing`] and dropped whole on
/// leaving it.
struct MatchState {
    world: World,
    score: Score,
    serve: ServeState,
    rng: GameRng,
    tick: u32,
}

impl MatchState {
    fn new(config: &Config, difficulty: Difficulty, seed: u64) -> Self {
        let mut world = World::new();
        crate::spawn_opponent(&mut world, config, difficulty);
        crate::spawn_player(&mut world, config);
        crate::spawn_ball(&mut world, config);

        // The ball starts parked at center; arm the first serve.
        let mut serve = ServeState::new();
        serve.arm(config.serve_delay_ticks);

        Self {
            world,
            score: Score::new(),
            serve,
            rng: GameRng::new(seed),
            tick: 0,
        }
    }
}

/// The game session. Drives one [`Phase`] transition graph:
/// Start -> DifficultySelect -> Playing -> EndGame, with EndGame looping
/// back into Playing (rematch at the last difficulty) or
/// DifficultySelect.
pub struct Session {
    config: Config,
    phase: Phase,
    difficulty: Difficulty,
    outcome: Option<MatchOutcome>,
    events: Events,
    active: Option<MatchState>,
    seed: u64,
}

impl Session {
    pub fn new(config: Config, seed: u64) -> Self {
        Self {
            config,
            phase: Phase::Start,
            difficulty: Difficulty::Normal,
            outcome: None,
            events: Events::new(),
            active: None,
            seed,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Outcome of the last finished match, shown on the end screen.
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Score of the match in progress, if any.
    pub fn score(&self) -> Option<Score> {
        self.active.as_ref().map(|m| m.score)
    }

    /// Ticks elapsed in the match in progress, if any.
    pub fn match_tick(&self) -> Option<u32> {
        self.active.as_ref().map(|m| m.tick)
    }

    /// Borrow the live entity world (paddles and ball) for rendering.
    pub fn world(&self) -> Option<&World> {
        self.active.as_ref().map(|m| &m.world)
    }

    /// Run one frame. Menu phases only consume key events; Playing runs
    /// the full simulation tick. Returns the frame's event queue so the
    /// shell can react (flash on paddle hits, quit, ...).
    pub fn tick(&mut self, inputs: &[InputEvent]) -> &Events {
        match self.phase {
            Phase::Start => {
                self.events.clear();
                for input in inputs {
                    match input {
                        InputEvent::KeyDown(Key::Play) => {
                            self.set_phase(Phase::DifficultySelect);
                        }
                        InputEvent::KeyDown(Key::Quit) => {
                            self.events.post(GameEvent::QuitRequested);
                        }
                        _ => {}
                    }
                }
            }

            Phase::DifficultySelect => {
                self.events.clear();
                for input in inputs {
                    let selected = match input {
                        InputEvent::KeyDown(Key::SelectEasy) => Some(Difficulty::Easy),
                        InputEvent::KeyDown(Key::SelectNormal) => Some(Difficulty::Normal),
                        InputEvent::KeyDown(Key::SelectHard) => Some(Difficulty::Hard),
                        _ => None,
                    };
                    if let Some(difficulty) = selected {
                        self.start_match(difficulty);
                        break;
                    }
                }
            }

            Phase::Playing => {
                let state = self
                    .active
                    .as_mut()
                    .expect("Playing phase always owns a match");
                crate::step(
                    &mut state.world,
                    &self.config,
                    self.difficulty,
                    inputs,
                    &mut state.score,
                    &mut state.serve,
                    &mut state.rng,
                    &mut self.events,
                );
                state.tick += 1;

                if let Some(outcome) = self.events.match_outcome() {
                    // Tear the match down to just the session.
                    self.active = None;
                    self.outcome = Some(outcome);
                    self.set_phase(Phase::EndGame);
                }
            }

            Phase::EndGame => {
                self.events.clear();
                for input in inputs {
                    match input {
                        InputEvent::KeyDown(Key::Play) => {
                            // Rematch at the last selected difficulty.
                            self.start_match(self.difficulty);
                            break;
                        }
                        InputEvent::KeyDown(Key::ChangeDifficulty) => {
                            self.set_phase(Phase::DifficultySelect);
                            break;
                        }
                        InputEvent::KeyDown(Key::Quit) => {
                            self.events.post(GameEvent::QuitRequested);
                        }
                        _ => {}
                    }
                }
            }
        }

        &self.events
    }

    fn start_match(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        // Vary the seed per match so rematches differ.
        self.seed = self.seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.active = Some(MatchState::new(&self.config, difficulty, self.seed));
        self.outcome = None;
        self.set_phase(Phase::Playing);
    }

    fn set_phase(&mut self, phase: Phase) {
        log::debug!("phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: Key) -> Vec<InputEvent> {
        vec![InputEvent::KeyDown(k)]
    }

    fn session() -> Session {
        Session::new(Config::new(), 7)
    }

    #[test]
    fn test_menu_flow_into_playing() {
        let mut s = session();
        assert_eq!(s.phase(), Phase::Start);

        s.tick(&key(Key::Play));
        assert_eq!(s.phase(), Phase::DifficultySelect);

        s.tick(&key(Key::SelectHard));
        assert_eq!(s.phase(), Phase::Playing);
        assert_eq!(s.difficulty(), Difficulty::Hard);
        assert!(s.world().is_some());
        assert_eq!(s.score().map(|sc| (sc.player, sc.opponent)), Some((0, 0)));
    }

    #[test]
    fn test_irrelevant_keys_ignored_in_menus() {
        let mut s = session();
        s.tick(&key(Key::SelectEasy));
        s.tick(&key(Key::MoveUp));
        assert_eq!(s.phase(), Phase::Start);

        s.tick(&key(Key::Play));
        s.tick(&key(Key::Play));
        assert_eq!(s.phase(), Phase::DifficultySelect);
    }

    #[test]
    fn test_quit_only_from_start_and_endgame() {
        let mut s = session();
        let events = s.tick(&key(Key::Quit));
        assert!(events.contains(&GameEvent::QuitRequested));

        s.tick(&key(Key::Play));
        let events = s.tick(&key(Key::Quit));
        assert!(!events.contains(&GameEvent::QuitRequested));
    }

    #[test]
    fn test_playing_spawns_fresh_world_per_match() {
        let mut s = session();
        s.tick(&key(Key::Play));
        s.tick(&key(Key::SelectNormal));

        let entities = s.world().unwrap().len();
        assert_eq!(entities, 3); // two paddles and a ball
        assert_eq!(s.match_tick(), Some(0));

        s.tick(&[]);
        assert_eq!(s.match_tick(), Some(1));
    }

    #[test]
    fn test_match_end_transitions_to_endgame_and_tears_down() {
        let mut s = session();
        s.tick(&key(Key::Play));
        s.tick(&key(Key::SelectNormal));

        // Player at match point; drop the ball past the left edge so the
        // next tick awards the winning point.
        {
            let state = s.active.as_mut().unwrap();
            state.score.player = 6;
            for (_e, ball) in state.world.query_mut::<&mut crate::Ball>() {
                ball.set_position(glam::Vec2::new(-5.0, 240.0));
            }
        }
        let events = s.tick(&[]);
        assert_eq!(events.match_outcome(), Some(MatchOutcome::Won));
        assert_eq!(s.phase(), Phase::EndGame);
        assert!(s.world().is_none());
        assert_eq!(s.outcome(), Some(MatchOutcome::Won));
    }

    #[test]
    fn test_endgame_rematch_keeps_difficulty() {
        let mut s = session();
        s.tick(&key(Key::Play));
        s.tick(&key(Key::SelectEasy));
        finish_match(&mut s);

        s.tick(&key(Key::Play));
        assert_eq!(s.phase(), Phase::Playing);
        assert_eq!(s.difficulty(), Difficulty::Easy);
        assert_eq!(s.score().map(|sc| sc.player), Some(0));
    }

    #[test]
    fn test_endgame_change_difficulty() {
        let mut s = session();
        s.tick(&key(Key::Play));
        s.tick(&key(Key::SelectEasy));
        finish_match(&mut s);

        s.tick(&key(Key::ChangeDifficulty));
        assert_eq!(s.phase(), Phase::DifficultySelect);
        s.tick(&key(Key::SelectHard));
        assert_eq!(s.difficulty(), Difficulty::Hard);
    }

    fn finish_match(s: &mut Session) {
        {
            let state = s.active.as_mut().unwrap();
            state.score.opponent = 6;
            for (_e, ball) in state.world.query_mut::<&mut crate::Ball>() {
                ball.set_position(glam::Vec2::new(s_width() + 5.0, 240.0));
            }
        }
        s.tick(&[]);
        assert_eq!(s.phase(), Phase::EndGame);
        assert_eq!(s.outcome(), Some(MatchOutcome::Lost));
    }

    fn s_width() -> f32 {
        Config::new().arena_width
    }
}
