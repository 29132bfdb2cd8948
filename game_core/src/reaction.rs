//! Reaction delay buffer for the AI opponent.

use std::collections::VecDeque;

use glam::Vec2;

/// FIFO of historical ball positions. Reading only the sample from `lag`
/// ticks ago gives the AI a simulated human reaction time.
#[derive(Debug, Clone, Default)]
pub struct ReactionBuffer {
    samples: VecDeque<Vec2>,
}

impl ReactionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a position sample. The buffer is trimmed from the front to
    /// at most `lag` entries before the push, so a later `recall` lags
    /// the live position by exactly `lag` ticks once the window is full.
    pub fn record(&mut self, pos: Vec2, lag: usize) {
        while self.samples.len() > lag {
            self.samples.pop_front();
        }
        self.samples.push_back(pos);
    }

    /// Take the delayed sample, if a full lag window has accumulated.
    /// Returns `None` until more than `lag` samples are held, which makes
    /// the AI decision-blind for the first `lag` ticks of a rally.
    pub fn recall(&mut self, lag: usize) -> Option<Vec2> {
        if self.samples.len() > lag {
            self.samples.pop_front()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
