//! Screen state machine
//!
//! Start -> Playing -> GameOver -> Start. Anything not in the transition
//! table is ignored.

use glam::Vec2;

use super::layout::PLAY_BUTTON;

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Title screen with the play button
    #[default]
    Start,
    /// Placeholder gameplay panel
    Playing,
    /// Final score, restart prompt and rising embers
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Start => "Start",
            GamePhase::Playing => "Playing",
            GamePhase::GameOver => "GameOver",
        }
    }
}

/// Keys the game reacts to; everything else maps to `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Escape,
    Other,
}

/// A discrete input event from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// Pointer click at a canvas coordinate
    Click(Vec2),
    KeyPress(Key),
}

/// A transition that fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Start -> Playing
    Started,
    /// Playing -> GameOver
    Ended,
    /// GameOver -> Start; score was reset, caller must clear particles
    Restarted,
}

/// Phase plus score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameState {
    pub phase: GamePhase,
    /// Never incremented: the gameplay screen is a placeholder
    pub score: u64,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition `input` would fire from the current phase, without applying it
    pub fn transition_for(&self, input: &Input) -> Option<Transition> {
        match (self.phase, input) {
            (GamePhase::Start, Input::Click(p)) if PLAY_BUTTON.contains(*p) => {
                Some(Transition::Started)
            }
            (GamePhase::Start, Input::KeyPress(Key::Space)) => Some(Transition::Started),
            (GamePhase::Playing, Input::KeyPress(Key::Escape)) => Some(Transition::Ended),
            (GamePhase::GameOver, Input::KeyPress(Key::Space)) => Some(Transition::Restarted),
            _ => None,
        }
    }

    /// Apply one input; returns the transition taken, if any
    pub fn apply(&mut self, input: &Input) -> Option<Transition> {
        let transition = self.transition_for(input)?;
        match transition {
            Transition::Started => self.phase = GamePhase::Playing,
            Transition::Ended => self.phase = GamePhase::GameOver,
            Transition::Restarted => {
                self.phase = GamePhase::Start;
                self.score = 0;
            }
        }
        log::debug!("{:?} -> {}", transition, self.phase.as_str());
        Some(transition)
    }
}
