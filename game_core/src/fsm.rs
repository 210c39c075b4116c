//! Game State Machine
//!
//! BEGIN -> PLAY -> {LEFT_WIN, RIGHT_WIN} -> PLAY. Pausing is not a state; it is
//! an overlay flag kept by [`crate::Game`].

use crate::components::Side;

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Instructions screen, waiting for the first click
    #[default]
    Begin,
    Play,
    LeftWin,
    RightWin,
}

impl GameState {
    /// The side that won, in a win state
    pub fn winner(self) -> Option<Side> {
        match self {
            GameState::LeftWin => Some(Side::Left),
            GameState::RightWin => Some(Side::Right),
            _ => None,
        }
    }
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Click on the instructions screen
    Start,
    /// A side reached the winning score
    Win(Side),
    /// Click on a win screen
    Restart,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: GameState,
    pub to_state: GameState,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct GameFsm {
    state: GameState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: GameState::Begin,
        }
    }

    /// Get current state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            log::info!("{:?} -> {:?} ({:?})", from_state, next_state, action);
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<GameState> {
        match (self.state, action) {
            (GameState::Begin, GameAction::Start) => Some(GameState::Play),

            (GameState::Play, GameAction::Win(Side::Left)) => Some(GameState::LeftWin),
            (GameState::Play, GameAction::Win(Side::Right)) => Some(GameState::RightWin),

            (GameState::LeftWin | GameState::RightWin, GameAction::Restart) => {
                Some(GameState::Play)
            }

            // Invalid transition
            _ => None,
        }
    }

    /// Back to the instructions screen
    pub fn reset(&mut self) {
        self.state = GameState::Begin;
    }

    /// Check if physics should run
    pub fn is_playing(&self) -> bool {
        self.state == GameState::Play
    }
}
