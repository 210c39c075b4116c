//! Host capabilities
//!
//! The simulation never touches the browser directly. Audio, keyboard state and
//! frame scheduling are provided through these traits so the game can run against
//! mocks in tests.

/// Sound effects, indexed the way the effect table is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball bounced off a wall or paddle
    Hit,
    /// Ball reached a goal line
    Goal,
}

impl SoundEffect {
    pub fn index(self) -> usize {
        match self {
            SoundEffect::Hit => 0,
            SoundEffect::Goal => 1,
        }
    }
}

/// Keys the game polls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
}

/// Best-effort audio output. Implementations must swallow playback failures.
pub trait Audio {
    fn play_effect(&mut self, effect: SoundEffect);
    fn play_bg_audio(&mut self);
    fn stop_bg_audio(&mut self);
}

pub trait Keyboard {
    fn is_key_down(&self, key: Key) -> bool;
}

/// Handle of a pending frame request
pub type FrameId = i32;

/// Schedules the next call to [`crate::Game::frame`]
pub trait FrameScheduler {
    /// Returns `None` if the host could not schedule a frame
    fn request_frame(&mut self) -> Option<FrameId>;
    fn cancel_frame(&mut self, id: FrameId);
}

/// Everything the game needs from its host
pub struct Host {
    pub audio: Box<dyn Audio>,
    pub keyboard: Box<dyn Keyboard>,
    pub scheduler: Box<dyn FrameScheduler>,
}

impl Host {
    pub fn new(
        audio: Box<dyn Audio>,
        keyboard: Box<dyn Keyboard>,
        scheduler: Box<dyn FrameScheduler>,
    ) -> Self {
        Self {
            audio,
            keyboard,
            scheduler,
        }
    }
}
