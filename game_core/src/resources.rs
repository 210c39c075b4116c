use crate::components::Side;
use crate::host::{Key, Keyboard, SoundEffect};
use crate::params::Params;

/// Step length for the current frame
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,
}

impl Time {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 1.0 / Params::MAX_FPS,
        }
    }
}

/// Turns presentation timestamps into a clamped simulation step.
///
/// `fps = 1000 / (now - last)` is clamped to `[min_fps, max_fps]` and the step is
/// `1 / fps`, so a slow frame slows the game down instead of skipping ahead.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_ms: Option<f64>,
    min_fps: f32,
    max_fps: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Params::MIN_FPS, Params::MAX_FPS)
    }
}

impl FrameClock {
    pub fn new(min_fps: f32, max_fps: f32) -> Self {
        Self {
            last_ms: None,
            min_fps,
            max_fps,
        }
    }

    /// Step for a frame presented at `now_ms`
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => {
                let fps = (1000.0 / (now_ms - last)) as f32;
                // A zero or negative interval reads as "very fast"
                let fps = if fps.is_nan() || fps < 0.0 {
                    self.max_fps
                } else {
                    fps.clamp(self.min_fps, self.max_fps)
                };
                1.0 / fps
            }
            None => 1.0 / self.max_fps,
        };
        self.last_ms = Some(now_ms);
        dt
    }

    /// Forget the last timestamp so the next tick starts a fresh baseline
    pub fn rebase(&mut self) {
        self.last_ms = None;
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Sounds raised during this frame, in the order they happened
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub sounds: Vec<SoundEffect>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.sounds.clear();
    }
}

/// Held movement keys for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

/// Human input for this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Controls {
    pub left: PaddleInput,
    pub right: PaddleInput,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    /// W/S drive the left paddle, the arrow keys drive the right one
    pub fn from_keyboard(keyboard: &dyn Keyboard) -> Self {
        Self {
            left: PaddleInput {
                up: keyboard.is_key_down(Key::W),
                down: keyboard.is_key_down(Key::S),
            },
            right: PaddleInput {
                up: keyboard.is_key_down(Key::Up),
                down: keyboard.is_key_down(Key::Down),
            },
        }
    }

    pub fn for_side(&self, side: Side) -> PaddleInput {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}
