use crate::components::Side;
use crate::params::Params;

/// Game mode. The three AI modes differ only in their [`AiProps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Easy,
    Medium,
    Hard,
    TwoPlayer,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::Easy,
        GameMode::Medium,
        GameMode::Hard,
        GameMode::TwoPlayer,
    ];

    /// Parse the index used by the mode `<select>` (0 = easy .. 3 = two player)
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn is_two_player(self) -> bool {
        self == GameMode::TwoPlayer
    }

    pub fn ai_props(self) -> AiProps {
        match self {
            GameMode::Easy => AiProps::new(100.0, 1.15, 200.0),
            GameMode::Medium => AiProps::new(200.0, 1.15, 250.0),
            GameMode::Hard => AiProps::new(400.0, 1.3, 300.0),
            // Paddle speed drives the second human paddle here, there is no AI
            GameMode::TwoPlayer => AiProps::new(600.0, 1.15, 250.0),
        }
    }
}

/// Per-mode difficulty settings, fixed for the lifetime of a game
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiProps {
    /// Max speed of the right paddle
    pub paddle_speed: f32,
    /// Ghost ball velocity relative to the real ball
    pub ghost_ball_speed: f32,
    pub ball_start_speed: f32,
}

impl AiProps {
    pub const fn new(paddle_speed: f32, ghost_ball_speed: f32, ball_start_speed: f32) -> Self {
        Self {
            paddle_speed,
            ghost_ball_speed,
            ball_start_speed,
        }
    }
}

impl Default for AiProps {
    fn default() -> Self {
        GameMode::default().ai_props()
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub left_paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed_increment: f32,
    pub ball_x_boost: f32,
    pub deflection_factor: f32,
    pub win_score: u8,
    pub min_fps: f32,
    pub max_fps: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            left_paddle_speed: Params::LEFT_PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            ball_x_boost: Params::BALL_X_BOOST,
            deflection_factor: Params::DEFLECTION_FACTOR,
            win_score: Params::WIN_SCORE,
            min_fps: Params::MIN_FPS,
            max_fps: Params::MAX_FPS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Max paddle speed for a side under the given difficulty
    pub fn paddle_speed(&self, side: Side, props: &AiProps) -> f32 {
        match side {
            Side::Left => self.left_paddle_speed,
            Side::Right => props.paddle_speed,
        }
    }
}
