/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (canvas pixels)
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 720.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 30.0;
    pub const PADDLE_HEIGHT: f32 = 200.0;
    pub const LEFT_PADDLE_SPEED: f32 = 600.0; // Left paddle is always human

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED_INCREMENT: f32 = 10.0; // Added to max speed on every paddle hit
    pub const BALL_X_BOOST: f32 = 1.3; // Multiplies stored x speed on every paddle hit
    pub const DEFLECTION_FACTOR: f32 = 0.01; // y speed per pixel of offset per unit of max speed

    // Score
    pub const WIN_SCORE: u8 = 3; // First to 3 wins

    // Frame timing
    pub const MIN_FPS: f32 = 12.0;
    pub const MAX_FPS: f32 = 60.0;
}
