//! Scene, HUD and overlay drawing
//!
//! Drawing is expressed against the [`Surface`] trait so the game can be presented
//! on a canvas in the browser or recorded in tests.

use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::GameMode;
use crate::fsm::GameState;
use crate::map::GameMap;
use crate::resources::Score;

const BACKGROUND: &str = "black";
const GRID: &str = "#339";
const WHITE: &str = "white";
const GHOST: &str = "rgba(255, 100, 100, 0.7)";
const HIGHLIGHT: &str = "yellow";
const GRID_SPACING: f32 = 12.0;

const TITLE_FONT: &str = "48pt deltaray";
const BANNER_FONT: &str = "64pt deltaray";
const BODY_FONT: &str = "24pt helvetica";
const MONO_FONT: &str = "18pt courier";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Alphabetic,
    Middle,
}

/// Centered text is also vertically centered on its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub font: &'static str,
    pub color: &'static str,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl TextStyle {
    pub const fn new(font: &'static str, color: &'static str, align: TextAlign) -> Self {
        let baseline = match align {
            TextAlign::Left => TextBaseline::Alphabetic,
            TextAlign::Center => TextBaseline::Middle,
        };
        Self {
            font,
            color,
            align,
            baseline,
        }
    }
}

/// Images the scene can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Image {
    Paddle,
}

/// A 2D drawing target. Calls are best-effort; a missing image draws nothing.
pub trait Surface {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str);
    fn draw_image(&mut self, image: Image, pos: Vec2);
    fn fill_text(&mut self, text: &str, pos: Vec2, style: TextStyle);
    /// Glow applied to subsequent fills (0 disables it)
    fn set_glow(&mut self, blur: f32, color: &str);
    /// Decoration that follows the ball. No gameplay effect.
    fn ball_trail(&mut self, _center: Vec2) {}
}

pub fn draw_pause_screen(surface: &mut dyn Surface, map: &GameMap) {
    surface.set_glow(0.0, WHITE);
    surface.fill_rect(Vec2::ZERO, map.size(), BACKGROUND);
    surface.fill_text(
        "... PAUSED ...",
        map.size() / 2.0,
        TextStyle::new("40pt courier", WHITE, TextAlign::Center),
    );
}

/// Background grid plus, while playing, the paddles and balls
pub fn draw_scene(
    surface: &mut dyn Surface,
    world: &World,
    map: &GameMap,
    state: GameState,
    show_ghost: bool,
) {
    surface.set_glow(0.0, WHITE);
    surface.fill_rect(Vec2::ZERO, map.size(), BACKGROUND);

    let rows = (map.height / GRID_SPACING).ceil() as u32;
    for i in 0..rows {
        let pos = Vec2::new(0.0, i as f32 * GRID_SPACING);
        surface.fill_rect(pos, Vec2::new(map.width, 1.0), GRID);
    }
    let cols = (map.width / GRID_SPACING).ceil() as u32;
    for i in 0..cols {
        let pos = Vec2::new(i as f32 * GRID_SPACING, 0.0);
        surface.fill_rect(pos, Vec2::new(1.0, map.height), GRID);
    }

    if state != GameState::Play {
        return;
    }

    for (_e, paddle) in world.query::<&Paddle>().iter() {
        surface.draw_image(Image::Paddle, paddle.pos);
    }

    let mut ghost = None;
    for (_e, ball) in world.query::<&Ball>().iter() {
        if ball.is_ghost() {
            ghost = Some(*ball);
            continue;
        }
        surface.set_glow(20.0, WHITE);
        surface.fill_rect(ball.pos, ball.size, WHITE);
        surface.ball_trail(ball.center());
    }

    if let Some(ghost) = ghost.filter(|_| show_ghost) {
        surface.set_glow(40.0, WHITE);
        surface.fill_rect(ghost.pos, ghost.size, GHOST);
    }

    surface.set_glow(0.0, WHITE);
}

/// Scores while playing, instructions before the first serve, banners on a win
pub fn draw_hud(
    surface: &mut dyn Surface,
    map: &GameMap,
    state: GameState,
    score: &Score,
    mode: GameMode,
) {
    let mid = map.width / 2.0;
    let centered = |font| TextStyle::new(font, WHITE, TextAlign::Center);

    match state {
        GameState::Play => {
            let style = TextStyle::new(BANNER_FONT, "#FFF", TextAlign::Left);
            surface.fill_text(&score.left.to_string(), Vec2::new(60.0, 60.0), style);
            surface.fill_text(
                &score.right.to_string(),
                Vec2::new(map.width - 130.0, 60.0),
                style,
            );
        }
        GameState::Begin => {
            let mut lines = vec![
                ("Instructions:", 100.0, TITLE_FONT),
                (
                    "Bounce the ball into the opposing players side (right side) to score points.",
                    160.0,
                    BODY_FONT,
                ),
                ("First to score 3 goals wins", 200.0, BODY_FONT),
                ("Controls:", 330.0, TITLE_FONT),
                ("W: Move Left Paddle Up", 390.0, BODY_FONT),
                ("S: Move Left Paddle Down", 425.0, BODY_FONT),
            ];
            if mode.is_two_player() {
                lines.push(("Up Arrow: Move Right Paddle Up", 457.0, BODY_FONT));
                lines.push(("Down Arrow: Move Right Paddle Down", 490.0, BODY_FONT));
            }
            for (text, y, font) in lines {
                surface.fill_text(text, Vec2::new(mid, y), centered(font));
            }
            surface.fill_text(
                "Click to Start",
                Vec2::new(mid, 565.0),
                TextStyle::new(BANNER_FONT, HIGHLIGHT, TextAlign::Center),
            );
        }
        GameState::LeftWin | GameState::RightWin => {
            let Some(winner) = state.winner() else {
                return;
            };
            let center = map.size() / 2.0;
            surface.fill_text(winner_banner(winner), center, centered(BANNER_FONT));
            surface.fill_text(
                "Click to restart",
                center + Vec2::new(0.0, 64.0),
                centered(BODY_FONT),
            );
        }
    }
}

fn winner_banner(side: Side) -> &'static str {
    match side {
        Side::Left => "LEFT PLAYER WINS",
        Side::Right => "RIGHT PLAYER WINS",
    }
}

/// Frame step readout in the bottom-right corner
pub fn draw_debug(surface: &mut dyn Surface, map: &GameMap, dt: f32) {
    surface.fill_text(
        &format!("dt: {:.3}", dt),
        Vec2::new(map.width - 150.0, map.height - 10.0),
        TextStyle::new(MONO_FONT, WHITE, TextAlign::Left),
    );
}
