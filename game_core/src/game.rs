//! Game context
//!
//! Owns the world and every resource the systems need, plus the host
//! capabilities. The host calls [`Game::frame`] once per presented frame and
//! forwards clicks, focus loss and menu changes.

use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Controller, Paddle, Side};
use crate::config::{AiProps, Config, GameMode};
use crate::fsm::{GameAction, GameFsm, GameState};
use crate::ghost::{ghost_ball, real_ball};
use crate::host::{FrameId, Host};
use crate::map::GameMap;
use crate::render::{draw_debug, draw_hud, draw_pause_screen, draw_scene, Surface};
use crate::resources::{Controls, Events, FrameClock, Score, Time};
use crate::systems::reset_balls;
use crate::{create_paddle, step};

pub struct Game {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    /// Draw the AI's aim point
    pub show_ghost: bool,
    /// Draw the frame step readout
    pub debug: bool,
    mode: GameMode,
    props: AiProps,
    fsm: GameFsm,
    clock: FrameClock,
    paused: bool,
    host: Host,
    animation_id: Option<FrameId>,
}

impl Game {
    /// Build a game on the instructions screen. Nothing is scheduled until [`Game::init`].
    pub fn new(mode: GameMode, host: Host) -> Self {
        let config = Config::new();
        let clock = FrameClock::new(config.min_fps, config.max_fps);
        let mut game = Self {
            world: World::new(),
            time: Time::default(),
            map: GameMap::new(),
            config,
            score: Score::new(),
            events: Events::new(),
            show_ghost: false,
            debug: true,
            mode,
            props: mode.ai_props(),
            fsm: GameFsm::new(),
            clock,
            paused: false,
            host,
            animation_id: None,
        };
        game.reset_match();
        game
    }

    /// Full re-init into BEGIN with fresh entities, then start a new frame loop.
    ///
    /// The outstanding frame request is cancelled first so only one loop ever runs.
    pub fn init(&mut self) {
        self.cancel_frame();
        self.fsm.reset();
        self.reset_match();
        self.host.audio.stop_bg_audio();
        log::info!("Init {:?}: {:?}", self.mode, self.props);
        self.animation_id = self.host.scheduler.request_frame();
    }

    /// Switch difficulty and re-init
    pub fn set_mode(&mut self, mode: GameMode) {
        log::info!("Mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.init();
    }

    /// Pointer click in canvas space. Only used to move between states.
    pub fn handle_click(&mut self, pos: Vec2) {
        log::debug!("Click at {:?} in {:?}", pos, self.fsm.state());

        if self.paused {
            self.resume();
            return;
        }

        match self.fsm.state() {
            GameState::Begin => {
                if self.fsm.transition(GameAction::Start).success {
                    self.host.audio.play_bg_audio();
                }
            }
            GameState::LeftWin | GameState::RightWin => self.restart(),
            GameState::Play => {}
        }
    }

    /// Suspend physics and show the pause screen. The frame loop keeps running.
    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.paused = true;
        self.host.audio.stop_bg_audio();
        log::info!("Paused");
    }

    /// Lift the pause. The next frame measures time from a fresh baseline.
    pub fn resume(&mut self) {
        if !self.paused {
            return;
        }
        self.paused = false;
        self.clock.rebase();
        if self.fsm.is_playing() {
            self.host.audio.play_bg_audio();
        }
        log::info!("Resumed");
    }

    /// One presented frame at host time `now_ms`
    pub fn frame(&mut self, now_ms: f64, surface: &mut dyn Surface) {
        self.animation_id = self.host.scheduler.request_frame();

        if self.paused {
            draw_pause_screen(surface, &self.map);
            return;
        }

        let dt = self.clock.tick(now_ms);
        self.advance(dt);
        self.present(surface, dt);
    }

    /// Physics for one frame. Does nothing outside PLAY.
    pub fn advance(&mut self, dt: f32) {
        if !self.fsm.is_playing() {
            return;
        }

        self.time.dt = dt;
        let controls = Controls::from_keyboard(self.host.keyboard.as_ref());
        step(
            &mut self.world,
            &self.time,
            &self.map,
            &self.config,
            &self.props,
            &mut self.score,
            &mut self.events,
            &controls,
        );

        for effect in self.events.sounds.drain(..) {
            self.host.audio.play_effect(effect);
        }

        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            self.fsm.transition(GameAction::Win(winner));
            self.host.audio.stop_bg_audio();
            log::info!(
                "{:?} wins {} - {}",
                winner,
                self.score.left,
                self.score.right
            );
        }
    }

    /// Draw the current state. Never mutates the game.
    pub fn present(&self, surface: &mut dyn Surface, dt: f32) {
        let state = self.fsm.state();
        draw_scene(surface, &self.world, &self.map, state, self.show_ghost);
        draw_hud(surface, &self.map, state, &self.score, self.mode);
        if self.debug {
            draw_debug(surface, &self.map, dt);
        }
    }

    pub fn state(&self) -> GameState {
        self.fsm.state()
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Handle of the frame request the loop is waiting on
    pub fn pending_frame(&self) -> Option<FrameId> {
        self.animation_id
    }

    pub fn ball(&self) -> Option<Ball> {
        real_ball(&self.world).map(|(_e, ball)| ball)
    }

    pub fn ghost(&self) -> Option<Ball> {
        ghost_ball(&self.world).map(|(_e, ball)| ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    /// Click on a win screen: fresh entities straight into PLAY
    fn restart(&mut self) {
        self.cancel_frame();
        self.reset_match();
        self.fsm.transition(GameAction::Restart);
        self.host.audio.play_bg_audio();
        self.animation_id = self.host.scheduler.request_frame();
    }

    fn cancel_frame(&mut self) {
        if let Some(id) = self.animation_id.take() {
            self.host.scheduler.cancel_frame(id);
        }
    }

    /// Scores, entities and timing back to a fresh match under the current mode
    fn reset_match(&mut self) {
        self.props = self.mode.ai_props();
        self.score = Score::new();
        self.events.clear();
        self.time = Time::default();
        self.clock.rebase();

        self.world.clear();
        let size = Vec2::new(self.config.paddle_width, self.config.paddle_height);
        for side in [Side::Left, Side::Right] {
            let controller = if side == Side::Right && !self.mode.is_two_player() {
                Controller::Ai
            } else {
                Controller::Human
            };
            let speed = self.config.paddle_speed(side, &self.props);
            let paddle = Paddle::new(side, &self.map, size, speed);
            create_paddle(&mut self.world, paddle, controller);
        }
        reset_balls(&mut self.world, &self.map, &self.config, &self.props);
    }
}
