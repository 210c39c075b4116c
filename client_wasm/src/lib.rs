//! Browser client for Ghost Pong
//!
//! Canvas 2D presentation of `game_core`, wired to the page's menu, keyboard and
//! `<audio>` elements.
//! Note: only builds for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod audio;
mod error;
mod input;
mod particles;
mod scheduler;
mod surface;

use std::cell::RefCell;
use std::rc::Rc;

use audio::HtmlAudio;
use error::ClientError;
use game_core::{Game, GameMode, Host, Params};
use glam::Vec2;
use input::KeyState;
use scheduler::{CallbackSlot, RafScheduler};
use surface::CanvasSurface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlCanvasElement, HtmlInputElement, HtmlSelectElement, KeyboardEvent, MouseEvent,
    Window,
};

const CANVAS_ID: &str = "canvas";
const MODE_SELECT_ID: &str = "mode_select";
const GHOST_CHECK_ID: &str = "ghostball_check";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("Logger init failed: {}", e)));
    }

    run().map_err(|e| {
        log::error!("Startup failed: {}", e);
        e.into()
    })
}

fn run() -> Result<(), ClientError> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;
    let document = window.document().ok_or(ClientError::NoDocument)?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or(ClientError::MissingElement(CANVAS_ID))?
        .dyn_into()
        .map_err(|_| ClientError::WrongElement(CANVAS_ID, "canvas"))?;
    canvas.set_width(Params::ARENA_WIDTH as u32);
    canvas.set_height(Params::ARENA_HEIGHT as u32);

    let keys = KeyState::new();
    let frame_callback: CallbackSlot = Rc::new(RefCell::new(None));
    let host = Host::new(
        Box::new(HtmlAudio::new(&document)),
        Box::new(keys.clone()),
        Box::new(RafScheduler::new(frame_callback.clone())),
    );

    let select = mode_select(&document);
    let check = ghost_check(&document);
    let mode = select
        .as_ref()
        .and_then(|select| parse_mode(&select.value()))
        .unwrap_or_default();
    let game = Rc::new(RefCell::new(Game::new(mode, host)));
    if let Some(check) = &check {
        game.borrow_mut().show_ghost = check.checked();
    }

    // Game loop: the scheduler hands this closure to requestAnimationFrame
    {
        let game = game.clone();
        let mut surface = CanvasSurface::new(&canvas)?;
        *frame_callback.borrow_mut() = Some(Closure::new(move |now: f64| {
            game.borrow_mut().frame(now, &mut surface);
        }));
    }

    setup_input_handlers(&window, &canvas, game.clone(), keys.clone());
    setup_menu(select, check, game.clone());
    setup_auto_pause(&window, game.clone(), keys);

    game.borrow_mut().init();
    log::info!("Ghost Pong running in {:?} mode", mode);
    Ok(())
}

/// The mode `<select>` carries the mode index as its value
fn parse_mode(value: &str) -> Option<GameMode> {
    value.trim().parse::<u32>().ok().and_then(GameMode::from_index)
}

fn mode_select(document: &Document) -> Option<HtmlSelectElement> {
    let select = document
        .get_element_by_id(MODE_SELECT_ID)
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok());
    if select.is_none() {
        log::warn!("No #{} element, mode is fixed", MODE_SELECT_ID);
    }
    select
}

fn ghost_check(document: &Document) -> Option<HtmlInputElement> {
    let check = document
        .get_element_by_id(GHOST_CHECK_ID)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    if check.is_none() {
        log::warn!("No #{} element, ghost ball stays hidden", GHOST_CHECK_ID);
    }
    check
}

fn setup_input_handlers(
    window: &Window,
    canvas: &HtmlCanvasElement,
    game: Rc<RefCell<Game>>,
    keys: KeyState,
) {
    // Mouse click - state transitions only
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let pos = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
            game.borrow_mut().handle_click(pos);
        });
        let _ = canvas
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Keyboard - held state is polled by the game every frame
    {
        let keys = keys.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if keys.handle_key_down(&event) {
                // Keep the arrow keys from scrolling the page
                event.prevent_default();
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            keys.handle_key_up(&event);
        });
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn setup_menu(
    select: Option<HtmlSelectElement>,
    check: Option<HtmlInputElement>,
    game: Rc<RefCell<Game>>,
) {
    if let Some(select) = select {
        let game = game.clone();
        let target = select.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            match parse_mode(&target.value()) {
                Some(mode) => game.borrow_mut().set_mode(mode),
                None => log::warn!("Unknown mode value {:?}", target.value()),
            }
            // Hand focus back so the arrow keys reach the game
            let _ = target.blur();
        });
        let _ = select.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    if let Some(check) = check {
        let target = check.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let show = target.checked();
            game.borrow_mut().show_ghost = show;
            log::info!("Ghost ball {}", if show { "shown" } else { "hidden" });
        });
        let _ = check.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Pause when the window loses focus. Resuming takes a click on the canvas.
fn setup_auto_pause(window: &Window, game: Rc<RefCell<Game>>, keys: KeyState) {
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        keys.release_all();
        game.borrow_mut().pause();
    });
    let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
    closure.forget();
}
