//! requestAnimationFrame scheduling
//!
//! The frame callback is installed after the game exists (it needs a handle to
//! it), so the scheduler shares a slot with the entry point instead of owning
//! the closure outright.

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{FrameId, FrameScheduler};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub type FrameCallback = Closure<dyn FnMut(f64)>;
pub type CallbackSlot = Rc<RefCell<Option<FrameCallback>>>;

pub struct RafScheduler {
    callback: CallbackSlot,
}

impl RafScheduler {
    pub fn new(callback: CallbackSlot) -> Self {
        Self { callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameId> {
        let window = web_sys::window()?;
        let slot = self.callback.borrow();
        let Some(callback) = slot.as_ref() else {
            log::warn!("Frame requested before the loop callback was installed");
            return None;
        };
        window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| log::warn!("requestAnimationFrame failed: {:?}", e))
            .ok()
    }

    fn cancel_frame(&mut self, id: FrameId) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(id);
        }
    }
}
