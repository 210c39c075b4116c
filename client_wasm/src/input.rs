//! Keyboard input handling

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use game_core::{Key, Keyboard};
use web_sys::KeyboardEvent;

/// Map a `KeyboardEvent.key` value to a game key
pub fn key_from_str(key: &str) -> Option<Key> {
    match key {
        "w" | "W" => Some(Key::W),
        "s" | "S" => Some(Key::S),
        "ArrowUp" => Some(Key::Up),
        "ArrowDown" => Some(Key::Down),
        _ => None,
    }
}

/// Extract key from keyboard event
pub fn get_key_from_event(event: &KeyboardEvent) -> Option<Key> {
    key_from_str(&event.key())
}

/// Keys currently held, shared between the DOM listeners and the game
#[derive(Clone, Default)]
pub struct KeyState {
    held: Rc<RefCell<HashSet<Key>>>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event. Returns true if the key is one the game uses.
    pub fn handle_key_down(&self, event: &KeyboardEvent) -> bool {
        match get_key_from_event(event) {
            Some(key) => {
                self.held.borrow_mut().insert(key);
                true
            }
            None => false,
        }
    }

    /// Handle key up event
    pub fn handle_key_up(&self, event: &KeyboardEvent) {
        if let Some(key) = get_key_from_event(event) {
            self.held.borrow_mut().remove(&key);
        }
    }

    /// Drop everything held, e.g. when focus is lost and key ups never arrive
    pub fn release_all(&self) {
        self.held.borrow_mut().clear();
    }
}

impl Keyboard for KeyState {
    fn is_key_down(&self, key: Key) -> bool {
        self.held.borrow().contains(&key)
    }
}
