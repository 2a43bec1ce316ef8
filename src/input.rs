//! InputManager - tracks which keys are held down and which one-shot
//! presses are still waiting to be consumed.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use std::collections::HashMap;

pub struct InputManager {
    // keycodes converted to i32, so they can be used as map keys
    pressed: HashMap<i32, bool>,
}

impl InputManager {
    pub fn new() -> Self {
        Self { pressed: HashMap::new() }
    }

    /// True while the key is held down - for movement and turning.
    #[inline]
    pub fn key(&self, key: Keycode) -> bool {
        self.pressed.contains_key(&key2code(key))
    }

    /// True at most once per key press - for jump, toggles, quit.
    #[inline]
    pub fn consume_key(&mut self, key: Keycode) -> bool {
        let code = key2code(key);
        let mut was_pressed = false;
        if let Some(flag) = self.pressed.get_mut(&code) {
            was_pressed = *flag;
            *flag = false;
        }
        was_pressed
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::KeyDown { keycode: Some(key), .. } => {
                // key repeat must not re-arm the one-shot flag
                self.pressed.entry(key2code(*key)).or_insert(true);
            }
            Event::KeyUp { keycode: Some(key), .. } => {
                self.pressed.remove(&key2code(*key));
            }
            _ => {}
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

//------------------
//  Internal stuff

#[inline(always)]
fn key2code(key: Keycode) -> i32 {
    key as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_down(key: Keycode) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(key),
            scancode: None,
            keymod: sdl2::keyboard::Mod::empty(),
            repeat: false,
        }
    }

    fn key_up(key: Keycode) -> Event {
        Event::KeyUp {
            timestamp: 0,
            window_id: 0,
            keycode: Some(key),
            scancode: None,
            keymod: sdl2::keyboard::Mod::empty(),
            repeat: false,
        }
    }

    #[test]
    fn consume_fires_once_per_press() {
        let mut inputs = InputManager::new();
        inputs.handle_event(&key_down(Keycode::Space));
        assert!(inputs.consume_key(Keycode::Space));
        assert!(!inputs.consume_key(Keycode::Space));
        // key still counts as held
        assert!(inputs.key(Keycode::Space));
        // re-arms only after release + press
        inputs.handle_event(&key_down(Keycode::Space));
        assert!(!inputs.consume_key(Keycode::Space));
        inputs.handle_event(&key_up(Keycode::Space));
        inputs.handle_event(&key_down(Keycode::Space));
        assert!(inputs.consume_key(Keycode::Space));
    }
}
