use opencv::highgui;

use crate::control::domain::quit_signal::{is_key, QuitSignal};

/// Polls OpenCV's HighGUI key queue for a quit key.
pub struct HighGuiKeySignal {
    key: char,
    wait_ms: i32,
}

impl HighGuiKeySignal {
    pub fn new(key: char, wait_ms: i32) -> Self {
        Self { key, wait_ms }
    }
}

impl QuitSignal for HighGuiKeySignal {
    fn should_terminate(&mut self) -> bool {
        match highgui::wait_key(self.wait_ms) {
            Ok(code) => is_key(code, self.key),
            Err(e) => {
                log::warn!("Key poll failed: {e}");
                false
            }
        }
    }
}
