//! Keyboard state sampling.
//!
//! winit delivers key transitions as events; the sampler accumulates them
//! into level-triggered flags and snapshots a [`TickInput`] once per frame,
//! the same observable contract as polling the keyboard directly.

use winit::keyboard::KeyCode;

use crate::sim::TickInput;

/// Tracks the pressed state of every key the game cares about.
///
/// W/S drive the left paddle, ArrowUp/ArrowDown the right; R restarts and
/// Escape quits.
#[derive(Debug, Default)]
pub struct InputSampler {
    input: TickInput,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Unmapped keys are ignored; key repeats
    /// re-assert the current level and are harmless.
    pub fn handle_key(&mut self, code: KeyCode, pressed: bool) {
        match code {
            KeyCode::KeyW => self.input.left_up = pressed,
            KeyCode::KeyS => self.input.left_down = pressed,
            KeyCode::ArrowUp => self.input.right_up = pressed,
            KeyCode::ArrowDown => self.input.right_down = pressed,
            KeyCode::KeyR => self.input.restart = pressed,
            KeyCode::Escape => self.input.quit = pressed,
            _ => {}
        }
    }

    /// Snapshot the current key levels for this frame.
    pub fn sample(&self) -> TickInput {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        let mut sampler = InputSampler::new();
        sampler.handle_key(KeyCode::KeyW, true);
        sampler.handle_key(KeyCode::ArrowDown, true);
        sampler.handle_key(KeyCode::KeyR, true);
        sampler.handle_key(KeyCode::Escape, true);
        let input = sampler.sample();
        assert!(input.left_up);
        assert!(!input.left_down);
        assert!(!input.right_up);
        assert!(input.right_down);
        assert!(input.restart);
        assert!(input.quit);
    }

    #[test]
    fn test_release_clears_flag() {
        let mut sampler = InputSampler::new();
        sampler.handle_key(KeyCode::KeyS, true);
        assert!(sampler.sample().left_down);
        sampler.handle_key(KeyCode::KeyS, false);
        assert!(!sampler.sample().left_down);
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let mut sampler = InputSampler::new();
        sampler.handle_key(KeyCode::Space, true);
        let input = sampler.sample();
        assert!(!input.left_up && !input.left_down);
        assert!(!input.right_up && !input.right_down);
        assert!(!input.restart && !input.quit);
    }
}
