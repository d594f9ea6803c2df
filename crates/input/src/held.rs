//! Held-key tracking for terminal environments.
//!
//! Many terminals never report key releases. A rotate key therefore counts as
//! held until it is released explicitly or until no repeat of it has been seen
//! for `release_timeout_ms`.

use crate::types::SceneAction;

// Longer than the usual keyboard auto-repeat interval so a held key does not
// flicker between repeats.
const DEFAULT_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone)]
pub struct HeldKeys {
    left_idle_ms: Option<u32>,
    right_idle_ms: Option<u32>,
    release_timeout_ms: u32,
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::with_release_timeout_ms(DEFAULT_RELEASE_TIMEOUT_MS)
    }

    pub fn with_release_timeout_ms(release_timeout_ms: u32) -> Self {
        Self {
            left_idle_ms: None,
            right_idle_ms: None,
            release_timeout_ms,
        }
    }

    pub fn release_timeout_ms(&self) -> u32 {
        self.release_timeout_ms
    }

    /// Record a press or auto-repeat. Non-rotation actions are ignored.
    pub fn press(&mut self, action: SceneAction) {
        match action {
            SceneAction::RotateLeft => self.left_idle_ms = Some(0),
            SceneAction::RotateRight => self.right_idle_ms = Some(0),
            _ => {}
        }
    }

    pub fn release(&mut self, action: SceneAction) {
        match action {
            SceneAction::RotateLeft => self.left_idle_ms = None,
            SceneAction::RotateRight => self.right_idle_ms = None,
            _ => {}
        }
    }

    /// Advance the idle timers, auto-releasing keys past the timeout.
    pub fn update(&mut self, elapsed_ms: u32) {
        let timeout = self.release_timeout_ms;
        for slot in [&mut self.left_idle_ms, &mut self.right_idle_ms] {
            if let Some(idle) = slot {
                let idle = idle.saturating_add(elapsed_ms);
                *slot = (idle <= timeout).then_some(idle);
            }
        }
    }

    /// Net rotation direction: `-1` left, `1` right, `0` none or both.
    pub fn rotation(&self) -> i32 {
        self.right_idle_ms.is_some() as i32 - self.left_idle_ms.is_some() as i32
    }
}
