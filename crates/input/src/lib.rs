//! Terminal input module (scene-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::SceneAction`] and tracks held
//! rotation keys for terminals without key-release events.

pub mod held;
pub mod map;

pub use asciirast_types as types;

pub use held::HeldKeys;
pub use map::{handle_key_event, should_quit};
