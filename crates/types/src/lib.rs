//! Shared data types and constants.
//!
//! This crate defines the small value types used by every other crate in the
//! workspace. It has no external dependencies, so it can be used from the
//! rasterizer core, the terminal presenter and the scene engine alike.
//!
//! # Glyphs
//!
//! Canvas cells hold a single printable ASCII byte:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ASCII_MIN_PRINTABLE` | 32 | Space, the lowest printable byte |
//! | `ASCII_MAX_PRINTABLE` | 126 | `~`, the highest printable byte |
//!
//! # Colors
//!
//! Colors are 24-bit RGB triples. The canvas stores them packed into a `u32`
//! with red in bits 0-7, green in bits 8-15 and blue in bits 16-23 (see
//! [`color::encode_rgb`]).
//!
//! # Examples
//!
//! ```
//! use asciirast_types::{decode_rgb, encode_rgb, is_printable_ascii, Rgb, SceneAction};
//!
//! let packed = encode_rgb(1, 2, 3);
//! assert_eq!(packed, 0x03_02_01);
//! assert_eq!(decode_rgb(packed), Rgb::new(1, 2, 3));
//!
//! assert!(is_printable_ascii(b'*'));
//! assert!(!is_printable_ascii(b'\n'));
//!
//! assert_eq!(SceneAction::from_str("zoomIn"), Some(SceneAction::ZoomIn));
//! ```

pub mod color;

pub use color::{decode_rgb, encode_rgb, Rgb};

/// Lowest printable ASCII byte (space).
pub const ASCII_MIN_PRINTABLE: u8 = 32;

/// Highest printable ASCII byte (`~`).
pub const ASCII_MAX_PRINTABLE: u8 = 126;

/// Default glyph for a cleared cell.
pub const DEFAULT_GLYPH: u8 = b' ';

/// Default depth for a cleared cell (farthest possible).
pub const DEFAULT_DEPTH: f32 = 0.0;

/// Returns true if `glyph` can be stored in a canvas cell.
#[inline]
pub const fn is_printable_ascii(glyph: u8) -> bool {
    glyph >= ASCII_MIN_PRINTABLE && glyph <= ASCII_MAX_PRINTABLE
}

/// User-level actions a scene reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneAction {
    /// Rotate the scene counter-clockwise
    RotateLeft,
    /// Rotate the scene clockwise
    RotateRight,
    /// Scale the scene up
    ZoomIn,
    /// Scale the scene down
    ZoomOut,
    /// Switch to the next registered scene
    NextScene,
    /// Freeze or resume scene updates
    TogglePause,
}

impl SceneAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use asciirast_types::SceneAction;
    ///
    /// assert_eq!(SceneAction::from_str("rotateLeft"), Some(SceneAction::RotateLeft));
    /// assert_eq!(SceneAction::from_str("NEXTSCENE"), Some(SceneAction::NextScene));
    /// assert_eq!(SceneAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotateleft" => Some(SceneAction::RotateLeft),
            "rotateright" => Some(SceneAction::RotateRight),
            "zoomin" => Some(SceneAction::ZoomIn),
            "zoomout" => Some(SceneAction::ZoomOut),
            "nextscene" => Some(SceneAction::NextScene),
            "togglepause" => Some(SceneAction::TogglePause),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneAction::RotateLeft => "rotateLeft",
            SceneAction::RotateRight => "rotateRight",
            SceneAction::ZoomIn => "zoomIn",
            SceneAction::ZoomOut => "zoomOut",
            SceneAction::NextScene => "nextScene",
            SceneAction::TogglePause => "togglePause",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_range_is_inclusive() {
        assert!(is_printable_ascii(ASCII_MIN_PRINTABLE));
        assert!(is_printable_ascii(ASCII_MAX_PRINTABLE));
        assert!(!is_printable_ascii(ASCII_MIN_PRINTABLE - 1));
        assert!(!is_printable_ascii(ASCII_MAX_PRINTABLE + 1));
        assert!(is_printable_ascii(DEFAULT_GLYPH));
    }

    #[test]
    fn scene_action_string_forms_agree() {
        for action in [
            SceneAction::RotateLeft,
            SceneAction::RotateRight,
            SceneAction::ZoomIn,
            SceneAction::ZoomOut,
            SceneAction::NextScene,
            SceneAction::TogglePause,
        ] {
            assert_eq!(SceneAction::from_str(action.as_str()), Some(action));
        }
    }
}
