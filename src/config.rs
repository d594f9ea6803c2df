//! Runtime configuration read from `ASCIIRAST_*` environment variables.

use std::env;

use crate::term::PresentMode;

pub const DEFAULT_WIDTH: u32 = 60;
pub const DEFAULT_HEIGHT: u32 = 30;
pub const DEFAULT_FPS: u32 = 30;
pub const DEFAULT_SCENE: &str = "star";

const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub mode: PresentMode,
    pub scene: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fps: DEFAULT_FPS,
            mode: PresentMode::WithBackground,
            scene: DEFAULT_SCENE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Missing or
    /// unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let positive = |key: &str, default: u32| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u32>().ok())
                .filter(|&v| v > 0)
                .unwrap_or(default)
        };

        let mode = match lookup("ASCIIRAST_NO_BG").map(|s| s.trim().to_ascii_lowercase()) {
            Some(v) if v == "1" || v == "true" => PresentMode::ForegroundOnly,
            _ => PresentMode::WithBackground,
        };

        let scene = lookup("ASCIIRAST_SCENE")
            .map(|s| s.trim().to_ascii_lowercase())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .unwrap_or_else(|| DEFAULT_SCENE.to_string());

        Self {
            width: positive("ASCIIRAST_WIDTH", DEFAULT_WIDTH),
            height: positive("ASCIIRAST_HEIGHT", DEFAULT_HEIGHT),
            fps: positive("ASCIIRAST_FPS", DEFAULT_FPS).min(MAX_FPS),
            mode,
            scene,
        }
    }

    /// Frame period in whole milliseconds (at least 1).
    pub fn frame_ms(&self) -> u32 {
        (1000 / self.fps.max(1)).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(from_pairs(&[]), AppConfig::default());
        assert_eq!(AppConfig::default().frame_ms(), 33);
    }

    #[test]
    fn parses_all_variables() {
        let cfg = from_pairs(&[
            ("ASCIIRAST_WIDTH", "80"),
            ("ASCIIRAST_HEIGHT", " 24 "),
            ("ASCIIRAST_FPS", "60"),
            ("ASCIIRAST_NO_BG", "TRUE"),
            ("ASCIIRAST_SCENE", "Spiral"),
        ]);
        assert_eq!(cfg.width, 80);
        assert_eq!(cfg.height, 24);
        assert_eq!(cfg.fps, 60);
        assert_eq!(cfg.mode, PresentMode::ForegroundOnly);
        assert_eq!(cfg.scene, "spiral");
        assert_eq!(cfg.frame_ms(), 16);
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = from_pairs(&[
            ("ASCIIRAST_WIDTH", "wide"),
            ("ASCIIRAST_HEIGHT", "0"),
            ("ASCIIRAST_FPS", "100000"),
            ("ASCIIRAST_NO_BG", "0"),
            ("ASCIIRAST_SCENE", "  "),
        ]);
        assert_eq!(cfg.width, DEFAULT_WIDTH);
        assert_eq!(cfg.height, DEFAULT_HEIGHT);
        assert_eq!(cfg.fps, MAX_FPS);
        assert_eq!(cfg.mode, PresentMode::WithBackground);
        assert_eq!(cfg.scene, DEFAULT_SCENE);
    }
}
