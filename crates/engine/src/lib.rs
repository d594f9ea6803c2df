//! Scene engine - explicit-context frame loop for the rasterizer
//!
//! Scenes never touch global state. Each frame the [`Engine`] builds a
//! [`SceneContext`] (canvas size, frame counter, elapsed time, held input)
//! and passes it into the active [`Scene`]'s `update` and `render`
//! callbacks. Rendering goes through the `asciirast-core` primitives only.
//!
//! # Example
//!
//! ```
//! use asciirast_engine::{Engine, StarScene};
//! use asciirast_engine::core::Canvas;
//! use asciirast_engine::types::color::{BLACK, WHITE};
//!
//! let canvas = Canvas::new(40, 20, WHITE, BLACK, b' ').unwrap();
//! let mut engine = Engine::new(canvas, Box::new(StarScene::new()));
//!
//! engine.tick(16, 0);
//! let frame = engine.render();
//! assert!(frame.glyph_values().contains(&b'0'));
//! ```

pub mod context;
pub mod engine;
pub mod scene;
pub mod scenes;

pub use asciirast_core as core;
pub use asciirast_types as types;

pub use context::{rotate, SceneContext};
pub use engine::Engine;
pub use scene::Scene;
pub use scenes::{SpiralScene, StarScene};
