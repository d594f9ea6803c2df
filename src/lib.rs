//! ASCII rasterizer (workspace facade crate).
//!
//! Re-exports the member crates under one `asciirast::{core,engine,input,term,types}`
//! namespace and hosts the binary's environment configuration.

pub mod config;

pub use asciirast_core as core;
pub use asciirast_engine as engine;
pub use asciirast_input as input;
pub use asciirast_term as term;
pub use asciirast_types as types;
