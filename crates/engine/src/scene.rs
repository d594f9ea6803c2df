//! The scene callback interface.

use crate::context::SceneContext;
use crate::core::Canvas;
use crate::types::SceneAction;

/// A self-contained animation driven by the [`Engine`](crate::Engine).
///
/// The engine clears the canvas before every `render`, so scenes only draw.
pub trait Scene {
    fn name(&self) -> &'static str;

    /// React to a discrete user action. Rotation is read from
    /// [`SceneContext::rotation_input`] in `update` instead.
    fn on_action(&mut self, _action: SceneAction) {}

    /// Advance the simulation by `dt_ms`.
    fn update(&mut self, ctx: &SceneContext, dt_ms: u32);

    fn render(&self, ctx: &SceneContext, canvas: &mut Canvas);
}
