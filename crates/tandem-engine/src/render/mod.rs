//! Render thread and the content it draws.
//!
//! The render thread is generic over [`FrameTarget`]; [`SpinningQuad`] is the
//! wgpu-backed target used by the runtime. Tests drive the same loop with a
//! recording target, no GPU involved.

pub mod projection;
mod quad;
mod spinning_quad;
mod target;
mod thread;

pub use quad::QuadRenderer;
pub use spinning_quad::SpinningQuad;
pub use target::{FrameInput, FrameTarget};
pub use thread::{RenderExit, RenderSlot, RenderThread};

#[cfg(test)]
pub(crate) use thread::tests::{MockTarget, Probe};
