use anyhow::{bail, Result};
use winit::dpi::PhysicalSize;

use crate::device::{DebugHook, Gpu, SurfaceErrorAction};

use super::projection::{quad_transform, Spin};
use super::{FrameInput, FrameTarget, QuadRenderer};

/// Demo content: a white unit quad rotating at a steady rate on a fixed clear
/// color, aspect-corrected to the window.
pub struct SpinningQuad {
    gpu: Gpu,
    renderer: QuadRenderer,
    spin: Spin,
    clear: wgpu::Color,
    log_adapter: bool,
    debug: bool,
    debug_hook: Option<DebugHook>,
}

impl SpinningQuad {
    pub fn new(gpu: Gpu, clear: wgpu::Color) -> Self {
        Self {
            gpu,
            renderer: QuadRenderer::new(),
            spin: Spin::default(),
            clear,
            log_adapter: false,
            debug: false,
            debug_hook: None,
        }
    }

    /// Logs adapter details when the render thread takes the context.
    pub fn with_adapter_log(mut self, enabled: bool) -> Self {
        self.log_adapter = enabled;
        self
    }

    /// Installs a [`DebugHook`] on the device when the render thread takes the
    /// context. A reported error stops the render loop.
    pub fn with_debug_hook(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    fn sync_surface_size(&mut self, input: &FrameInput) {
        let vp = input.viewport;
        if !vp.is_valid() {
            return;
        }
        let wanted = PhysicalSize::new(vp.width, vp.height);
        if self.gpu.size() != wanted {
            log::debug!("surface resize {}x{}", vp.width, vp.height);
            self.gpu.resize(wanted);
        }
    }
}

impl FrameTarget for SpinningQuad {
    type Frame = wgpu::SurfaceTexture;

    fn make_current(&mut self) -> Result<()> {
        if self.log_adapter {
            let info = self.gpu.adapter_info();
            log::info!(
                "render context: {} ({:?}, {:?})",
                info.name,
                info.backend,
                info.device_type
            );
        }
        if self.debug {
            self.debug_hook = Some(DebugHook::install(self.gpu.device()));
        }
        log::debug!("clear color {:?}", self.clear);
        Ok(())
    }

    fn draw(&mut self, input: &FrameInput) -> Result<Option<Self::Frame>> {
        self.sync_surface_size(input);
        self.spin.advance(input.time.dt);

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => match self.gpu.handle_surface_error(err) {
                SurfaceErrorAction::Fatal => bail!("surface is out of memory"),
                SurfaceErrorAction::Reconfigured | SurfaceErrorAction::Skip => return Ok(None),
            },
        };

        // Projection follows the texture actually acquired, not the requested size.
        let transform = quad_transform(frame.viewport, &self.spin);
        self.renderer.render(&self.gpu, &mut frame, self.clear, transform);
        let texture = self.gpu.submit(frame);

        if let Some(message) = self.debug_hook.as_ref().and_then(DebugHook::take_error) {
            bail!("graphics error while drawing: {message}");
        }
        Ok(Some(texture))
    }

    fn swap(&mut self, frame: Self::Frame) {
        frame.present();
    }
}
