/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). FIFO paces the render loop to the display.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference; falls back to a supported mode.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Hint for the surface's maximum frame latency.
    pub desired_maximum_frame_latency: u32,

    /// Enables backend validation on the instance and a [`DebugHook`] on the
    /// render thread's device.
    ///
    /// [`DebugHook`]: super::DebugHook
    pub debug: bool,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
            debug: cfg!(debug_assertions),
        }
    }
}

/// Creates the wgpu instance.
///
/// The instance stays with the event thread for the whole run and is dropped
/// during shutdown, after the window.
pub fn create_instance(init: &GpuInit) -> wgpu::Instance {
    let flags = if init.debug {
        wgpu::InstanceFlags::debugging()
    } else {
        wgpu::InstanceFlags::from_build_config()
    };

    wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        flags,
        ..Default::default()
    })
}
