use std::time::Duration;

use winit::dpi::LogicalSize;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,

    /// Persistent clear color used by the render thread.
    pub clear_color: wgpu::Color,

    /// How long shutdown waits for the render thread to confirm its exit
    /// before destroying the window anyway.
    pub render_exit_timeout: Duration,

    /// Log adapter details when the render thread takes the context.
    pub log_adapter: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "Hello World!".to_string(),
            initial_size: LogicalSize::new(300.0, 300.0),
            resizable: true,
            clear_color: wgpu::Color {
                r: 0.3,
                g: 0.5,
                b: 0.7,
                a: 0.0,
            },
            render_exit_timeout: Duration::from_secs(2),
            log_adapter: true,
        }
    }
}
