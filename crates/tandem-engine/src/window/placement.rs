use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::monitor::MonitorHandle;

/// Primary monitor, or the first one reported when the platform has no notion
/// of a primary (Wayland).
pub(crate) fn primary_display(event_loop: &ActiveEventLoop) -> Option<MonitorHandle> {
    event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())
}

/// Top-left position that centers `window` on `monitor`'s current resolution.
pub(crate) fn centered_on(monitor: &MonitorHandle, window: LogicalSize<f64>) -> LogicalPosition<f64> {
    let scale = monitor.scale_factor();
    let display: LogicalSize<f64> = monitor.size().to_logical(scale);
    let origin: LogicalPosition<f64> = monitor.position().to_logical(scale);
    let offset = centered(display, window);
    LogicalPosition::new(origin.x + offset.x, origin.y + offset.y)
}

/// Offset of a centered `window` inside `display`, clamped so the title bar
/// stays reachable when the window is larger than the display.
fn centered(display: LogicalSize<f64>, window: LogicalSize<f64>) -> LogicalPosition<f64> {
    LogicalPosition::new(
        ((display.width - window.width) / 2.0).max(0.0),
        ((display.height - window.height) / 2.0).max(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_on_1080p() {
        let p = centered(LogicalSize::new(1920.0, 1080.0), LogicalSize::new(300.0, 300.0));
        assert_eq!((p.x, p.y), (810.0, 390.0));
    }

    #[test]
    fn oversized_window_pins_to_origin() {
        let p = centered(LogicalSize::new(800.0, 600.0), LogicalSize::new(1000.0, 300.0));
        assert_eq!((p.x, p.y), (0.0, 150.0));
    }
}
