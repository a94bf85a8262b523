use std::sync::Arc;

use winit::window::Window;

use crate::input::EventHandlers;
use crate::logging::ErrorReporter;

use super::shutdown::Teardown;

/// Resources the event thread holds for one run, released by shutdown.
#[derive(Default)]
pub(crate) struct Session {
    pub(crate) window: Option<Arc<Window>>,
    pub(crate) handlers: Option<EventHandlers>,
    pub(crate) instance: Option<wgpu::Instance>,
    pub(crate) reporter: Option<ErrorReporter>,
}

impl Session {
    pub(crate) fn with_reporter(reporter: ErrorReporter) -> Self {
        Self {
            reporter: Some(reporter),
            ..Self::default()
        }
    }
}

impl Teardown for Session {
    fn destroy_window(&mut self) {
        let Some(window) = self.window.take() else {
            return;
        };
        window.set_visible(false);

        // Only a render thread that missed the exit wait still holds a handle,
        // through its surface. The native window goes away when that thread
        // drops it.
        let others = Arc::strong_count(&window) - 1;
        if others > 0 {
            log::warn!("window hidden; {others} handle(s) held by the detached render thread");
        }
        drop(window);
        log::debug!("window destroyed");
    }

    fn release_handlers(&mut self) {
        if self.handlers.take().is_some() {
            log::debug!("event handlers released");
        }
    }

    fn terminate(&mut self) {
        if self.instance.take().is_some() {
            log::debug!("graphics subsystem terminated");
        }
    }

    fn release_error_reporter(&mut self) {
        if let Some(reporter) = self.reporter.take() {
            reporter.release();
        }
    }
}
