use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Debug-message hook on the render thread's device.
///
/// Uncaptured wgpu errors are logged as they arrive and the first one is kept
/// until the render loop collects it with [`DebugHook::take_error`]. Dropping
/// the hook releases it: the handler stays registered with the device but
/// ignores everything afterwards.
pub struct DebugHook {
    sink: Arc<ErrorSink>,
}

#[derive(Default)]
struct ErrorSink {
    released: AtomicBool,
    first: Mutex<Option<String>>,
}

impl ErrorSink {
    fn report(&self, message: String) {
        if self.released.load(Ordering::Acquire) {
            return;
        }
        log::error!("wgpu: {message}");

        let mut first = self.first.lock().unwrap_or_else(PoisonError::into_inner);
        if first.is_none() {
            *first = Some(message);
        }
    }

    fn take(&self) -> Option<String> {
        self.first
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl DebugHook {
    /// Routes `device`'s uncaptured errors into a new hook.
    pub fn install(device: &wgpu::Device) -> Self {
        let hook = Self::new();
        let sink = hook.sink.clone();
        device.on_uncaptured_error(Arc::new(move |err: wgpu::Error| sink.report(err.to_string())));
        log::debug!("debug hook installed");
        hook
    }

    fn new() -> Self {
        Self {
            sink: Arc::new(ErrorSink::default()),
        }
    }

    /// First error reported since the previous call, if any.
    pub fn take_error(&self) -> Option<String> {
        self.sink.take()
    }
}

impl Drop for DebugHook {
    fn drop(&mut self) {
        self.sink.released.store(true, Ordering::Release);
        log::debug!("debug hook released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_error_until_taken() {
        let hook = DebugHook::new();
        hook.sink.report("invalid bind group".to_string());
        hook.sink.report("invalid pipeline".to_string());

        assert_eq!(hook.take_error().as_deref(), Some("invalid bind group"));
        assert_eq!(hook.take_error(), None);
    }

    #[test]
    fn released_hook_ignores_late_errors() {
        let hook = DebugHook::new();
        let sink = hook.sink.clone();
        drop(hook);

        sink.report("device lost".to_string());
        assert_eq!(sink.take(), None);
    }
}
