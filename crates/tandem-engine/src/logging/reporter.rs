use std::any::Any;
use std::panic::{self, PanicHookInfo};

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Process-wide error reporter.
///
/// Installs a panic hook that reports `(location, message)` through `log::error!`
/// for every thread, so a render-thread failure shows up next to the event
/// thread's diagnostics. Installed once at startup and released once during
/// shutdown, restoring the hook that was active before.
pub struct ErrorReporter {
    previous: Option<PanicHook>,
}

impl ErrorReporter {
    pub fn install() -> Self {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|info| {
            let thread = std::thread::current();
            let location = info
                .location()
                .map(|l| format!("{}:{}", l.file(), l.line()))
                .unwrap_or_else(|| "<unknown>".to_string());
            log::error!(
                "thread '{}' panicked at {location}: {}",
                thread.name().unwrap_or("unnamed"),
                panic_message(info.payload()),
            );
        }));
        log::debug!("error reporter installed");

        Self {
            previous: Some(previous),
        }
    }

    /// Restores the previous panic hook.
    pub fn release(mut self) {
        self.restore();
    }

    fn restore(&mut self) {
        if let Some(previous) = self.previous.take() {
            panic::set_hook(previous);
            log::debug!("error reporter released");
        }
    }
}

impl Drop for ErrorReporter {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Extracts the human-readable message from a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, PoisonError};

    // Only this test replaces the process panic hook; other tests merely panic.
    #[test]
    fn release_restores_previous_hook() {
        static SEEN: Mutex<Vec<String>> = Mutex::new(Vec::new());

        let original = panic::take_hook();
        panic::set_hook(Box::new(|info| {
            SEEN.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(panic_message(info.payload()).to_string());
        }));

        let reporter = ErrorReporter::install();
        let _ = panic::catch_unwind(|| panic!("while reporting"));
        reporter.release();
        let _ = panic::catch_unwind(|| panic!("after release"));

        drop(panic::take_hook());
        panic::set_hook(original);

        let seen = SEEN.lock().unwrap();
        assert!(!seen.iter().any(|m| m == "while reporting"));
        assert!(seen.iter().any(|m| m == "after release"));
    }

    #[test]
    fn message_from_static_str() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
    }

    #[test]
    fn message_from_formatted_string() {
        let payload: Box<dyn Any + Send> = Box::new(format!("frame {}", 7));
        assert_eq!(panic_message(payload.as_ref()), "frame 7");
    }

    #[test]
    fn message_from_other_payload() {
        let payload: Box<dyn Any + Send> = Box::new(42u32);
        assert_eq!(panic_message(payload.as_ref()), "non-string panic payload");
    }
}
