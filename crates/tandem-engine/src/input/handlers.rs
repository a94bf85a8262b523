//! Event handlers installed on the event thread.
//!
//! Both handlers are plain state transitions: a key event may request close, a
//! resize event may update the shared viewport. The runtime owns them through
//! [`EventHandlers`] and drops that value during shutdown.

use std::sync::Arc;

use crate::coords::SharedViewport;

use super::{Key, KeyEvent, KeyState};

/// Result of dispatching an event to a handler.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HandlerControl {
    Continue,
    RequestClose,
}

/// Escape *release* requests close. Presses and every other key are ignored.
pub fn close_on_escape(event: KeyEvent) -> HandlerControl {
    match event {
        KeyEvent {
            key: Key::Escape,
            state: KeyState::Released,
            ..
        } => HandlerControl::RequestClose,
        _ => HandlerControl::Continue,
    }
}

type KeyHandler = Box<dyn FnMut(KeyEvent) -> HandlerControl>;
type ResizeHandler = Box<dyn FnMut(u32, u32) -> bool>;

/// Handlers registered for the lifetime of the window.
pub struct EventHandlers {
    key: KeyHandler,
    resize: ResizeHandler,
}

impl EventHandlers {
    /// Escape-to-close plus a resize handler writing into `viewport`.
    pub fn new(viewport: Arc<SharedViewport>) -> Self {
        Self {
            key: Box::new(close_on_escape),
            resize: Box::new(move |w, h| viewport.update(w, h)),
        }
    }

    pub fn on_key(&mut self, event: KeyEvent) -> HandlerControl {
        (self.key)(event)
    }

    /// Returns whether the viewport changed.
    pub fn on_resize(&mut self, width: u32, height: u32) -> bool {
        (self.resize)(width, height)
    }
}

impl std::fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHandlers").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Viewport;

    #[test]
    fn escape_release_requests_close() {
        let ev = KeyEvent::new(Key::Escape, KeyState::Released);
        assert_eq!(close_on_escape(ev), HandlerControl::RequestClose);
    }

    #[test]
    fn escape_press_does_not_close() {
        let ev = KeyEvent::new(Key::Escape, KeyState::Pressed);
        assert_eq!(close_on_escape(ev), HandlerControl::Continue);
    }

    #[test]
    fn other_keys_do_not_close() {
        for key in [Key::Other(30), Key::Unidentified] {
            let ev = KeyEvent::new(key, KeyState::Released);
            assert_eq!(close_on_escape(ev), HandlerControl::Continue);
        }
    }

    #[test]
    fn resize_handler_filters_empty_sizes() {
        let viewport = Arc::new(SharedViewport::new(Viewport::new(300, 300)));
        let mut handlers = EventHandlers::new(viewport.clone());

        assert!(!handlers.on_resize(0, 200));
        assert!(!handlers.on_resize(200, 0));
        assert_eq!(viewport.get(), Viewport::new(300, 300));

        assert!(handlers.on_resize(400, 200));
        assert_eq!(viewport.get(), Viewport::new(400, 200));
    }

    #[test]
    fn dropping_handlers_releases_viewport_reference() {
        let viewport = Arc::new(SharedViewport::default());
        let handlers = EventHandlers::new(viewport.clone());
        assert_eq!(Arc::strong_count(&viewport), 2);
        drop(handlers);
        assert_eq!(Arc::strong_count(&viewport), 1);
    }
}
