use std::sync::atomic::{AtomicU32, Ordering};

/// Drawable size in physical pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Width over height. Degenerate sizes report a square aspect.
    #[inline]
    pub fn aspect(self) -> f32 {
        if self.is_valid() {
            self.width as f32 / self.height as f32
        } else {
            1.0
        }
    }
}

/// Viewport written by the event thread and read by the render thread.
///
/// The two fields are independent relaxed atomics. A reader racing a resize may
/// observe the new width with the old height; the render loop tolerates that for
/// a single frame, so no lock is taken here.
#[derive(Debug, Default)]
pub struct SharedViewport {
    width: AtomicU32,
    height: AtomicU32,
}

impl SharedViewport {
    pub fn new(initial: Viewport) -> Self {
        Self {
            width: AtomicU32::new(initial.width),
            height: AtomicU32::new(initial.height),
        }
    }

    /// Stores `width`×`height` if both are positive.
    ///
    /// Returns whether the stored size was updated. Zero-size reports (minimized
    /// windows, transient compositor states) are ignored.
    pub fn update(&self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.width.store(width, Ordering::Relaxed);
        self.height.store(height, Ordering::Relaxed);
        true
    }

    #[inline]
    pub fn get(&self) -> Viewport {
        Viewport {
            width: self.width.load(Ordering::Relaxed),
            height: self.height.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_of_wide_viewport() {
        assert_eq!(Viewport::new(400, 200).aspect(), 2.0);
    }

    #[test]
    fn aspect_of_empty_viewport_is_square() {
        assert_eq!(Viewport::new(0, 200).aspect(), 1.0);
        assert_eq!(Viewport::default().aspect(), 1.0);
    }

    #[test]
    fn positive_resize_is_stored() {
        let shared = SharedViewport::new(Viewport::new(300, 300));
        assert!(shared.update(640, 480));
        assert_eq!(shared.get(), Viewport::new(640, 480));
    }

    #[test]
    fn zero_dimensions_never_change_the_viewport() {
        let shared = SharedViewport::new(Viewport::new(300, 300));
        for (w, h) in [(0, 0), (0, 480), (640, 0)] {
            assert!(!shared.update(w, h));
            assert_eq!(shared.get(), Viewport::new(300, 300));
        }
    }

    #[test]
    fn last_valid_write_wins() {
        let shared = SharedViewport::new(Viewport::new(300, 300));
        shared.update(800, 600);
        shared.update(0, 0);
        shared.update(1024, 768);
        shared.update(1024, 0);
        assert_eq!(shared.get(), Viewport::new(1024, 768));
    }
}
