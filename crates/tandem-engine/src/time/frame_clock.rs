use std::time::{Duration, Instant};

const DT_MIN: Duration = Duration::from_micros(100);
const DT_MAX: Duration = Duration::from_millis(250);

/// Timing snapshot for one render iteration.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick. Always positive.
    pub dt: f32,
}

/// Produces forward-moving, clamped frame deltas.
///
/// Deltas are `now - previous`, clamped to `[100µs, 250ms]`: the floor keeps
/// animation moving when the loop spins faster than the timer resolution, the
/// ceiling keeps a stalled thread (debugger, minimized window) from producing a
/// large jump on resume.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(DT_MIN, DT_MAX);
        self.last = now;

        FrameTime {
            dt: dt.as_secs_f32(),
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_forward_elapsed_time() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        let t = clock.tick_at(start + Duration::from_millis(16));
        assert!((t.dt - 0.016).abs() < 1e-6);
        assert!(t.dt > 0.0);
    }

    #[test]
    fn tiny_delta_is_raised_to_floor() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        let t = clock.tick_at(start);
        assert_eq!(t.dt, DT_MIN.as_secs_f32());
    }

    #[test]
    fn stall_is_capped() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        let t = clock.tick_at(start + Duration::from_secs(5));
        assert_eq!(t.dt, DT_MAX.as_secs_f32());
    }

    #[test]
    fn backwards_instant_saturates() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        clock.tick_at(start + Duration::from_millis(10));
        let t = clock.tick_at(start);
        assert!(t.dt > 0.0);
    }
}
