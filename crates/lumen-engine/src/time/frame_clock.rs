use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,

    /// Seconds since the clock was created or last reset, summed from clamped deltas.
    pub elapsed: f32,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// One clock per window so multi-window runs do not share delta-time state.
/// Deltas are clamped: the minimum avoids zero-dt frames from tight loops,
/// the maximum keeps animation stable after stalls (debugger, minimized window).
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    elapsed: Duration,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub const DEFAULT_DT_MIN: Duration = Duration::from_micros(100);
    pub const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::with_clamps(Self::DEFAULT_DT_MIN, Self::DEFAULT_DT_MAX)
    }

    /// Creates a clock with custom delta-time clamps. Swapped bounds are reordered.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        Self {
            last: Instant::now(),
            elapsed: Duration::ZERO,
            frame_index: 0,
            dt_min: dt_min.min(dt_max),
            dt_max: dt_max.max(dt_min),
        }
    }

    /// Resets the baseline, the elapsed total and the frame counter.
    pub fn reset(&mut self) {
        self.last = Instant::now();
        self.elapsed = Duration::ZERO;
        self.frame_index = 0;
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    pub(crate) fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;
        self.elapsed += dt;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: self.elapsed.as_secs_f32(),
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
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
    fn long_stall_is_clamped() {
        let mut clock = FrameClock::new();
        let t = clock.tick_at(clock.last + Duration::from_secs(5));
        assert_eq!(t.dt, FrameClock::DEFAULT_DT_MAX.as_secs_f32());
    }

    #[test]
    fn zero_delta_is_raised_to_minimum() {
        let mut clock = FrameClock::new();
        let now = clock.last;
        let t = clock.tick_at(now);
        assert_eq!(t.dt, FrameClock::DEFAULT_DT_MIN.as_secs_f32());
    }

    #[test]
    fn frame_index_and_elapsed_advance() {
        let mut clock = FrameClock::with_clamps(Duration::ZERO, Duration::from_secs(1));
        let start = clock.last;
        let a = clock.tick_at(start + Duration::from_millis(10));
        let b = clock.tick_at(start + Duration::from_millis(30));
        assert_eq!((a.frame_index, b.frame_index), (0, 1));
        assert!((b.elapsed - 0.030).abs() < 1e-6);
    }

    #[test]
    fn swapped_clamps_are_reordered() {
        let clock = FrameClock::with_clamps(Duration::from_secs(1), Duration::from_millis(1));
        assert!(clock.dt_min <= clock.dt_max);
    }
}
