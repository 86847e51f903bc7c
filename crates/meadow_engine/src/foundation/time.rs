//! Time management utilities
//!
//! The [`FrameClock`] is owned by the render loop and supplies elapsed time and
//! the per-frame delta. [`PeriodicTimer`] turns elapsed time into discrete
//! firings that do not depend on frame rate.

use std::time::Instant;

/// Frame clock supplying monotonically increasing elapsed time
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a new clock at elapsed time zero
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance by wall-clock time since the previous tick (call once per frame)
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.advance(elapsed);
    }

    /// Advance by an explicit delta in seconds
    ///
    /// Negative and non-finite deltas are treated as zero so elapsed time never
    /// runs backwards.
    pub fn advance(&mut self, delta: f32) {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.delta_time = delta;
        self.total_time += delta;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time in seconds
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Fixed-interval timer driven by elapsed time
///
/// Fires once for every full interval crossed, however many frames that took.
#[derive(Debug, Clone)]
pub struct PeriodicTimer {
    interval: f32,
    next_fire: f32,
}

impl PeriodicTimer {
    /// Create a timer whose first firing is one `interval` after `start`
    ///
    /// `interval` must be positive and finite; callers validate it beforehand.
    pub fn new(interval: f32, start: f32) -> Self {
        debug_assert!(interval > 0.0 && interval.is_finite());
        Self {
            interval,
            next_fire: start + interval,
        }
    }

    /// Number of firings between the previous poll and `elapsed`
    ///
    /// Constant time for any gap. Non-finite `elapsed` never fires, and the
    /// count saturates at `u32::MAX`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn poll(&mut self, elapsed: f32) -> u32 {
        if !elapsed.is_finite() || elapsed < self.next_fire {
            return 0;
        }

        let crossed = ((elapsed - self.next_fire) / self.interval).floor() + 1.0;
        let advanced = crossed.mul_add(self.interval, self.next_fire);
        // Past f32 precision the step no longer moves the deadline; re-anchor just above `elapsed`
        self.next_fire = if advanced > elapsed {
            advanced
        } else {
            (elapsed + self.interval).max(next_after(elapsed))
        };
        // Float-to-int `as` saturates
        crossed as u32
    }

    /// Interval in seconds
    pub fn interval(&self) -> f32 {
        self.interval
    }
}

/// Smallest f32 greater than a finite `x`
fn next_after(x: f32) -> f32 {
    if x == 0.0 {
        f32::from_bits(1)
    } else if x > 0.0 {
        f32::from_bits(x.to_bits() + 1)
    } else {
        f32::from_bits(x.to_bits() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates() {
        let mut clock = FrameClock::new();
        clock.advance(0.5);
        clock.advance(0.25);

        assert_eq!(clock.total_time(), 0.75);
        assert_eq!(clock.delta_time(), 0.25);
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_advance_never_runs_backwards() {
        let mut clock = FrameClock::new();
        clock.advance(1.0);
        clock.advance(-3.0);
        clock.advance(f32::NAN);

        assert_eq!(clock.total_time(), 1.0);
        assert_eq!(clock.delta_time(), 0.0);
    }

    #[test]
    fn test_periodic_timer_fires_per_interval() {
        let mut timer = PeriodicTimer::new(5.0, 0.0);

        assert_eq!(timer.poll(4.9), 0);
        assert_eq!(timer.poll(5.0), 1);
        assert_eq!(timer.poll(9.0), 0);
        // One long frame crossing two intervals
        assert_eq!(timer.poll(19.0), 2);
        assert_eq!(timer.poll(20.0), 1);
    }

    #[test]
    fn test_periodic_timer_huge_gap_returns_at_once() {
        let mut timer = PeriodicTimer::new(5.0, 0.0);

        let fired = timer.poll(2.0e8);
        assert!(fired >= 39_999_000 && fired <= 40_001_000, "fired {fired}");
        assert!(timer.next_fire > 2.0e8);
        assert_eq!(timer.poll(2.0e8), 0);

        // Beyond f32 precision of the interval the deadline still moves
        let mut timer = PeriodicTimer::new(5.0, 0.0);
        assert!(timer.poll(1.0e30) > 0);
        assert_eq!(timer.poll(1.0e30), 0);
    }

    #[test]
    fn test_periodic_timer_ignores_non_finite_time() {
        let mut timer = PeriodicTimer::new(5.0, 0.0);

        assert_eq!(timer.poll(f32::INFINITY), 0);
        assert_eq!(timer.poll(f32::NAN), 0);
        assert_eq!(timer.poll(5.0), 1);
    }
}
