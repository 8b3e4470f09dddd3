//! Converts browser timestamps into whole-millisecond clock steps.

/// Tracks the last frame timestamp and carries sub-millisecond remainders
/// so the virtual clock does not drift behind wall time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    last_ms: Option<f64>,
    carry_ms: f64,
}

impl FrameClock {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_ms: None,
            carry_ms: 0.0,
        }
    }

    /// Whole milliseconds since the previous call. The first call returns 0.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn elapsed(&mut self, now_ms: f64) -> u64 {
        let Some(last) = self.last_ms.replace(now_ms) else {
            return 0;
        };
        let delta = (now_ms - last).max(0.0) + self.carry_ms;
        let whole = delta.floor();
        self.carry_ms = delta - whole;
        whole as u64
    }
}
