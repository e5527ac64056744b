//! Warmup sequence between the start trigger and the first running frame
//!
//! The ground strip grows by a fixed step per warmup tick. The visible strip
//! stops at the viewport width, but the accumulator keeps going until a
//! separate, larger completion width is reached; only then does the run start
//! and the visible width snap to the viewport.

/// Outcome of one warmup tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarmupStep {
    Growing,
    Complete,
}

/// Ground-width accumulator for the warmup
#[derive(Debug, Clone)]
pub struct WarmupProgress {
    width: f32,
    ticks: u32,
    complete: bool,
}

impl WarmupProgress {
    pub fn new(start_width: f32) -> Self {
        Self {
            width: start_width,
            ticks: 0,
            complete: false,
        }
    }

    /// Accumulated ground width
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Width the ground strip should be drawn at
    pub fn visible_width(&self, viewport_width: f32) -> f32 {
        self.width.min(viewport_width)
    }

    /// Grow by `growth`; complete once `complete_width` is reached.
    /// Further calls after completion do nothing.
    pub fn advance(&mut self, growth: f32, complete_width: f32) -> WarmupStep {
        if self.complete {
            return WarmupStep::Complete;
        }
        self.ticks += 1;
        self.width += growth;
        if self.width >= complete_width {
            self.complete = true;
            WarmupStep::Complete
        } else {
            WarmupStep::Growing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_after_passing_both_thresholds() {
        let mut warmup = WarmupProgress::new(88.0);

        let mut reached_viewport_at = None;
        while warmup.advance(34.0, 1000.0) == WarmupStep::Growing {
            if reached_viewport_at.is_none() && warmup.width() >= 600.0 {
                reached_viewport_at = Some(warmup.ticks());
            }
            assert!(warmup.visible_width(600.0) <= 600.0);
        }

        // 88 + 34 * 16 = 632 >= 600; 88 + 34 * 27 = 1006 >= 1000
        assert_eq!(reached_viewport_at, Some(16));
        assert_eq!(warmup.ticks(), 27);
        assert_eq!(warmup.width(), 1006.0);
        assert!(warmup.is_complete());
    }

    #[test]
    fn test_advance_after_complete_is_inert() {
        let mut warmup = WarmupProgress::new(990.0);
        assert_eq!(warmup.advance(34.0, 1000.0), WarmupStep::Complete);
        assert_eq!(warmup.advance(34.0, 1000.0), WarmupStep::Complete);
        assert_eq!(warmup.ticks(), 1);
        assert_eq!(warmup.width(), 1024.0);
    }
}
