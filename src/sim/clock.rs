//! Fixed-rate repeating timers driven by wall-clock deltas

/// Repeating timer: accumulates elapsed time and reports how many intervals
/// fired. Once cancelled it never fires again.
#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    interval_ms: f32,
    elapsed_ms: f32,
    cancelled: bool,
}

impl RepeatingTimer {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0.0,
            cancelled: false,
        }
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Add `dt_ms` and return the number of intervals that elapsed
    pub fn advance(&mut self, dt_ms: f32) -> u32 {
        if self.cancelled {
            return 0;
        }
        self.elapsed_ms += dt_ms;
        let mut fires = 0;
        while self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            fires += 1;
        }
        fires
    }

    /// Stop the timer. Returns false if it was already cancelled.
    pub fn cancel(&mut self) -> bool {
        if self.cancelled {
            log::warn!("Repeating timer ({} ms) cancelled twice", self.interval_ms);
            return false;
        }
        self.cancelled = true;
        self.elapsed_ms = 0.0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_per_interval() {
        let mut timer = RepeatingTimer::new(100.0);
        assert_eq!(timer.advance(50.0), 0);
        assert_eq!(timer.advance(60.0), 1);
        assert_eq!(timer.advance(250.0), 2);
        // 10 left over + 250 = 260 -> 2 fires, 60 left
        assert_eq!(timer.advance(40.0), 1);
    }

    #[test]
    fn test_cancel_once() {
        let mut timer = RepeatingTimer::new(100.0);
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert_eq!(timer.advance(10_000.0), 0);
        assert!(timer.is_cancelled());
    }
}
