//! Score counter and display formatting

/// Zero-pad `value` to `digits` characters.
///
/// Values wider than `digits` are shown in full rather than truncated, so a
/// score of 123456 on a 5-digit display reads "123456".
pub fn format_score(value: u32, digits: usize) -> String {
    format!("{:0width$}", value, width = digits)
}

/// Per-run score, advanced by the fixed-rate score tick
#[derive(Debug, Clone)]
pub struct ScoreTracker {
    value: u32,
    digits: usize,
    milestone: u32,
}

impl ScoreTracker {
    pub fn new(digits: usize, milestone: u32) -> Self {
        Self {
            value: 0,
            digits,
            milestone,
        }
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Add one point. Returns the new score if it landed on a milestone.
    pub fn tick(&mut self) -> Option<u32> {
        self.value = self.value.saturating_add(1);
        if self.milestone > 0 && self.value % self.milestone == 0 {
            Some(self.value)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    /// Score as shown on the HUD
    pub fn display(&self) -> String {
        format_score(self.value, self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pads() {
        assert_eq!(format_score(0, 5), "00000");
        assert_eq!(format_score(42, 5), "00042");
        assert_eq!(format_score(99999, 5), "99999");
    }

    #[test]
    fn test_format_widens_on_overflow() {
        assert_eq!(format_score(100000, 5), "100000");
    }

    #[test]
    fn test_tick_and_milestones() {
        let mut score = ScoreTracker::new(5, 100);
        let mut milestones = Vec::new();
        for _ in 0..250 {
            if let Some(m) = score.tick() {
                milestones.push(m);
            }
        }
        assert_eq!(score.value(), 250);
        assert_eq!(score.display(), "00250");
        assert_eq!(milestones, vec![100, 200]);

        score.reset();
        assert_eq!(score.display(), "00000");
    }

    #[test]
    fn test_milestone_disabled() {
        let mut score = ScoreTracker::new(5, 0);
        assert!((0..300).all(|_| score.tick().is_none()));
    }
}
