/// One-way urgency clock. Reaching zero has no effect beyond display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining() == 0
    }

    /// One second of active time.
    pub fn tick(self) -> Self {
        self.elapse(1)
    }

    pub fn elapse(self, seconds: u32) -> Self {
        Self { remaining: self.remaining.saturating_sub(seconds) }
    }

    pub fn formatted(&self) -> String {
        format_time(self.remaining())
    }
}

/// `m:ss`, minutes unpadded.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(180), "3:00");
        assert_eq!(format_time(59), "0:59");
    }

    #[test]
    fn remaining_is_initial_minus_elapsed_floored_at_zero() {
        for t in [0u32, 1, 90, 180, 181, 1000] {
            assert_eq!(Countdown::new(180).elapse(t).remaining(), 180u32.saturating_sub(t));
        }
    }

    #[test]
    fn ticking_stops_at_zero() {
        let mut c = Countdown::new(2);
        for _ in 0..5 {
            c = c.tick();
        }
        assert_eq!(c.remaining(), 0);
        assert!(c.is_expired());
        assert_eq!(c.formatted(), "0:00");
    }
}
