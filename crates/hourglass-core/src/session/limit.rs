use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_HOURS: u32 = 23;
pub const MAX_MINUTES: u32 = 59;
pub const MAX_SECONDS: u32 = 59;

/// Per-platform usage allowance.
///
/// Fields are clamped to their stepper ranges on construction and on every
/// write, so a stored limit is always within [0,23]h [0,59]m [0,59]s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeLimit {
    pub id: Uuid,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeLimit {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            hours: hours.min(MAX_HOURS),
            minutes: minutes.min(MAX_MINUTES),
            seconds: seconds.min(MAX_SECONDS),
        }
    }

    /// A fresh zero allowance, as created by the first "set time" intent.
    pub fn zero() -> Self {
        Self::new(0, 0, 0)
    }

    /// Overwrite all three fields, clamping each to its range.
    /// The limit's identity is kept.
    pub fn set(&mut self, hours: u32, minutes: u32, seconds: u32) {
        self.hours = hours.min(MAX_HOURS);
        self.minutes = minutes.min(MAX_MINUTES);
        self.seconds = seconds.min(MAX_SECONDS);
    }

    /// Total allowance in seconds.
    pub fn total_secs(&self) -> u64 {
        (self.hours as u64)
            .saturating_mul(3600)
            .saturating_add((self.minutes as u64).saturating_mul(60))
            .saturating_add(self.seconds as u64)
    }

    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_clamps_out_of_range_fields() {
        let limit = TimeLimit::new(99, 99, 99);
        assert_eq!(limit.hours, 23);
        assert_eq!(limit.minutes, 59);
        assert_eq!(limit.seconds, 59);
    }

    #[test]
    fn set_clamps_and_keeps_identity() {
        let mut limit = TimeLimit::zero();
        let id = limit.id;
        limit.set(1, 200, 30);
        assert_eq!(limit.hours, 1);
        assert_eq!(limit.minutes, 59);
        assert_eq!(limit.seconds, 30);
        assert_eq!(limit.id, id);
    }

    #[test]
    fn total_secs_converts() {
        let limit = TimeLimit::new(1, 2, 3);
        assert_eq!(limit.total_secs(), 3723);
        assert!(TimeLimit::zero().is_zero());
    }

    proptest! {
        #[test]
        fn stored_fields_always_in_range(h in 0u32..1000, m in 0u32..1000, s in 0u32..1000) {
            let limit = TimeLimit::new(h, m, s);
            prop_assert!(limit.hours <= MAX_HOURS);
            prop_assert!(limit.minutes <= MAX_MINUTES);
            prop_assert!(limit.seconds <= MAX_SECONDS);
            prop_assert!(limit.total_secs() <= 23 * 3600 + 59 * 60 + 59);
        }
    }
}
