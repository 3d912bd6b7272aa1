//! Delay specification: the parameters one deadline computation runs on.

use cpc_core::errors::Result;
use cpc_time::{Date, Period};

/// Where the delay starts counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartRule {
    /// The day of notification is the first day (art. 142 al. 2 CPC).
    DayOfNotification,
    /// Counting starts the day after notification (art. 142 al. 1 CPC).
    DayAfterNotification,
}

impl StartRule {
    /// The anchor date: first day of the delay.
    pub fn anchor(&self, notified: Date) -> Result<Date> {
        match self {
            StartRule::DayOfNotification => Ok(notified),
            StartRule::DayAfterNotification => notified.succ(),
        }
    }

    /// French description with its legal basis.
    pub fn description(&self) -> &'static str {
        match self {
            StartRule::DayOfNotification => "jour de la notification - Art. 142 al. 2 CPC",
            StartRule::DayAfterNotification => {
                "lendemain de la notification - Art. 142 al. 1 CPC"
            }
        }
    }
}

/// The resolved parameters of one delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DelaySpec {
    /// Length and unit.
    pub period: Period,
    /// Start-of-counting rule.
    pub start: StartRule,
    /// Whether recess days suspend the delay.
    pub recess_applies: bool,
}

impl DelaySpec {
    /// Build a delay specification.
    pub fn new(period: Period, start: StartRule, recess_applies: bool) -> Self {
        Self {
            period,
            start,
            recess_applies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors() {
        let d = Date::from_ymd(2024, 5, 10).unwrap();
        assert_eq!(StartRule::DayOfNotification.anchor(d).unwrap(), d);
        assert_eq!(
            StartRule::DayAfterNotification.anchor(d).unwrap(),
            Date::from_ymd(2024, 5, 11).unwrap()
        );
    }
}
