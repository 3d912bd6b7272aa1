//! `TimeUnit`: the units a procedural delay is expressed in.

/// A unit of time for a legal delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Calendar days, counted one by one.
    Days,
    /// Calendar months, shifted by month number.
    Months,
}

impl TimeUnit {
    /// French noun for `n` units (`jour`/`jours`, `mois`).
    pub fn french_noun(&self, n: u32) -> &'static str {
        match (self, n) {
            (TimeUnit::Days, 1) => "jour",
            (TimeUnit::Days, _) => "jours",
            (TimeUnit::Months, _) => "mois",
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeUnit::Days => write!(f, "Day(s)"),
            TimeUnit::Months => write!(f, "Month(s)"),
        }
    }
}
