//! `Period`, a delay length expressed in a [`TimeUnit`].

use crate::time_unit::TimeUnit;
use cpc_core::ensure;
use cpc_core::errors::Result;

/// A strictly positive length of time in days or months.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    length: u32,
    unit: TimeUnit,
}

impl Period {
    /// Create a new period.
    ///
    /// # Errors
    /// Returns a precondition error if `length` is zero.
    pub fn new(length: u32, unit: TimeUnit) -> Result<Self> {
        ensure!(length >= 1, "a delay must be at least one {unit}, got {length}");
        Ok(Self { length, unit })
    }

    /// `n` calendar days.
    pub fn days(n: u32) -> Result<Self> {
        Self::new(n, TimeUnit::Days)
    }

    /// `n` calendar months.
    pub fn months(n: u32) -> Result<Self> {
        Self::new(n, TimeUnit::Months)
    }

    /// Number of units (always ≥ 1).
    pub fn length(&self) -> u32 {
        self.length
    }

    /// The unit of time.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }
}

impl std::fmt::Display for Period {
    /// French rendering, e.g. `30 jours`, `3 mois`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.length, self.unit.french_noun(self.length))
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abbr = match self.unit {
            TimeUnit::Days => "D",
            TimeUnit::Months => "M",
        };
        write!(f, "Period({}{abbr})", self.length)
    }
}
