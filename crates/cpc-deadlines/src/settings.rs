//! Calculator settings.
//!
//! [`Settings`] is a plain value handed to each
//! [`DeadlineCalculator`](crate::DeadlineCalculator); there is no
//! process-wide state, so concurrent calculators with different settings
//! never interfere.

use std::str::FromStr;

use cpc_core::errors::{Error, Result};

/// How a month-based delay is extended for the recess days it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecessExtension {
    /// Shift the due date forward by the number of recess days in
    /// `[anchor, due date]`, without looking at the days the shift lands on.
    #[default]
    Flat,
    /// Walk forward over the same number of days, skipping any further
    /// recess days met on the way.
    Rewalk,
}

impl RecessExtension {
    /// Stable identifier.
    pub fn key(&self) -> &'static str {
        match self {
            RecessExtension::Flat => "flat",
            RecessExtension::Rewalk => "rewalk",
        }
    }
}

impl FromStr for RecessExtension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(RecessExtension::Flat),
            "rewalk" => Ok(RecessExtension::Rewalk),
            other => Err(Error::InvalidArgument(format!(
                "unknown recess extension `{other}` (expected `flat` or `rewalk`)"
            ))),
        }
    }
}

impl std::fmt::Display for RecessExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Settings of a deadline calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Settings {
    /// Recess extension policy for month-based delays.
    pub recess_extension: RecessExtension,
}

impl Settings {
    /// Settings with the given recess extension policy.
    pub fn with_recess_extension(mut self, recess_extension: RecessExtension) -> Self {
        self.recess_extension = recess_extension;
        self
    }
}
