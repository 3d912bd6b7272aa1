//! Computation trace.
//!
//! The calculator records each rule it applies as a [`TraceStep`].  Steps
//! carry structured dates; their `Display` renders the French explanation
//! shown to court users, with dates written `dd.mm.yyyy`.

use std::fmt;

use crate::act::AuthorizationType;
use crate::delay::StartRule;
use cpc_core::utilities::data_formatters::format_day_count;
use cpc_time::Date;

/// One step of a deadline computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceStep {
    /// The authorization type chosen for an authorization to proceed.
    AuthorizationType(AuthorizationType),
    /// The anchor date and the rule that produced it.
    Start {
        /// First day of the delay.
        date: Date,
        /// Rule applied.
        rule: StartRule,
    },
    /// Whether recess suspends this delay.
    RecessApplicability(bool),
    /// A day counted towards the delay.
    DayCounted {
        /// 1-based position of the day in the delay.
        n: u32,
        /// The day.
        date: Date,
    },
    /// A day skipped because it falls inside a recess.
    DaySuspended {
        /// The day.
        date: Date,
        /// Name of the recess.
        recess: &'static str,
    },
    /// A month-based delay overflowed a shorter month and was clamped.
    MonthEndAdjusted {
        /// The clamped date.
        date: Date,
    },
    /// A month-based delay was extended by the recess days it spans.
    RecessExtension {
        /// Number of calendar days added.
        days: u32,
    },
    /// The due date fell on a non-business day and was moved forward.
    RolledForward {
        /// Date before the roll-forward.
        from: Date,
        /// First business day on or after `from`.
        to: Date,
    },
}

impl TraceStep {
    /// Return `true` for a suspended day.
    pub fn is_suspension(&self) -> bool {
        matches!(self, TraceStep::DaySuspended { .. })
    }
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceStep::AuthorizationType(kind) => {
                write!(f, "Type d'autorisation de procéder: {}", kind.label())
            }
            TraceStep::Start { date, rule } => write!(
                f,
                "Début du délai le {} ({})",
                date.to_swiss_string(),
                rule.description()
            ),
            TraceStep::RecessApplicability(true) => {
                f.write_str("Les féries sont applicables à ce délai")
            }
            TraceStep::RecessApplicability(false) => {
                f.write_str("Les féries ne sont PAS applicables (Art. 145 al. 2 CPC)")
            }
            TraceStep::DayCounted { n, date } => {
                write!(f, "Jour {n} compté le {}", date.to_swiss_string())
            }
            TraceStep::DaySuspended { date, recess } => {
                write!(f, "{}: Suspension ({recess})", date.to_swiss_string())
            }
            TraceStep::MonthEndAdjusted { .. } => {
                f.write_str("Ajustement au dernier jour du mois (Art. 142 al. 2 CPC)")
            }
            TraceStep::RecessExtension { days } => {
                write!(f, "Extension de {} due aux féries", format_day_count(*days))
            }
            TraceStep::RolledForward { from, to } => write!(
                f,
                "Report du {} (jour non ouvrable) au {} (Art. 142 al. 3 CPC)",
                from.to_swiss_string(),
                to.to_swiss_string()
            ),
        }
    }
}
