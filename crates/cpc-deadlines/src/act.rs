//! The act rule table.
//!
//! Each procedural act maps, through a selector (the procedure type or the
//! authorization type), to the [`DelaySpec`] the calculator runs on.
//!
//! | Act | Selector | Delay |
//! |---|---|---|
//! | Autorisation de procéder | bail | 30 days from notification, recess applies |
//! | Autorisation de procéder | autre | 3 months from notification, recess applies |
//! | Appel / Recours | sommaire | 10 days from the day after, no recess |
//! | Appel / Recours | ordinaire, simplifiée | 30 days from the day after, recess applies |

use std::str::FromStr;

use crate::delay::{DelaySpec, StartRule};
use cpc_core::errors::{Error, Result};
use cpc_time::Period;

// ── Selectors ─────────────────────────────────────────────────────────────────

/// Type of civil procedure the decision was rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcedureType {
    /// Procédure ordinaire.
    Ordinary,
    /// Procédure simplifiée.
    Simplified,
    /// Procédure sommaire.
    Summary,
}

impl ProcedureType {
    /// Every procedure type, in display order.
    pub const ALL: [ProcedureType; 3] = [
        ProcedureType::Ordinary,
        ProcedureType::Simplified,
        ProcedureType::Summary,
    ];

    /// Stable identifier.
    pub fn key(&self) -> &'static str {
        match self {
            ProcedureType::Ordinary => "ordinaire",
            ProcedureType::Simplified => "simplifiee",
            ProcedureType::Summary => "sommaire",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            ProcedureType::Ordinary => "Procédure ordinaire",
            ProcedureType::Simplified => "Procédure simplifiée",
            ProcedureType::Summary => "Procédure sommaire",
        }
    }
}

impl FromStr for ProcedureType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ProcedureType::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| Error::InvalidSelector(format!("unknown procedure type `{s}`")))
    }
}

/// Kind of authorization to proceed (art. 209 CPC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorizationType {
    /// Lease and farm-lease disputes (art. 209 al. 4 CPC).
    Lease,
    /// Every other dispute (art. 209 al. 3 CPC).
    Other,
}

impl AuthorizationType {
    /// Every authorization type, in display order.
    pub const ALL: [AuthorizationType; 2] = [AuthorizationType::Lease, AuthorizationType::Other];

    /// Stable identifier.
    pub fn key(&self) -> &'static str {
        match self {
            AuthorizationType::Lease => "bail",
            AuthorizationType::Other => "autre",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            AuthorizationType::Lease => "Bail (30 jours)",
            AuthorizationType::Other => "Autre (3 mois)",
        }
    }
}

impl FromStr for AuthorizationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AuthorizationType::ALL
            .into_iter()
            .find(|a| a.key() == s)
            .ok_or_else(|| Error::InvalidSelector(format!("unknown authorization type `{s}`")))
    }
}

/// Which selector an act needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorKind {
    /// A [`ProcedureType`].
    Procedure,
    /// An [`AuthorizationType`].
    Authorization,
}

impl SelectorKind {
    /// Name used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            SelectorKind::Procedure => "procedure type",
            SelectorKind::Authorization => "authorization type",
        }
    }

    /// Display label of the selector field.
    pub fn label(&self) -> &'static str {
        match self {
            SelectorKind::Procedure => "Type de procédure",
            SelectorKind::Authorization => "Type d'autorisation de procéder",
        }
    }

    /// Every admissible value of this selector.
    pub fn values(&self) -> Vec<Selector> {
        match self {
            SelectorKind::Procedure => ProcedureType::ALL.map(Selector::Procedure).to_vec(),
            SelectorKind::Authorization => {
                AuthorizationType::ALL.map(Selector::Authorization).to_vec()
            }
        }
    }

    /// Parse a selector key of this kind.
    pub fn parse(&self, key: &str) -> Result<Selector> {
        match self {
            SelectorKind::Procedure => key.parse().map(Selector::Procedure),
            SelectorKind::Authorization => key.parse().map(Selector::Authorization),
        }
    }
}

/// The sub-selection an act's delay depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Procedure type, for appeals and objections.
    Procedure(ProcedureType),
    /// Authorization type, for authorizations to proceed.
    Authorization(AuthorizationType),
}

impl Selector {
    /// The kind of this selector.
    pub fn kind(&self) -> SelectorKind {
        match self {
            Selector::Procedure(_) => SelectorKind::Procedure,
            Selector::Authorization(_) => SelectorKind::Authorization,
        }
    }

    /// Stable identifier of the selected value.
    pub fn key(&self) -> &'static str {
        match self {
            Selector::Procedure(p) => p.key(),
            Selector::Authorization(a) => a.key(),
        }
    }

    /// Display label of the selected value.
    pub fn label(&self) -> &'static str {
        match self {
            Selector::Procedure(p) => p.label(),
            Selector::Authorization(a) => a.label(),
        }
    }
}

impl From<ProcedureType> for Selector {
    fn from(value: ProcedureType) -> Self {
        Selector::Procedure(value)
    }
}

impl From<AuthorizationType> for Selector {
    fn from(value: AuthorizationType) -> Self {
        Selector::Authorization(value)
    }
}

// ── Acts ──────────────────────────────────────────────────────────────────────

/// A procedural act whose deadline can be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Act {
    /// Autorisation de procéder (art. 209 CPC).
    AuthorizationToProceed,
    /// Appel (art. 311/314 CPC).
    Appeal,
    /// Recours (art. 321 CPC).
    Objection,
}

impl Act {
    /// Every act, in display order.
    pub const ALL: [Act; 3] = [Act::AuthorizationToProceed, Act::Appeal, Act::Objection];

    /// Stable identifier.
    pub fn key(&self) -> &'static str {
        match self {
            Act::AuthorizationToProceed => "autorisation-proceder",
            Act::Appeal => "appel",
            Act::Objection => "recours",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Act::AuthorizationToProceed => "Autorisation de procéder (Art. 209 CPC)",
            Act::Appeal => "Appel (Art. 311/314 CPC)",
            Act::Objection => "Recours (Art. 321 CPC)",
        }
    }

    /// The selector this act requires.
    pub fn selector_kind(&self) -> SelectorKind {
        match self {
            Act::AuthorizationToProceed => SelectorKind::Authorization,
            Act::Appeal | Act::Objection => SelectorKind::Procedure,
        }
    }

    /// Return `true` if the act needs a procedure type.
    pub fn needs_procedure(&self) -> bool {
        self.selector_kind() == SelectorKind::Procedure
    }

    /// Return `true` if the act needs an authorization type.
    pub fn needs_authorization_type(&self) -> bool {
        self.selector_kind() == SelectorKind::Authorization
    }

    /// Resolve the delay for this act.
    ///
    /// # Errors
    /// [`Error::MissingSelector`] if `selector` is `None`, and
    /// [`Error::InvalidSelector`] if it is of the wrong kind.
    pub fn delay(&self, selector: Option<Selector>) -> Result<DelaySpec> {
        match (self, selector) {
            (Act::AuthorizationToProceed, Some(Selector::Authorization(kind))) => {
                authorization_delay(kind)
            }
            (Act::Appeal | Act::Objection, Some(Selector::Procedure(procedure))) => {
                appeal_delay(procedure)
            }
            (_, None) => Err(Error::MissingSelector {
                act: self.key(),
                selector: self.selector_kind().name(),
            }),
            (_, Some(other)) => Err(Error::InvalidSelector(format!(
                "`{}` is not a {} accepted by `{}`",
                other.key(),
                self.selector_kind().name(),
                self.key()
            ))),
        }
    }
}

impl FromStr for Act {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Act::ALL
            .into_iter()
            .find(|a| a.key() == s)
            .ok_or_else(|| Error::UnknownAct(s.to_string()))
    }
}

impl std::fmt::Display for Act {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

fn authorization_delay(kind: AuthorizationType) -> Result<DelaySpec> {
    let period = match kind {
        AuthorizationType::Lease => Period::days(30)?,
        AuthorizationType::Other => Period::months(3)?,
    };
    Ok(DelaySpec::new(period, StartRule::DayOfNotification, true))
}

// Appeals and objections share the same delays.
fn appeal_delay(procedure: ProcedureType) -> Result<DelaySpec> {
    Ok(match procedure {
        ProcedureType::Summary => {
            DelaySpec::new(Period::days(10)?, StartRule::DayAfterNotification, false)
        }
        ProcedureType::Ordinary | ProcedureType::Simplified => {
            DelaySpec::new(Period::days(30)?, StartRule::DayAfterNotification, true)
        }
    })
}
