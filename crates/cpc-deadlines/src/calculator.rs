//! Deadline calculator.
//!
//! Turns a notification date and an act into a due date:
//!
//! 1. resolve the [`DelaySpec`] from the act rule table;
//! 2. compute the anchor (day of, or day after, notification);
//! 3. count days one by one, skipping recess days when recess applies, or
//!    shift by whole months, clamping to the month end and extending by the
//!    recess days the interval spans;
//! 4. move a due date that falls on a weekend or public holiday to the next
//!    business day.
//!
//! Every step is recorded in the returned [`Deadline::trace`].

use tracing::{debug, trace};

use crate::act::{Act, Selector};
use crate::delay::DelaySpec;
use crate::settings::{RecessExtension, Settings};
use crate::trace::TraceStep;
use cpc_core::ensure_post;
use cpc_core::errors::{Error, Result};
use cpc_time::{Calendar, Date, SwissCivilCourts, TimeUnit};

// ── Request ───────────────────────────────────────────────────────────────────

/// The inputs of a deadline computation, as collected from the user.
///
/// Fields are optional so that a form can be filled in step by step;
/// [`is_complete`](Self::is_complete) tells whether computing is possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeadlineRequest {
    /// The act.
    pub act: Option<Act>,
    /// Procedure or authorization type, as the act requires.
    pub selector: Option<Selector>,
    /// Date the decision was notified.
    pub notified: Option<Date>,
}

impl DeadlineRequest {
    /// A request for `act` with no other field set.
    pub fn new(act: Act) -> Self {
        Self {
            act: Some(act),
            ..Self::default()
        }
    }

    /// Set the selector.
    pub fn selector(mut self, selector: impl Into<Selector>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Set the notification date.
    pub fn notified(mut self, date: Date) -> Self {
        self.notified = Some(date);
        self
    }

    /// Return `true` when every field the act requires is present and the
    /// selector is of the kind the act expects.
    pub fn is_complete(&self) -> bool {
        match (self.act, self.selector, self.notified) {
            (Some(act), Some(selector), Some(_)) => selector.kind() == act.selector_kind(),
            _ => false,
        }
    }
}

// ── Result ────────────────────────────────────────────────────────────────────

/// A computed deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deadline {
    /// The delay that was applied.
    pub delay: DelaySpec,
    /// The last day of the delay before the business-day roll-forward.
    pub unadjusted: Date,
    /// The due date: always a business day.
    pub due_date: Date,
    /// Each rule applied, in order.
    pub trace: Vec<TraceStep>,
}

impl Deadline {
    /// The trace rendered as explanation lines.
    pub fn lines(&self) -> Vec<String> {
        self.trace.iter().map(ToString::to_string).collect()
    }

    /// Number of days suspended by a recess.
    pub fn suspended_days(&self) -> usize {
        self.trace.iter().filter(|s| s.is_suspension()).count()
    }
}

// ── Calculator ────────────────────────────────────────────────────────────────

/// Computes deadlines against a court calendar.
#[derive(Debug, Clone, Default)]
pub struct DeadlineCalculator<C: Calendar = SwissCivilCourts> {
    calendar: C,
    settings: Settings,
}

impl DeadlineCalculator {
    /// A calculator on the Swiss civil-court calendar with default settings.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Calendar> DeadlineCalculator<C> {
    /// A calculator on `calendar` with default settings.
    pub fn with_calendar(calendar: C) -> Self {
        Self {
            calendar,
            settings: Settings::default(),
        }
    }

    /// Replace the settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// The calendar in use.
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// The settings in use.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Compute the deadline for `request`.
    ///
    /// Dates are supported from 01.01.1900 to 31.12.2199. A valid notification
    /// date close to the upper bound can still fail when the counted days, the
    /// recess extension or the roll-forward would cross 31.12.2199: for
    /// example an ordinary appeal notified on 10.12.2199.
    ///
    /// # Errors
    /// [`Error::MissingInput`] or [`Error::MissingSelector`] when a required
    /// field is absent, [`Error::InvalidSelector`] when the selector does not
    /// fit the act, and [`Error::Date`] if the computation leaves the
    /// supported date range.
    pub fn compute(&self, request: &DeadlineRequest) -> Result<Deadline> {
        let act = request.act.ok_or(Error::MissingInput("act"))?;
        let notified = request
            .notified
            .ok_or(Error::MissingInput("notification date"))?;
        let delay = act.delay(request.selector)?;
        debug!(act = act.key(), %notified, ?delay, "resolved delay");

        let mut steps = Vec::new();
        if let Some(Selector::Authorization(kind)) = request.selector {
            steps.push(TraceStep::AuthorizationType(kind));
        }
        self.run(&delay, notified, steps)
    }

    /// Compute the deadline of an explicit delay, bypassing the rule table.
    pub fn compute_delay(&self, delay: &DelaySpec, notified: Date) -> Result<Deadline> {
        self.run(delay, notified, Vec::new())
    }

    fn run(&self, delay: &DelaySpec, notified: Date, mut steps: Vec<TraceStep>) -> Result<Deadline> {
        let anchor = delay.start.anchor(notified)?;
        steps.push(TraceStep::Start {
            date: anchor,
            rule: delay.start,
        });
        steps.push(TraceStep::RecessApplicability(delay.recess_applies));

        let length = delay.period.length();
        let unadjusted = match delay.period.unit() {
            TimeUnit::Days => self.count_days(anchor, length, delay.recess_applies, &mut steps)?,
            TimeUnit::Months => {
                self.shift_months(anchor, length, delay.recess_applies, &mut steps)?
            }
        };
        let due_date = self.roll_forward(unadjusted, &mut steps)?;

        ensure_post!(
            self.calendar.is_business_day(due_date),
            "due date {due_date} is not a business day in {}",
            self.calendar.name()
        );
        debug!(%anchor, %unadjusted, %due_date, "deadline computed");
        Ok(Deadline {
            delay: *delay,
            unadjusted,
            due_date,
            trace: steps,
        })
    }

    /// Walk forward from `anchor` until `length` days have been counted.
    ///
    /// The anchor itself is day 1 unless it is suspended.
    fn count_days(
        &self,
        anchor: Date,
        length: u32,
        recess_applies: bool,
        steps: &mut Vec<TraceStep>,
    ) -> Result<Date> {
        let mut date = anchor;
        let mut counted = 0;
        loop {
            let recess = if recess_applies {
                self.calendar.recess_period(date)
            } else {
                None
            };
            match recess {
                Some(recess) => {
                    trace!(%date, recess = recess.name(), "suspended");
                    steps.push(TraceStep::DaySuspended {
                        date,
                        recess: recess.name(),
                    });
                }
                None => {
                    counted += 1;
                    trace!(%date, counted, "counted");
                    steps.push(TraceStep::DayCounted { n: counted, date });
                    if counted == length {
                        return Ok(date);
                    }
                }
            }
            date = date.succ()?;
        }
    }

    /// Shift `anchor` by `length` months, then extend for recess.
    fn shift_months(
        &self,
        anchor: Date,
        length: u32,
        recess_applies: bool,
        steps: &mut Vec<TraceStep>,
    ) -> Result<Date> {
        let months = i32::try_from(length)
            .map_err(|_| Error::InvalidArgument(format!("{length} months is too long")))?;
        let target = anchor.add_months(months)?;
        if target.day_of_month() != anchor.day_of_month() {
            debug!(%anchor, %target, "clamped to month end");
            steps.push(TraceStep::MonthEndAdjusted { date: target });
        }
        if !recess_applies {
            return Ok(target);
        }

        let recess_days = self.calendar.count_recess_days(anchor, target);
        if recess_days == 0 {
            return Ok(target);
        }
        let extended = match self.settings.recess_extension {
            RecessExtension::Flat => target.add_days(recess_days as i32)?,
            RecessExtension::Rewalk => {
                let mut date = target;
                let mut remaining = recess_days;
                while remaining > 0 {
                    date = date.succ()?;
                    if !self.calendar.is_recess(date) {
                        remaining -= 1;
                    }
                }
                date
            }
        };
        let days = (extended - target) as u32;
        debug!(recess_days, days, policy = %self.settings.recess_extension, "recess extension");
        steps.push(TraceStep::RecessExtension { days });
        Ok(extended)
    }

    /// Move `date` to the next business day, recording the move if any.
    ///
    /// A business day is returned unchanged and nothing is recorded.
    pub fn roll_forward(&self, date: Date, steps: &mut Vec<TraceStep>) -> Result<Date> {
        let rolled = self.calendar.roll_forward(date)?;
        if rolled != date {
            debug!(
                from = %date,
                to = %rolled,
                holiday = self.calendar.holiday_name(date),
                "rolled forward"
            );
            steps.push(TraceStep::RolledForward {
                from: date,
                to: rolled,
            });
        }
        Ok(rolled)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Compute a deadline from string keys, on the Swiss civil-court calendar.
///
/// `selector` is the procedure-type or authorization-type key the act
/// requires (`"ordinaire"`, `"simplifiee"`, `"sommaire"`, `"bail"`,
/// `"autre"`).
///
/// # Errors
/// [`Error::UnknownAct`] for an unknown act key, [`Error::MissingSelector`]
/// when the selector is absent and [`Error::InvalidSelector`] when it does
/// not belong to the act.
///
/// # Example
/// ```
/// use cpc_deadlines::compute_deadline;
/// use cpc_time::Date;
///
/// let notified = Date::from_ymd(2024, 5, 10).unwrap();
/// let deadline = compute_deadline("appel", Some("sommaire"), notified).unwrap();
/// assert_eq!(deadline.due_date, Date::from_ymd(2024, 5, 20).unwrap());
/// ```
pub fn compute_deadline(act: &str, selector: Option<&str>, notified: Date) -> Result<Deadline> {
    let act: Act = act.parse()?;
    let selector = selector
        .map(|key| act.selector_kind().parse(key))
        .transpose()?;
    let request = DeadlineRequest {
        act: Some(act),
        selector,
        notified: Some(notified),
    };
    DeadlineCalculator::new().compute(&request)
}
