//! Property tests for the deadline calculator.

use cpc_deadlines::{
    Act, DeadlineCalculator, DeadlineRequest, DelaySpec, ProcedureType, Selector, StartRule,
    TraceStep,
};
use cpc_time::recess::CIVIL_RECESSES;
use cpc_time::{Calendar, Date, Period, RecessPeriod, SwissCivilCourts};
use proptest::prelude::*;

/// The Swiss calendar with one additional single-day recess.
#[derive(Debug)]
struct ExtraRecessDay {
    periods: Vec<RecessPeriod>,
}

impl ExtraRecessDay {
    fn new(month: u8, day: u8) -> Self {
        let mut periods = CIVIL_RECESSES.to_vec();
        periods.push(RecessPeriod::new("Jour supplémentaire", (month, day), (month, day)));
        Self { periods }
    }
}

impl Calendar for ExtraRecessDay {
    fn name(&self) -> &str {
        "Suisse + 1"
    }

    fn holiday_name(&self, date: Date) -> Option<&'static str> {
        SwissCivilCourts.holiday_name(date)
    }

    fn recess_periods(&self) -> &[RecessPeriod] {
        &self.periods
    }
}

fn any_date() -> impl Strategy<Value = Date> {
    // 1950 – 2150
    (18_262i32..91_310).prop_map(|s| Date::MIN.add_days(s).unwrap())
}

fn any_request() -> impl Strategy<Value = (Act, Selector)> {
    let combos: Vec<(Act, Selector)> = Act::ALL
        .into_iter()
        .flat_map(|act| {
            act.selector_kind()
                .values()
                .into_iter()
                .map(move |selector| (act, selector))
        })
        .collect();
    prop::sample::select(combos)
}

fn request(act: Act, selector: Selector, notified: Date) -> DeadlineRequest {
    DeadlineRequest::new(act).selector(selector).notified(notified)
}

proptest! {
    #[test]
    fn deterministic((act, selector) in any_request(), notified in any_date()) {
        let calc = DeadlineCalculator::new();
        let first = calc.compute(&request(act, selector, notified)).unwrap();
        let second = calc.compute(&request(act, selector, notified)).unwrap();
        prop_assert_eq!(first.lines(), second.lines());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn due_date_is_a_business_day((act, selector) in any_request(), notified in any_date()) {
        let calc = DeadlineCalculator::new();
        let deadline = calc.compute(&request(act, selector, notified)).unwrap();
        prop_assert!(calc.calendar().is_business_day(deadline.due_date));
        prop_assert!(deadline.due_date >= deadline.unadjusted);
        prop_assert!(deadline.unadjusted >= notified);
        let rolled = deadline
            .trace
            .iter()
            .filter(|s| matches!(s, TraceStep::RolledForward { .. }))
            .count();
        prop_assert_eq!(rolled, usize::from(deadline.due_date != deadline.unadjusted));
    }

    #[test]
    fn day_after_without_recess_counts_the_anchor(notified in any_date(), length in 1u32..=60) {
        let calc = DeadlineCalculator::new();
        let delay = DelaySpec::new(
            Period::days(length).unwrap(),
            StartRule::DayAfterNotification,
            false,
        );
        let deadline = calc.compute_delay(&delay, notified).unwrap();
        let expected = notified.add_days(1 + (length as i32 - 1)).unwrap();
        prop_assert_eq!(deadline.unadjusted, expected);
        prop_assert_eq!(deadline.due_date, calc.calendar().roll_forward(expected).unwrap());
    }

    #[test]
    fn summary_appeal_is_ten_days_after_notification(notified in any_date()) {
        let calc = DeadlineCalculator::new();
        let deadline = calc
            .compute(&request(Act::Appeal, ProcedureType::Summary.into(), notified))
            .unwrap();
        prop_assert_eq!(deadline.unadjusted, notified.add_days(10).unwrap());
    }

    #[test]
    fn extra_recess_day_never_shortens_the_delay(
        notified in any_date(),
        length in 1u32..=30,
        month in 1u8..=12,
        day in 1u8..=28,
    ) {
        let delay = DelaySpec::new(
            Period::days(length).unwrap(),
            StartRule::DayAfterNotification,
            true,
        );
        let base = DeadlineCalculator::new().compute_delay(&delay, notified).unwrap();
        let extra = DeadlineCalculator::with_calendar(ExtraRecessDay::new(month, day))
            .compute_delay(&delay, notified)
            .unwrap();
        prop_assert!(extra.unadjusted >= base.unadjusted);
        prop_assert!(extra.suspended_days() >= base.suspended_days());
    }

    #[test]
    fn month_end_anchor_clamps(notified in any_date(), months in 1u32..=12) {
        let anchor = notified.end_of_month();
        let delay = DelaySpec::new(
            Period::months(months).unwrap(),
            StartRule::DayOfNotification,
            false,
        );
        let deadline = DeadlineCalculator::new().compute_delay(&delay, anchor).unwrap();
        let clamped = deadline
            .trace
            .iter()
            .any(|s| matches!(s, TraceStep::MonthEndAdjusted { .. }));
        prop_assert_eq!(clamped, deadline.unadjusted.day_of_month() != anchor.day_of_month());
        if clamped {
            prop_assert_eq!(deadline.unadjusted, deadline.unadjusted.end_of_month());
        }
    }

    #[test]
    fn roll_forward_is_idempotent(date in any_date()) {
        let calc = DeadlineCalculator::new();
        let mut steps = Vec::new();
        let once = calc.roll_forward(date, &mut steps).unwrap();
        let recorded = steps.len();
        let twice = calc.roll_forward(once, &mut steps).unwrap();
        prop_assert_eq!(once, twice);
        prop_assert_eq!(steps.len(), recorded);
    }
}
