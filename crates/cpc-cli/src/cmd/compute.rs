use crate::output::print_json;
use anyhow::Context;
use clap::Args;
use delais_cpc::deadlines::{
    Act, AuthorizationType, Deadline, DeadlineCalculator, DeadlineRequest, ProcedureType,
    RecessExtension, Selector, Settings,
};
use delais_cpc::time::Date;
use serde::Serialize;

#[derive(Args)]
pub struct ComputeArgs {
    /// Act: autorisation-proceder, appel or recours
    #[arg(long)]
    act: Option<Act>,

    /// Procedure type, for appel and recours: ordinaire, simplifiee or sommaire
    #[arg(long)]
    procedure: Option<ProcedureType>,

    /// Authorization type, for autorisation-proceder: bail or autre
    #[arg(long)]
    authorization: Option<AuthorizationType>,

    /// Notification date, YYYY-MM-DD or DD.MM.YYYY
    #[arg(long)]
    notified: Option<Date>,

    /// Recess extension of month-based delays: flat or rewalk
    #[arg(long, env = "CPC_RECESS_EXTENSION", default_value = "flat")]
    recess_extension: RecessExtension,
}

#[derive(Serialize)]
struct Report {
    act: &'static str,
    selector: &'static str,
    notified: String,
    unadjusted: String,
    due_date: String,
    trace: Vec<String>,
}

/// Returns `Ok(false)` when the input is incomplete and nothing was computed.
pub fn run(args: ComputeArgs, json: bool) -> anyhow::Result<bool> {
    let selector = args.act.and_then(|act| {
        if act.needs_procedure() {
            args.procedure.map(Selector::Procedure)
        } else {
            args.authorization.map(Selector::Authorization)
        }
    });
    let request = DeadlineRequest {
        act: args.act,
        selector,
        notified: args.notified,
    };
    let notified = match args.notified {
        Some(date) if request.is_complete() => date,
        _ => {
            tracing::debug!(?request, "incomplete request, nothing computed");
            return Ok(false);
        }
    };

    let settings = Settings::default().with_recess_extension(args.recess_extension);
    let deadline = DeadlineCalculator::new()
        .with_settings(settings)
        .compute(&request)
        .context("failed to compute deadline")?;

    if json {
        print_json(&report(&request, notified, &deadline))?;
    } else {
        println!("Date d'échéance: {}", deadline.due_date.to_swiss_string());
        for line in deadline.lines() {
            println!("  {line}");
        }
    }
    Ok(true)
}

fn report(request: &DeadlineRequest, notified: Date, deadline: &Deadline) -> Report {
    Report {
        act: request.act.map(|a| a.key()).unwrap_or_default(),
        selector: request.selector.map(|s| s.key()).unwrap_or_default(),
        notified: notified.to_string(),
        unadjusted: deadline.unadjusted.to_string(),
        due_date: deadline.due_date.to_string(),
        trace: deadline.lines(),
    }
}
