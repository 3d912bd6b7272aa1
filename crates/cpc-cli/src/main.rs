mod cmd;
mod output;

use clap::{Parser, Subcommand};
use cmd::compute::ComputeArgs;

#[derive(Parser)]
#[command(
    name = "delai",
    about = "Swiss civil-procedure deadlines: recesses, holidays and roll-forward",
    version,
    propagate_version = true
)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Log each computation step to stderr
    #[arg(long, global = true, short = 'v')]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the due date of a deadline
    ///
    /// Prints nothing and exits with status 2 when the act, its selector or
    /// the notification date is missing. Errors exit with status 1.
    Compute(ComputeArgs),

    /// List the acts and the selector each one requires
    Acts,
}

fn main() {
    // Exit status 2 is reserved for incomplete input; usage errors exit 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Compute(args) => cmd::compute::run(args, cli.json),
        Commands::Acts => cmd::acts::run(cli.json).map(|()| true),
    };

    match result {
        Ok(true) => {}
        // Incomplete input: no result, no message.
        Ok(false) => std::process::exit(2),
        Err(e) => {
            // Print the full error chain (anyhow's alternate Display)
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}
