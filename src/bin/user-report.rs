//! CLI tool that runs the standard report over the embedded sample users.
//!
//! Usage:
//!   user-report
//!   user-report --threshold 25 --increment 2 -v
//!
//! Results go to stdout, one line per operation. Logs go to stderr.

use clap::Parser;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use user_records::{Operation, load_users, run_report};

const SAMPLE_USERS: &str = r#"[{"name": "Lays", "age": 30}, {"name": "Alice", "age": 19}, {"name": "Bob", "age": 35}, {"name": "Charlie", "age": 40}, {"name": "Diana", "age": 20}]"#;

/// Filter, sort, group, update and count the sample user records.
#[derive(Parser)]
#[command(name = "user-report")]
struct Cli {
    /// Age threshold for filtering and counting (strictly greater than)
    #[arg(short, long, default_value_t = 30, allow_negative_numbers = true)]
    threshold: i64,

    /// Amount added to every age by the update step
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    increment: i64,

    /// Log operation details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let users = match load_users(SAMPLE_USERS) {
        Ok(users) => users,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    debug!(
        threshold = cli.threshold,
        increment = cli.increment,
        "running report"
    );

    let operations = Operation::default_sequence(cli.threshold, cli.increment);
    for line in run_report(&users, &operations) {
        println!("{line}");
    }
}
