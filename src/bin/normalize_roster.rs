//! Roster Normalizer Binary
//!
//! Transforms the contact roster into a document-database-ready JSON
//! collection, resolving the name-based reporting hierarchy into email
//! identities.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `ROSTER_INPUT`: Roster CSV path (default: input.csv)
//! - `ROSTER_OUTPUT`: Output JSON path (default: output.json)
//! - `RUST_LOG`: Log level filter (default: info)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for development
//!   (default: pretty)
//!
//! ## Usage
//!
//! ```bash
//! ROSTER_INPUT=roster.csv cargo run --bin normalize_roster
//! ```

use tracing::{error, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use roster_normalizer::{pipeline, RunConfig};

/// Initialize the tracing subscriber with JSON or pretty format
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "normalize_roster=info,roster_normalizer=info".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .flatten_event(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .init();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let version = env!("CARGO_PKG_VERSION");
    info!(version, "Starting roster normalizer");

    let config = RunConfig::from_env();
    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        domain = %config.domain,
        "Configuration resolved"
    );

    let report = match pipeline::run(&config) {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Pipeline run failed");
            return Err(e.into());
        }
    };

    println!(
        "SUCCESS: document collection written to {} ({} records from {} rows)",
        config.output.display(),
        report.records,
        report.rows
    );
    println!("Manager names rewritten to email identities");
    println!(
        "Reportees derived from the reporting hierarchy ({} edges)",
        report.report_edges
    );

    Ok(())
}
