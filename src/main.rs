use std::io;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use act_paths_core::constants::SEPARATOR_ENV_VAR;
use act_paths_core::{OsSpecialFolders, ReportConfig, separator_style_from_env_value};

/// Diagnostic filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "act_paths=warn,act_paths_core=warn";

/// Main entry point for act-paths
///
/// Prints the current user's temporary, music, desktop and application-data folders, followed
/// by the Advanced Combat Tracker directories derived from them. Command-line arguments are
/// ignored and the process always exits successfully; an unresolved folder prints as an empty
/// value.
///
/// Diagnostics go to stderr so stdout carries only the report.
///
/// # Environment Variables
/// - `ACT_PATHS_SEPARATOR`: `native` (default) or `legacy` backslash joins
/// - `RUST_LOG`: diagnostic filter, replacing the default of warnings from this program
fn main() -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(DEFAULT_LOG_FILTER)?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let ignored = std::env::args().skip(1).count();
    if ignored > 0 {
        tracing::debug!("ignoring {} command-line argument(s)", ignored);
    }

    let config = resolve_config();
    let mut stdout = io::stdout().lock();

    if let Err(e) = act_paths_core::run(&OsSpecialFolders::new(), &config, &mut stdout) {
        tracing::error!("Report error: {}", e);
    }

    Ok(())
}

/// Resolve the report configuration once at startup.
///
/// An unrecognised separator style is logged and replaced by the default.
fn resolve_config() -> ReportConfig {
    let separator = separator_style_from_env_value(std::env::var(SEPARATOR_ENV_VAR).ok())
        .unwrap_or_else(|e| {
            tracing::warn!("{}: {}; using native separators", SEPARATOR_ENV_VAR, e);
            Default::default()
        });

    ReportConfig::new(separator)
}
