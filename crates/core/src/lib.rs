//! # act-paths core
//!
//! Resolves the special folders Advanced Combat Tracker cares about and derives its application
//! directories from them:
//! - the temporary, music, desktop and application-data folders of the current user
//! - `<temp>/AdvancedCombatTracker`
//! - `<app data>/Advanced Combat Tracker`
//!
//! Folder lookups go through the [`SpecialFolders`] capability so reports can be built against a
//! fixed provider in tests. A folder the host cannot resolve is reported as an empty string,
//! never as an error.
//!
//! ```
//! use act_paths_core::{FixedSpecialFolders, PathReport, ReportConfig, SeparatorStyle};
//!
//! let folders = FixedSpecialFolders::new(r"C:\Temp", "", r"C:\Desktop", r"C:\Roaming");
//! let report = PathReport::resolve(&folders, &ReportConfig::new(SeparatorStyle::Legacy));
//!
//! assert_eq!(report.temp_app_dir, r"C:\Temp\AdvancedCombatTracker");
//! assert_eq!(report.to_string().lines().count(), 8);
//! ```

pub mod config;
pub mod constants;
mod error;
pub mod folders;
pub mod report;

pub use config::{separator_style_from_env_value, ReportConfig, SeparatorStyle};
pub use error::{PathsError, PathsResult};
pub use folders::{FixedSpecialFolders, OsSpecialFolders, SpecialFolders};
pub use report::{join_subdir, PathReport, ReportLine};

use std::io::Write;

/// Resolve a report from `folders` and write it to `out`.
///
/// Unresolved folders are logged as a warning; they are still written as empty values.
pub fn run(
    folders: &impl SpecialFolders,
    config: &ReportConfig,
    out: &mut impl Write,
) -> PathsResult<PathReport> {
    let report = PathReport::resolve(folders, config);
    tracing::debug!(separator = ?config.separator(), report = ?report, "resolved special folders");

    for label in report.unresolved() {
        tracing::warn!("{} could not be resolved; printing an empty value", label);
    }

    report.write_to(out)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_writes_eight_lines_and_returns_report() {
        let folders = FixedSpecialFolders::new("/tmp", "/music", "/desktop", "/appdata");
        let mut buffer = Vec::new();

        let report = run(&folders, &ReportConfig::default(), &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(output.lines().count(), constants::REPORT_LINE_COUNT);
        assert_eq!(output, report.to_string());
    }

    #[test]
    fn test_run_with_unresolved_folders_succeeds() {
        let mut buffer = Vec::new();

        let report = run(
            &FixedSpecialFolders::default(),
            &ReportConfig::default(),
            &mut buffer,
        )
        .unwrap();

        assert_eq!(report.unresolved().len(), 4);
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.lines().any(|l| l == "folderExports: "));
    }

    #[test]
    fn test_run_is_idempotent_for_the_os_provider() {
        let folders = OsSpecialFolders::new();
        let config = ReportConfig::default();
        let mut first = Vec::new();
        let mut second = Vec::new();

        run(&folders, &config, &mut first).unwrap();
        run(&folders, &config, &mut second).unwrap();

        assert_eq!(first, second);
    }
}
