//! The path report.
//!
//! A [`PathReport`] holds the four raw special folders plus the two application directories
//! derived from them. It renders as eight `label: value` lines in a fixed order. The music and
//! desktop folders appear twice: once raw, and once under the media/exports labels.

use crate::constants::{
    APP_DATA_FOLDER_LABEL, APP_DATA_PATH_LABEL, APP_DATA_SUBDIR_NAME, DESKTOP_PATH_LABEL,
    FOLDER_EXPORTS_LABEL, FOLDER_MEDIA_LABEL, LEGACY_SEPARATOR, MUSIC_PATH_LABEL,
    REPORT_LINE_COUNT, TEMP_DIR_LABEL, TEMP_PATH_LABEL, TEMP_SUBDIR_NAME,
};
use crate::{PathsError, PathsResult, ReportConfig, SeparatorStyle, SpecialFolders};
use std::fmt;
use std::io::Write;
use std::path::{Path, MAIN_SEPARATOR};

/// One rendered line of the report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: String,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Resolved special folders and the application directories derived from them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathReport {
    pub temp_path: String,
    pub music_path: String,
    pub desktop_path: String,
    pub app_data_path: String,
    pub temp_app_dir: String,
    pub app_data_app_dir: String,
}

impl PathReport {
    /// Query `folders` once per special folder and derive the application directories.
    pub fn resolve(folders: &impl SpecialFolders, config: &ReportConfig) -> Self {
        let temp_path = folders.temp_dir();
        let music_path = folders.music_dir();
        let desktop_path = folders.desktop_dir();
        let app_data_path = folders.app_data_dir();

        let temp_app_dir = join_subdir(&temp_path, TEMP_SUBDIR_NAME, config.separator());
        let app_data_app_dir =
            join_subdir(&app_data_path, APP_DATA_SUBDIR_NAME, config.separator());

        Self {
            temp_path,
            music_path,
            desktop_path,
            app_data_path,
            temp_app_dir,
            app_data_app_dir,
        }
    }

    /// The eight report lines in output order.
    pub fn lines(&self) -> [ReportLine; REPORT_LINE_COUNT] {
        let line = |label, value: &str| ReportLine {
            label,
            value: value.to_string(),
        };

        [
            line(TEMP_PATH_LABEL, &self.temp_path),
            line(MUSIC_PATH_LABEL, &self.music_path),
            line(DESKTOP_PATH_LABEL, &self.desktop_path),
            line(APP_DATA_PATH_LABEL, &self.app_data_path),
            line(TEMP_DIR_LABEL, &self.temp_app_dir),
            line(FOLDER_MEDIA_LABEL, &self.music_path),
            line(FOLDER_EXPORTS_LABEL, &self.desktop_path),
            line(APP_DATA_FOLDER_LABEL, &self.app_data_app_dir),
        ]
    }

    /// Labels of the raw special folders that resolved to an empty string.
    pub fn unresolved(&self) -> Vec<&'static str> {
        [
            (TEMP_PATH_LABEL, &self.temp_path),
            (MUSIC_PATH_LABEL, &self.music_path),
            (DESKTOP_PATH_LABEL, &self.desktop_path),
            (APP_DATA_PATH_LABEL, &self.app_data_path),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    /// Write the report to `out` and flush it.
    pub fn write_to(&self, out: &mut impl Write) -> PathsResult<()> {
        write!(out, "{self}").map_err(PathsError::Write)?;
        out.flush().map_err(PathsError::Write)
    }
}

impl fmt::Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Join `name` onto `base` using the given separator style.
///
/// `Native` follows [`Path::join`], except that an empty base still keeps the separator in front
/// of `name`. `Legacy` is plain `base\name` concatenation, so a base that already ends in a
/// backslash yields a doubled separator.
pub fn join_subdir(base: &str, name: &str, style: SeparatorStyle) -> String {
    match style {
        SeparatorStyle::Native if base.is_empty() => format!("{MAIN_SEPARATOR}{name}"),
        SeparatorStyle::Native => Path::new(base).join(name).to_string_lossy().into_owned(),
        SeparatorStyle::Legacy => format!("{base}{LEGACY_SEPARATOR}{name}"),
    }
}
