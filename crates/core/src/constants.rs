//! Constants used throughout the act-paths core crate.
//!
//! Subdirectory names, output labels and environment variable names live here so the
//! reporter, the binary and the tests agree on them.

/// Subdirectory joined onto the temporary directory.
pub const TEMP_SUBDIR_NAME: &str = "AdvancedCombatTracker";

/// Subdirectory joined onto the application-data directory.
pub const APP_DATA_SUBDIR_NAME: &str = "Advanced Combat Tracker";

/// Separator used by [`crate::SeparatorStyle::Legacy`].
pub const LEGACY_SEPARATOR: char = '\\';

/// Environment variable selecting the separator style (`native` or `legacy`).
pub const SEPARATOR_ENV_VAR: &str = "ACT_PATHS_SEPARATOR";

/// Label for the raw temporary directory.
pub const TEMP_PATH_LABEL: &str = "tempPath";
/// Label for the raw music directory.
pub const MUSIC_PATH_LABEL: &str = "musicPath";
/// Label for the raw desktop directory.
pub const DESKTOP_PATH_LABEL: &str = "desktopPath";
/// Label for the raw application-data directory.
pub const APP_DATA_PATH_LABEL: &str = "appDataPath";
/// Label for the temporary directory with [`TEMP_SUBDIR_NAME`] joined on.
pub const TEMP_DIR_LABEL: &str = "tempDir";
/// Label redisplaying the music directory.
pub const FOLDER_MEDIA_LABEL: &str = "folderMedia";
/// Label redisplaying the desktop directory.
pub const FOLDER_EXPORTS_LABEL: &str = "folderExports";
/// Label for the application-data directory with [`APP_DATA_SUBDIR_NAME`] joined on.
pub const APP_DATA_FOLDER_LABEL: &str = "appDataFolder";

/// Number of lines in a rendered report.
pub const REPORT_LINE_COUNT: usize = 8;
