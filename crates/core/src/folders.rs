//! Special-folder providers.
//!
//! [`SpecialFolders`] is the only place the reporter touches the host environment. The OS
//! implementation asks the platform; [`FixedSpecialFolders`] answers with whatever it was built
//! with.

use std::path::PathBuf;

/// The four special-folder queries the reporter needs.
///
/// Each query returns the folder as a display string, or an empty string when the host
/// cannot resolve it.
pub trait SpecialFolders {
    fn temp_dir(&self) -> String;
    fn music_dir(&self) -> String;
    fn desktop_dir(&self) -> String;
    fn app_data_dir(&self) -> String;
}

/// Resolves special folders against the current OS user profile.
///
/// - temp: `std::env::temp_dir`
/// - music: `dirs::audio_dir`
/// - desktop: `dirs::desktop_dir`
/// - app data: `dirs::config_dir` (roaming AppData on Windows)
#[derive(Clone, Copy, Debug, Default)]
pub struct OsSpecialFolders;

impl OsSpecialFolders {
    pub fn new() -> Self {
        Self
    }
}

impl SpecialFolders for OsSpecialFolders {
    fn temp_dir(&self) -> String {
        path_to_string(Some(std::env::temp_dir()))
    }

    fn music_dir(&self) -> String {
        path_to_string(dirs::audio_dir())
    }

    fn desktop_dir(&self) -> String {
        path_to_string(dirs::desktop_dir())
    }

    fn app_data_dir(&self) -> String {
        path_to_string(dirs::config_dir())
    }
}

fn path_to_string(path: Option<PathBuf>) -> String {
    let Some(path) = path else {
        return String::new();
    };

    match path.to_str() {
        Some(path) => path.to_string(),
        None => {
            tracing::warn!(
                path = ?path,
                "special folder is not valid UTF-8; printing a lossy rendering"
            );
            path.to_string_lossy().into_owned()
        }
    }
}

/// A provider with fixed answers, for deterministic reports.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedSpecialFolders {
    pub temp: String,
    pub music: String,
    pub desktop: String,
    pub app_data: String,
}

impl FixedSpecialFolders {
    pub fn new(
        temp: impl Into<String>,
        music: impl Into<String>,
        desktop: impl Into<String>,
        app_data: impl Into<String>,
    ) -> Self {
        Self {
            temp: temp.into(),
            music: music.into(),
            desktop: desktop.into(),
            app_data: app_data.into(),
        }
    }
}

impl SpecialFolders for FixedSpecialFolders {
    fn temp_dir(&self) -> String {
        self.temp.clone()
    }

    fn music_dir(&self) -> String {
        self.music.clone()
    }

    fn desktop_dir(&self) -> String {
        self.desktop.clone()
    }

    fn app_data_dir(&self) -> String {
        self.app_data.clone()
    }
}
