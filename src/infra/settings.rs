use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Recognized configuration, read once at invocation start. Unknown keys in
/// the source (including the legacy `group_caption` text option) are ignored.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Settings {
    pub show_captions: bool,
    pub include_path: bool,
    pub preview_tab: bool,
    pub show_group_caption: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_captions: true,
            include_path: false,
            preview_tab: false,
            show_group_caption: false,
        }
    }
}

impl Settings {
    /// Builds settings from a host settings-store value. A value that does
    /// not parse yields the defaults; configuration problems degrade the row
    /// set, they never abort an invocation.
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

#[derive(Debug, Error)]
pub enum ResolveStateDirError {
    #[error("could not determine the user home directory")]
    HomeDirNotFound,
}

pub fn resolve_tabpick_state_dir() -> Result<PathBuf, ResolveStateDirError> {
    let Some(home) = dirs::home_dir() else {
        return Err(ResolveStateDirError::HomeDirNotFound);
    };
    Ok(home.join(".tabpick"))
}

#[derive(Debug, Error)]
pub enum LoadSettingsError {
    #[error("failed to read settings: {0}")]
    Read(#[from] io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SaveSettingsError {
    #[error("failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write settings: {0}")]
    Write(#[from] io::Error),
}

fn settings_path(state_dir: &Path) -> PathBuf {
    state_dir.join("settings.json")
}

/// Loads settings from `settings.json` under the state dir. A missing file
/// is the normal first-run case and yields the defaults.
pub fn load_settings(state_dir: &Path) -> Result<Settings, LoadSettingsError> {
    let path = settings_path(state_dir);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Ok(Settings::default());
        }
        Err(error) => return Err(error.into()),
    };

    Ok(serde_json::from_str(&raw)?)
}

pub fn save_settings(state_dir: &Path, settings: &Settings) -> Result<(), SaveSettingsError> {
    fs::create_dir_all(state_dir)?;

    let path = settings_path(state_dir);
    let tmp = path.with_extension("json.tmp");
    let text = serde_json::to_string_pretty(settings)?;
    fs::write(&tmp, text)?;
    fs::rename(tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_the_documented_table() {
        let settings = Settings::default();
        assert!(settings.show_captions);
        assert!(!settings.include_path);
        assert!(!settings.preview_tab);
        assert!(!settings.show_group_caption);
    }

    #[test]
    fn from_value_fills_missing_keys_with_defaults() {
        let settings = Settings::from_value(json!({"include_path": true}));
        assert!(settings.show_captions);
        assert!(settings.include_path);
    }

    #[test]
    fn from_value_ignores_unknown_and_legacy_keys() {
        let settings = Settings::from_value(json!({
            "show_group_caption": true,
            "group_caption": "Pane:",
        }));
        assert!(settings.show_group_caption);
    }

    #[test]
    fn from_value_falls_back_on_malformed_input() {
        let settings = Settings::from_value(json!("not an object"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn load_settings_defaults_when_file_is_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = load_settings(dir.path()).expect("load");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = Settings {
            include_path: true,
            preview_tab: true,
            ..Settings::default()
        };
        save_settings(dir.path(), &settings).expect("save");
        assert_eq!(load_settings(dir.path()).expect("load"), settings);
    }

    #[test]
    fn load_settings_reports_a_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("settings.json"), "{not json").expect("write");
        let error = load_settings(dir.path()).expect_err("should fail");
        assert!(matches!(error, LoadSettingsError::Parse(_)));
    }
}
