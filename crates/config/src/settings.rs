// Application settings
// Loaded from ~/.config/qrgrid/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Startup document, loaded best-effort before defaults apply
    #[serde(rename = "document.defaultPath")]
    pub default_document: PathBuf,

    /// File name suggested for exports
    #[serde(rename = "export.fileName")]
    pub export_file_name: String,

    /// QR pixel size in the picker card
    #[serde(rename = "qr.sizePx")]
    pub qr_size_px: u32,

    /// QR pixel size in fullscreen view
    #[serde(rename = "qr.fullscreenSizePx")]
    pub qr_fullscreen_size_px: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_document: PathBuf::from("fy.json"),
            export_file_name: "excel_data.json".to_string(),
            qr_size_px: 180,
            qr_fullscreen_size_px: 400,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("qrgrid");
        config_dir.join("settings.json")
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from an explicit path, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                // Strip comments (lines starting with //)
                let cleaned: String = contents
                    .lines()
                    .filter(|line| !line.trim().starts_with("//"))
                    .collect::<Vec<_>>()
                    .join("\n");

                match serde_json::from_str(&cleaned) {
                    Ok(settings) => settings,
                    Err(e) => {
                        eprintln!("Error parsing settings.json: {}", e);
                        eprintln!("Using default settings");
                        Self::default()
                    }
                }
            }
            Err(e) => {
                eprintln!("Error reading settings.json: {}", e);
                Self::default()
            }
        }
    }

    /// Save current settings to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path();

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;

        fs::write(&path, json).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.default_document, PathBuf::from("fy.json"));
        assert_eq!(s.qr_size_px, 180);
        assert_eq!(s.qr_fullscreen_size_px, 400);
        assert_eq!(s.export_file_name, "excel_data.json");
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let s = Settings::load_from(&dir.path().join("settings.json"));
        assert_eq!(s.qr_size_px, 180);
    }

    #[test]
    fn test_load_from_with_comments_and_partial_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            "{\n// picker card size\n\"qr.sizePx\": 240\n}\n",
        )
        .unwrap();

        let s = Settings::load_from(&path);
        assert_eq!(s.qr_size_px, 240);
        // Unspecified keys keep their defaults
        assert_eq!(s.qr_fullscreen_size_px, 400);
    }

    #[test]
    fn test_load_from_garbage_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();
        let s = Settings::load_from(&path);
        assert_eq!(s.qr_size_px, 180);
    }
}
