use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::batch::BatchLimits;
use crate::manager::settings_file_path;
use crate::password::{MIN_LENGTH, SecurityLevel};

/// Longest password the form will offer by default.
const MAX_DEFAULT_LENGTH: usize = 128;

/// Form defaults remembered between runs. Never holds generated passwords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Passwords per click (1-10, default 5)
    pub default_count: usize,
    /// Password length (4-128, default 16)
    pub default_length: usize,
    /// Selected radio button on startup
    pub default_security_level: SecurityLevel,
    /// File name used for "Save to File" inside the data directory
    pub export_file_name: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_count: 5,
            default_length: 16,
            default_security_level: SecurityLevel::Medium,
            export_file_name: "passwords.txt".to_string(),
        }
    }
}

impl AppSettings {
    /// Load settings from the data directory, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(&settings_file_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(data) = fs::read_to_string(path) {
                match serde_json::from_str::<AppSettings>(&data) {
                    Ok(mut settings) => {
                        settings.normalize();
                        return settings;
                    }
                    Err(e) => log::warn!("ignoring unreadable settings {}: {e}", path.display()),
                }
            }
        }
        Self::default()
    }

    /// Save settings to the data directory
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&settings_file_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn set_default_count(&mut self, count: usize) {
        let limits = BatchLimits::default();
        self.default_count = count.clamp(limits.min, limits.max);
    }

    pub fn set_default_length(&mut self, length: usize) {
        self.default_length = length.clamp(MIN_LENGTH, MAX_DEFAULT_LENGTH);
    }

    fn normalize(&mut self) {
        self.set_default_count(self.default_count);
        self.set_default_length(self.default_length);
        if self.export_file_name.trim().is_empty() {
            self.export_file_name = Self::default().export_file_name;
        }
    }
}
