//! State behind the generator form, kept free of any GUI toolkit so it can be
//! driven from tests. `app.rs` only renders it and forwards clicks.

use std::path::{Path, PathBuf};

use rand::Rng;
use zeroize::Zeroize;

use crate::batch::{BatchGenerator, BatchLimits};
use crate::error::FormError;
use crate::export::save_passwords;
use crate::password::{GenerationRequest, MIN_LENGTH, SecurityLevel};
use crate::settings::AppSettings;

/// What happened on the last "Save to File" click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Saved(PathBuf),
    /// The file exists; call [`FormState::save_confirmed`] with this path to replace it.
    NeedsConfirmation(PathBuf),
    Cancelled,
    Failed(String),
}

pub struct FormState {
    pub count_input: String,
    pub length_input: String,
    pub custom_charset_input: String,
    pub save_path_input: String,
    security_level: SecurityLevel,
    limits: BatchLimits,

    passwords: Vec<String>,
    message: Option<String>,
    save_enabled: bool,
    pub save_status: Option<SaveStatus>,
}

impl FormState {
    pub fn from_settings(settings: &AppSettings, save_path: &Path) -> Self {
        Self {
            count_input: settings.default_count.to_string(),
            length_input: settings.default_length.to_string(),
            custom_charset_input: String::new(),
            save_path_input: save_path.display().to_string(),
            security_level: settings.default_security_level,
            limits: BatchLimits::default(),
            passwords: Vec::new(),
            message: None,
            save_enabled: false,
            save_status: None,
        }
    }

    pub fn security_level(&self) -> SecurityLevel {
        self.security_level
    }

    /// Radio button handler. Text typed into the custom field is kept while disabled.
    pub fn select_level(&mut self, level: SecurityLevel) {
        self.security_level = level;
    }

    pub fn custom_charset_enabled(&self) -> bool {
        self.security_level == SecurityLevel::Custom
    }

    pub fn save_enabled(&self) -> bool {
        self.save_enabled
    }

    pub fn passwords(&self) -> &[String] {
        &self.passwords
    }

    /// Validation or generation message shown under the passwords, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Lines for the output area: the passwords, then the message if any.
    /// Borrowed so no extra copies of the passwords are made per frame.
    pub fn output_lines(&self) -> impl Iterator<Item = &str> {
        self.passwords
            .iter()
            .map(String::as_str)
            .chain(self.message.as_deref())
    }

    /// Turns the text fields into a count and a request, in the order the form checks them.
    pub fn parse_inputs(&self) -> Result<(usize, GenerationRequest), FormError> {
        let count = self
            .count_input
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| self.limits.check(n).ok())
            .ok_or(FormError::InvalidCount {
                min: self.limits.min,
                max: self.limits.max,
            })?;

        let length = self
            .length_input
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|&n| n >= MIN_LENGTH)
            .ok_or(FormError::InvalidLength { min: MIN_LENGTH })?;

        let custom_charset = if self.custom_charset_enabled() {
            if self.custom_charset_input.is_empty() {
                return Err(FormError::MissingCustomCharset);
            }
            Some(self.custom_charset_input.clone())
        } else {
            None
        };

        Ok((
            count,
            GenerationRequest {
                length,
                security_level: self.security_level,
                custom_charset,
            },
        ))
    }

    /// "Show Passwords" handler.
    pub fn show_passwords<R: Rng>(&mut self, batch: &mut BatchGenerator<R>) {
        self.clear_output();

        let (count, request) = match self.parse_inputs() {
            Ok(parsed) => parsed,
            Err(e) => {
                log::debug!("form rejected input: {e}");
                self.message = Some(e.to_string());
                self.save_enabled = false;
                return;
            }
        };

        let outcome = batch.generate(count, &request);
        self.passwords = outcome.passwords;
        if let Some(e) = outcome.error {
            self.message = Some(format!("Error: {e}"));
        }
        self.save_enabled = !self.passwords.is_empty();
    }

    /// "Save to File" handler. An empty path means the user cancelled.
    pub fn save(&mut self) -> SaveStatus {
        let status = match self.target_path() {
            Some(path) if path.exists() => SaveStatus::NeedsConfirmation(path),
            Some(path) => self.write_to(path),
            None => SaveStatus::Cancelled,
        };
        self.save_status = Some(status.clone());
        status
    }

    /// "Overwrite" handler. Writes only to `confirmed`, the path the prompt was
    /// shown for, even if the path field was edited in the meantime.
    pub fn save_confirmed(&mut self, confirmed: &Path) -> SaveStatus {
        let status = if self.save_enabled {
            self.write_to(confirmed.to_path_buf())
        } else {
            SaveStatus::Cancelled
        };
        self.save_status = Some(status.clone());
        status
    }

    fn target_path(&self) -> Option<PathBuf> {
        let trimmed = self.save_path_input.trim();
        if !self.save_enabled || trimmed.is_empty() {
            return None;
        }
        Some(PathBuf::from(trimmed))
    }

    fn write_to(&self, path: PathBuf) -> SaveStatus {
        match save_passwords(&path, &self.passwords) {
            Ok(()) => SaveStatus::Saved(path),
            Err(e) => {
                log::error!("failed to save passwords to {}: {e}", path.display());
                SaveStatus::Failed(e.to_string())
            }
        }
    }

    /// Copies the current inputs into `settings` when they are valid.
    /// Returns true if anything changed.
    pub fn remember_in(&self, settings: &mut AppSettings) -> bool {
        let Ok((count, request)) = self.parse_inputs() else {
            return false;
        };
        let before = settings.clone();
        settings.set_default_count(count);
        settings.set_default_length(request.length);
        settings.default_security_level = request.security_level;
        *settings != before
    }

    pub fn clear_output(&mut self) {
        self.passwords.zeroize();
        self.message = None;
        self.save_status = None;
    }
}

impl Drop for FormState {
    fn drop(&mut self) {
        self.passwords.zeroize();
    }
}
