//! Error types for password generation and the desktop form.

use thiserror::Error;

/// Rejections raised by [`crate::password::PasswordGenerator`] before any sampling happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Password length should be at least {min} characters, got {length}")]
    InvalidLength { length: usize, min: usize },

    #[error("Invalid security level: {0:?}")]
    InvalidSecurityLevel(String),

    #[error("Custom security level selected but no character set was provided")]
    MissingCharset,

    #[error("Character set is empty")]
    EmptyCharset,
}

impl GenerationError {
    /// True for both flavours of "custom level without usable characters".
    pub fn is_charset_error(&self) -> bool {
        matches!(self, Self::MissingCharset | Self::EmptyCharset)
    }
}

/// Input problems caught by the form before the generator is called.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter a valid number between {min} and {max}.")]
    InvalidCount { min: usize, max: usize },

    #[error("Please enter a valid password length of at least {min}.")]
    InvalidLength { min: usize },

    #[error("Please enter a custom character set.")]
    MissingCustomCharset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_error_classification() {
        assert!(GenerationError::MissingCharset.is_charset_error());
        assert!(GenerationError::EmptyCharset.is_charset_error());
        assert!(!GenerationError::InvalidLength { length: 2, min: 4 }.is_charset_error());
        assert!(!GenerationError::InvalidSecurityLevel("ultra".into()).is_charset_error());
    }

    #[test]
    fn test_form_messages() {
        let err = FormError::InvalidCount { min: 1, max: 10 };
        assert_eq!(err.to_string(), "Please enter a valid number between 1 and 10.");

        let err = FormError::InvalidLength { min: 4 };
        assert_eq!(err.to_string(), "Please enter a valid password length of at least 4.");

        assert_eq!(
            FormError::MissingCustomCharset.to_string(),
            "Please enter a custom character set."
        );
    }
}
