//! Producing several passwords in one go.

use std::ops::RangeInclusive;

use rand::Rng;
use rand::rngs::ThreadRng;

use crate::error::{FormError, GenerationError};
use crate::password::{GenerationRequest, PasswordGenerator, SecurityLevel};

/// Result of a batch run.
///
/// `passwords` holds everything generated before `error` (if any) stopped the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub passwords: Vec<String>,
    pub error: Option<GenerationError>,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Drops the partial list and returns just the passwords, or the error.
    pub fn into_result(self) -> Result<Vec<String>, GenerationError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.passwords),
        }
    }
}

/// How many passwords a caller may ask for at once.
///
/// This is a caller policy, not something the generator enforces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchLimits {
    pub min: usize,
    pub max: usize,
}

impl Default for BatchLimits {
    fn default() -> Self {
        Self { min: 1, max: 10 }
    }
}

impl BatchLimits {
    pub fn range(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }

    pub fn check(&self, count: usize) -> Result<usize, FormError> {
        if self.range().contains(&count) {
            Ok(count)
        } else {
            Err(FormError::InvalidCount {
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Wraps a [`PasswordGenerator`] to produce `count` independent passwords.
pub struct BatchGenerator<R = ThreadRng> {
    generator: PasswordGenerator<R>,
}

impl BatchGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self {
            generator: PasswordGenerator::new(),
        }
    }
}

impl Default for BatchGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> BatchGenerator<R> {
    pub fn with_generator(generator: PasswordGenerator<R>) -> Self {
        Self { generator }
    }

    pub fn generate(&mut self, count: usize, request: &GenerationRequest) -> BatchOutcome {
        let mut outcome = BatchOutcome {
            passwords: Vec::with_capacity(count),
            error: None,
        };

        for _ in 0..count {
            match self.generator.generate(request) {
                Ok(pwd) => outcome.passwords.push(pwd),
                Err(e) => {
                    log::warn!(
                        "batch stopped after {} of {count} passwords: {e}",
                        outcome.passwords.len()
                    );
                    outcome.error = Some(e);
                    break;
                }
            }
        }
        outcome
    }

    pub fn generate_with(
        &mut self,
        count: usize,
        length: usize,
        level: SecurityLevel,
        custom_charset: Option<&str>,
    ) -> BatchOutcome {
        let request = GenerationRequest {
            length,
            security_level: level,
            custom_charset: custom_charset.map(str::to_string),
        };
        self.generate(count, &request)
    }
}

/// One-shot batch using a fresh thread-local generator.
pub fn generate_batch(
    count: usize,
    length: usize,
    level: SecurityLevel,
    custom_charset: Option<&str>,
) -> BatchOutcome {
    BatchGenerator::new().generate_with(count, length, level, custom_charset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_count_and_alphabet() {
        let mut batch = BatchGenerator::with_generator(PasswordGenerator::seeded(3));
        let outcome = batch.generate_with(5, 12, SecurityLevel::Low, None);
        assert!(outcome.is_complete());
        assert_eq!(outcome.passwords.len(), 5);
        for pwd in &outcome.passwords {
            assert_eq!(pwd.len(), 12);
            assert!(pwd.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_batch_stops_on_first_error() {
        let outcome = generate_batch(5, 3, SecurityLevel::Low, None);
        assert!(outcome.passwords.is_empty());
        assert_eq!(
            outcome.error,
            Some(GenerationError::InvalidLength { length: 3, min: 4 })
        );
    }

    #[test]
    fn test_zero_count_is_empty_success() {
        let outcome = generate_batch(0, 12, SecurityLevel::High, None);
        assert!(outcome.is_complete());
        assert!(outcome.passwords.is_empty());
    }

    #[test]
    fn test_into_result() {
        let ok = generate_batch(2, 8, SecurityLevel::Medium, None).into_result();
        assert_eq!(ok.unwrap().len(), 2);

        let err = generate_batch(2, 8, SecurityLevel::Custom, None).into_result();
        assert_eq!(err, Err(GenerationError::MissingCharset));
    }

    #[test]
    fn test_default_limits() {
        let limits = BatchLimits::default();
        assert_eq!(limits.check(1), Ok(1));
        assert_eq!(limits.check(10), Ok(10));
        assert_eq!(limits.check(0), Err(FormError::InvalidCount { min: 1, max: 10 }));
        assert_eq!(limits.check(11), Err(FormError::InvalidCount { min: 1, max: 10 }));
    }

    #[test]
    fn test_relaxed_limits() {
        let limits = BatchLimits { min: 1, max: 100 };
        assert_eq!(limits.check(50), Ok(50));
    }
}
