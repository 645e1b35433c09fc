use std::fmt;
use std::str::FromStr;

use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Shortest password the generator will produce.
pub const MIN_LENGTH: usize = 4;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()";

/// Selects which character set a password is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityLevel {
    /// Lowercase letters and digits
    Low,
    /// Lowercase letters, digits and `!@#$%^&*()`
    #[default]
    Medium,
    /// Upper- and lowercase letters, digits and `!@#$%^&*()`
    High,
    /// Whatever the caller supplies
    Custom,
}

impl SecurityLevel {
    pub const ALL: [SecurityLevel; 4] = [
        SecurityLevel::Low,
        SecurityLevel::Medium,
        SecurityLevel::High,
        SecurityLevel::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SecurityLevel::Low => "low",
            SecurityLevel::Medium => "medium",
            SecurityLevel::High => "high",
            SecurityLevel::Custom => "custom",
        }
    }

    /// Label shown next to the radio button
    pub fn label(self) -> &'static str {
        match self {
            SecurityLevel::Low => "Low",
            SecurityLevel::Medium => "Medium",
            SecurityLevel::High => "High",
            SecurityLevel::Custom => "Custom",
        }
    }

    /// The hardcoded character set for this level, or `None` for `Custom`.
    pub fn fixed_charset(self) -> Option<String> {
        match self {
            SecurityLevel::Low => Some([LOWERCASE, DIGITS].concat()),
            SecurityLevel::Medium => Some([LOWERCASE, DIGITS, SYMBOLS].concat()),
            SecurityLevel::High => Some([UPPERCASE, LOWERCASE, DIGITS, SYMBOLS].concat()),
            SecurityLevel::Custom => None,
        }
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecurityLevel {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SecurityLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GenerationError::InvalidSecurityLevel(s.to_string()))
    }
}

/// Ordered, non-empty pool of characters that a password is sampled from.
///
/// Duplicates are kept, so a custom set like `"aab"` makes `a` twice as likely as `b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset(Vec<char>);

impl Charset {
    /// Resolves the charset for `level`. `custom` is only consulted for
    /// [`SecurityLevel::Custom`] and ignored otherwise.
    pub fn for_level(level: SecurityLevel, custom: Option<&str>) -> Result<Self, GenerationError> {
        let chars: Vec<char> = match (level.fixed_charset(), custom) {
            (Some(fixed), _) => fixed.chars().collect(),
            (None, None) => return Err(GenerationError::MissingCharset),
            (None, Some(custom)) => custom.chars().collect(),
        };

        if chars.is_empty() {
            return Err(GenerationError::EmptyCharset);
        }
        Ok(Charset(chars))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Everything needed to produce one password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub length: usize,
    pub security_level: SecurityLevel,
    pub custom_charset: Option<String>,
}

impl GenerationRequest {
    pub fn new(length: usize, security_level: SecurityLevel) -> Self {
        Self {
            length,
            security_level,
            custom_charset: None,
        }
    }

    pub fn custom(length: usize, charset: impl Into<String>) -> Self {
        Self {
            length,
            security_level: SecurityLevel::Custom,
            custom_charset: Some(charset.into()),
        }
    }

    /// Checks the length first, then resolves the charset.
    pub fn validate(&self) -> Result<Charset, GenerationError> {
        validate(self.length, self.security_level, self.custom_charset.as_deref())
    }
}

fn validate(
    length: usize,
    level: SecurityLevel,
    custom: Option<&str>,
) -> Result<Charset, GenerationError> {
    check_length(length)?;
    Charset::for_level(level, custom)
}

fn check_length(length: usize) -> Result<(), GenerationError> {
    if length < MIN_LENGTH {
        return Err(GenerationError::InvalidLength {
            length,
            min: MIN_LENGTH,
        });
    }
    Ok(())
}

/// Random password generator owning its random source.
///
/// Every character is drawn independently and uniformly from the charset, so a
/// password is not guaranteed to contain each character class, nor to be free
/// of repeats.
pub struct PasswordGenerator<R = ThreadRng> {
    rng: R,
}

impl PasswordGenerator<ThreadRng> {
    /// Uses the thread-local CSPRNG (`rand::rng()`), reseeded from the OS.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGenerator<StdRng> {
    /// Deterministic generator for reproducible output. Not for real passwords.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.generate_with(
            request.length,
            request.security_level,
            request.custom_charset.as_deref(),
        )
    }

    pub fn generate_with(
        &mut self,
        length: usize,
        level: SecurityLevel,
        custom_charset: Option<&str>,
    ) -> Result<String, GenerationError> {
        let charset = validate(length, level, custom_charset).inspect_err(|e| {
            log::warn!("rejected password request (level={level}, length={length}): {e}");
        })?;

        log::debug!(
            "generating password: level={level}, length={length}, charset_size={}",
            charset.len()
        );
        Ok(self.sample(&charset, length))
    }

    /// Same as [`generate_with`](Self::generate_with) but takes the level as text
    /// (`"low"`, `"medium"`, `"high"`, `"custom"`). A short length is reported
    /// before an unknown level.
    pub fn generate_from_str(
        &mut self,
        length: usize,
        level: &str,
        custom_charset: Option<&str>,
    ) -> Result<String, GenerationError> {
        check_length(length)?;
        let level = level.parse::<SecurityLevel>()?;
        self.generate_with(length, level, custom_charset)
    }

    /// Draws `length` characters with replacement, then shuffles them.
    ///
    /// The shuffle does not change the distribution of the result; it only keeps
    /// the consumption of the random stream identical to draw-then-shuffle.
    fn sample(&mut self, charset: &Charset, length: usize) -> String {
        let chars = charset.as_slice();
        let mut password: Vec<char> = (0..length)
            .map(|_| chars[self.rng.random_range(0..chars.len())])
            .collect();
        password.shuffle(&mut self.rng);
        password.into_iter().collect()
    }
}

/// One-shot helper using a fresh thread-local generator.
pub fn generate_password(
    length: usize,
    level: SecurityLevel,
    custom_charset: Option<&str>,
) -> Result<String, GenerationError> {
    PasswordGenerator::new().generate_with(length, level, custom_charset)
}
