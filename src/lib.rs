//! Random password generation with fixed or custom character sets, plus the
//! form state and egui front end that drive it.

pub mod app;
pub mod batch;
pub mod error;
pub mod export;
pub mod form;
pub mod manager;
pub mod password;
pub mod settings;

pub use batch::{BatchGenerator, BatchLimits, BatchOutcome, generate_batch};
pub use error::{FormError, GenerationError};
pub use password::{
    Charset, GenerationRequest, MIN_LENGTH, PasswordGenerator, SecurityLevel, generate_password,
};
