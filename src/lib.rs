//! Password strength gauge
//!
//! Scores a password against five fixed rules (length, uppercase,
//! lowercase, digit, special character), labels it WEAK / MEDIUM / STRONG
//! and attaches a fixed crack-time estimate. A small hashed login gate
//! and explicit session state are provided for front ends.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GAUGE_CREDENTIALS_PATH`: Custom path to the credentials file
//!   (default: `./assets/credentials.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_gauge::{evaluate_password_strength, PasswordStrength, StrengthReport};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefg1".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! assert_eq!(evaluation.score.value(), 4);
//! assert_eq!(evaluation.strength(), PasswordStrength::MEDIUM);
//! println!("{}", StrengthReport::new(&evaluation));
//! ```

// Internal modules
mod credentials;
mod evaluator;
mod report;
mod sections;
mod session;
mod types;

// Public API
pub use credentials::{
    get_credentials_path, CredentialError, CredentialStore, CredentialVerifier,
    CREDENTIALS_PATH_ENV,
};
pub use evaluator::{
    check_requirements, classify_strength, estimate_crack_time, evaluate_password_strength,
    score_password,
};
pub use report::StrengthReport;
pub use sections::length::MIN_LENGTH;
pub use sections::variety::SPECIAL_CHARS;
pub use session::{LoginOutcome, Session, REJECTION_MESSAGE};
pub use types::{
    CrackTime, PasswordEvaluation, PasswordScore, PasswordStrength, Requirement, ScoreError,
    Severity,
};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_strength_tx, EVALUATION_DEBOUNCE};
