//! Length section - checks password minimum length.

pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length.
///
/// Length is counted in characters, not bytes, so multi-byte
/// characters count once each.
pub fn length_section(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}
