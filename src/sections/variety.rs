//! Character variety sections - uppercase, lowercase, digit, special.
//!
//! All classes are ASCII. Accented or CJK letters satisfy none of them.

/// Characters accepted by the special-character rule.
pub const SPECIAL_CHARS: [char; 8] = ['@', '#', '$', '%', '^', '&', '*', '!'];

pub fn uppercase_section(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn lowercase_section(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn digit_section(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn special_section(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARS.contains(&c))
}
