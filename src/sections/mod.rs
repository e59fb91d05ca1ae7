//! Password evaluation sections
//!
//! Each section is a predicate over the raw password. `REQUIREMENTS` is the
//! only place the five rules are listed; both the score and the unmet list
//! are derived from one pass over it.

pub(crate) mod length;
pub(crate) mod variety;

pub use length::length_section;
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

use crate::types::Requirement;

/// Predicate signature: `true` when the requirement is satisfied.
pub type Section = fn(&str) -> bool;

/// Canonical ordered rule list.
pub const REQUIREMENTS: [(Requirement, Section); 5] = [
    (Requirement::MinLength, length_section),
    (Requirement::Uppercase, uppercase_section),
    (Requirement::Lowercase, lowercase_section),
    (Requirement::Digit, digit_section),
    (Requirement::Special, special_section),
];
