//! Evaluation types: requirements, score, strength label and crack-time estimate.

use std::fmt;
use thiserror::Error;

/// Raised when a raw score does not come from `score_password`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    #[error("score {0} is outside 0..=5")]
    InvalidArgument(u32),
}

/// One of the five rules a password is checked against.
///
/// The declaration order is the reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Requirement {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl Requirement {
    /// Every requirement, in reporting order.
    pub const ALL: [Requirement; 5] = [
        Requirement::MinLength,
        Requirement::Uppercase,
        Requirement::Lowercase,
        Requirement::Digit,
        Requirement::Special,
    ];

    /// Fixed remediation text shown when the requirement is not met.
    pub fn description(&self) -> &'static str {
        match self {
            Requirement::MinLength => "Password must be at least 8 characters",
            Requirement::Uppercase => "Password must contain an uppercase letter",
            Requirement::Lowercase => "Password must contain a lowercase letter",
            Requirement::Digit => "Password must contain a digit",
            Requirement::Special => "Password must contain a special character (@#$%^&*!)",
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Number of satisfied requirements, always within `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: u8 = Requirement::ALL.len() as u8;

    pub fn new(value: u8) -> Result<Self, ScoreError> {
        if value > Self::MAX {
            return Err(ScoreError::InvalidArgument(value as u32));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Share of the strength bar to fill, in `0.0..=1.0`.
    pub fn fraction(&self) -> f32 {
        self.0 as f32 / Self::MAX as f32
    }

    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(*self)
    }

    pub fn crack_time(&self) -> CrackTime {
        CrackTime::from_score(*self)
    }
}

impl TryFrom<u32> for PasswordScore {
    type Error = ScoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| ScoreError::InvalidArgument(value))
            .and_then(PasswordScore::new)
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Qualitative strength bucket.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordStrength {
    WEAK,
    MEDIUM,
    STRONG,
}

impl PasswordStrength {
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            0..=2 => PasswordStrength::WEAK,
            3..=4 => PasswordStrength::MEDIUM,
            _ => PasswordStrength::STRONG,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            PasswordStrength::WEAK => Severity::Error,
            PasswordStrength::MEDIUM => Severity::Warning,
            PasswordStrength::STRONG => Severity::Success,
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PasswordStrength::WEAK => "WEAK",
            PasswordStrength::MEDIUM => "MEDIUM",
            PasswordStrength::STRONG => "STRONG",
        };
        f.write_str(label)
    }
}

/// How a front end should colour the strength banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Success,
}

/// Fixed brute-force estimate keyed by score, not by entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrackTime {
    FewSeconds,
    FewMinutes,
    FewHours,
    SeveralDays,
    SeveralYears,
}

impl CrackTime {
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            0 | 1 => CrackTime::FewSeconds,
            2 => CrackTime::FewMinutes,
            3 => CrackTime::FewHours,
            4 => CrackTime::SeveralDays,
            _ => CrackTime::SeveralYears,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CrackTime::FewSeconds => "a few seconds",
            CrackTime::FewMinutes => "a few minutes",
            CrackTime::FewHours => "a few hours",
            CrackTime::SeveralDays => "several days",
            CrackTime::SeveralYears => "several years",
        }
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single evaluation pass.
///
/// `score` and `unmet` come from the same predicate run, so
/// `score.value() + unmet.len() == 5` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    pub unmet: Vec<Requirement>,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        self.score.strength()
    }

    pub fn crack_time(&self) -> CrackTime {
        self.score.crack_time()
    }

    /// Remediation messages, in reporting order.
    pub fn reasons(&self) -> Vec<String> {
        self.unmet.iter().map(|r| r.description().to_string()).collect()
    }

    pub fn is_acceptable(&self) -> bool {
        self.unmet.is_empty()
    }
}
