//! Presentation-ready view of an evaluation.
//!
//! A front end renders a proportional bar, a coloured banner, the crack-time
//! line and, when anything is unmet, a list of improvements.

use std::fmt;

use crate::types::{CrackTime, PasswordEvaluation, PasswordScore, PasswordStrength, Severity};

const DEFAULT_BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct StrengthReport {
    score: PasswordScore,
    strength: PasswordStrength,
    crack_time: CrackTime,
    improvements: Vec<&'static str>,
}

impl StrengthReport {
    pub fn new(evaluation: &PasswordEvaluation) -> Self {
        Self {
            score: evaluation.score,
            strength: evaluation.strength(),
            crack_time: evaluation.crack_time(),
            improvements: evaluation.unmet.iter().map(|r| r.description()).collect(),
        }
    }

    pub fn score(&self) -> PasswordScore {
        self.score
    }

    /// Fill ratio of the strength bar (score / 5).
    pub fn progress(&self) -> f32 {
        self.score.fraction()
    }

    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    pub fn severity(&self) -> Severity {
        self.strength.severity()
    }

    pub fn banner(&self) -> String {
        format!("Password strength: {}", self.strength)
    }

    pub fn crack_time_line(&self) -> String {
        format!("Estimated time to crack: {}", self.crack_time)
    }

    /// Remediation lines. Empty means the section is not shown.
    pub fn improvements(&self) -> &[&'static str] {
        &self.improvements
    }

    /// Text strength bar, e.g. `[############--------]` for 3/5 at width 20.
    pub fn bar(&self, width: usize) -> String {
        let filled = (self.progress() * width as f32).round() as usize;
        let filled = filled.min(width);
        format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
    }
}

impl From<&PasswordEvaluation> for StrengthReport {
    fn from(evaluation: &PasswordEvaluation) -> Self {
        StrengthReport::new(evaluation)
    }
}

impl fmt::Display for StrengthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.bar(DEFAULT_BAR_WIDTH), self.score)?;
        writeln!(f, "{}", self.banner())?;
        write!(f, "{}", self.crack_time_line())?;
        if !self.improvements.is_empty() {
            write!(f, "\n\nImprovements needed:")?;
            for item in &self.improvements {
                write!(f, "\n- {}", item)?;
            }
        }
        Ok(())
    }
}
