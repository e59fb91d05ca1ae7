//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::REQUIREMENTS;
use crate::types::{CrackTime, PasswordEvaluation, PasswordScore, PasswordStrength, ScoreError};

/// Debounce applied before an async evaluation, so typing does not
/// trigger one evaluation per keystroke.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Evaluates password strength and returns a detailed evaluation.
///
/// Runs every section once, in order. The score is the number of
/// sections passed and `unmet` lists the failing ones.
///
/// # Arguments
/// * `password` - The password to evaluate. No trimming or case folding is applied.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let pwd = password.expose_secret();
    let mut unmet = Vec::new();

    for (requirement, section_fn) in REQUIREMENTS {
        if !section_fn(pwd) {
            unmet.push(requirement);
        }
    }

    let passed = REQUIREMENTS.len() - unmet.len();
    // passed <= 5 by construction
    let score = PasswordScore::new(passed as u8).unwrap_or_default();

    #[cfg(feature = "tracing")]
    tracing::debug!(score = score.value(), unmet = unmet.len(), "password evaluated");

    PasswordEvaluation { score, unmet }
}

/// Returns the requirements the password fails, in reporting order.
///
/// An empty password fails all five.
pub fn check_requirements(password: &SecretString) -> Vec<crate::types::Requirement> {
    evaluate_password_strength(password).unmet
}

/// Returns how many requirements the password satisfies.
pub fn score_password(password: &SecretString) -> PasswordScore {
    evaluate_password_strength(password).score
}

/// Maps a raw score to its crack-time estimate.
///
/// # Errors
/// `ScoreError::InvalidArgument` if `score` is not in `0..=5`.
pub fn estimate_crack_time(score: u32) -> Result<CrackTime, ScoreError> {
    PasswordScore::try_from(score).map(|s| s.crack_time())
}

/// Maps a raw score to its strength label.
///
/// # Errors
/// `ScoreError::InvalidArgument` if `score` is not in `0..=5`.
pub fn classify_strength(score: u32) -> Result<PasswordStrength, ScoreError> {
    PasswordScore::try_from(score).map(|s| s.strength())
}

/// Async version that sends evaluation result via channel.
///
/// Waits for [`EVALUATION_DEBOUNCE`] first. If `token` is cancelled during
/// that wait (a newer keystroke superseded this one) nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before start");
            return;
        }
        _ = tokio::time::sleep(EVALUATION_DEBOUNCE) => {}
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Requirement;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_evaluate_empty_password() {
        let evaluation = evaluate_password_strength(&secret(""));

        assert_eq!(evaluation.unmet, Requirement::ALL.to_vec());
        assert_eq!(evaluation.score.value(), 0);
        assert_eq!(evaluation.strength(), PasswordStrength::WEAK);
        assert_eq!(evaluation.crack_time().as_str(), "a few seconds");
    }

    #[test]
    fn test_evaluate_lowercase_only() {
        let evaluation = evaluate_password_strength(&secret("abcdefgh"));

        assert_eq!(
            evaluation.unmet,
            vec![Requirement::Uppercase, Requirement::Digit, Requirement::Special]
        );
        assert_eq!(evaluation.score.value(), 2);
        assert_eq!(evaluation.strength(), PasswordStrength::WEAK);
        assert_eq!(evaluation.crack_time().as_str(), "a few minutes");
    }

    #[test]
    fn test_evaluate_medium_password() {
        let evaluation = evaluate_password_strength(&secret("Abcdefg1"));

        assert_eq!(evaluation.unmet, vec![Requirement::Special]);
        assert_eq!(evaluation.score.value(), 4);
        assert_eq!(evaluation.strength(), PasswordStrength::MEDIUM);
        assert_eq!(evaluation.crack_time().as_str(), "several days");
    }

    #[test]
    fn test_evaluate_strong_password() {
        let evaluation = evaluate_password_strength(&secret("Abcdefg1@"));

        assert!(evaluation.is_acceptable());
        assert_eq!(evaluation.score.value(), 5);
        assert_eq!(evaluation.strength(), PasswordStrength::STRONG);
        assert_eq!(evaluation.crack_time().as_str(), "several years");
    }

    #[test]
    fn test_evaluate_non_ascii_counts_toward_length() {
        let evaluation = evaluate_password_strength(&secret("短abcd1@A"));
        assert_eq!(evaluation.score.value(), 5);

        // seven characters, so only the length rule fails
        let evaluation = evaluate_password_strength(&secret("短abc1@A"));
        assert_eq!(evaluation.unmet, vec![Requirement::MinLength]);
        assert_eq!(evaluation.score.value(), 4);
    }

    #[test]
    fn test_evaluate_no_normalization() {
        let evaluation = evaluate_password_strength(&secret("  abcdef  "));
        assert!(!evaluation.unmet.contains(&Requirement::MinLength));
        assert!(evaluation.unmet.contains(&Requirement::Uppercase));
    }

    #[test]
    fn test_evaluate_very_long_password() {
        let long = "aA1!".repeat(10_000);
        let evaluation = evaluate_password_strength(&secret(&long));
        assert_eq!(evaluation.score.value(), 5);
    }

    #[test]
    fn test_check_and_score_agree() {
        for pwd in ["", "a", "password", "Abcdefg1", "MyPass123!", "!!!!!!!!"] {
            let pwd = secret(pwd);
            let unmet = check_requirements(&pwd);
            let score = score_password(&pwd);
            assert_eq!(unmet.len() + score.value() as usize, 5);
        }
    }

    #[test]
    fn test_estimate_crack_time_range() {
        assert_eq!(estimate_crack_time(0), Ok(CrackTime::FewSeconds));
        assert_eq!(estimate_crack_time(1), Ok(CrackTime::FewSeconds));
        assert_eq!(estimate_crack_time(2), Ok(CrackTime::FewMinutes));
        assert_eq!(estimate_crack_time(3), Ok(CrackTime::FewHours));
        assert_eq!(estimate_crack_time(4), Ok(CrackTime::SeveralDays));
        assert_eq!(estimate_crack_time(5), Ok(CrackTime::SeveralYears));
        assert_eq!(estimate_crack_time(6), Err(ScoreError::InvalidArgument(6)));
    }

    #[test]
    fn test_classify_strength_range() {
        assert_eq!(classify_strength(2), Ok(PasswordStrength::WEAK));
        assert_eq!(classify_strength(3), Ok(PasswordStrength::MEDIUM));
        assert_eq!(classify_strength(4), Ok(PasswordStrength::MEDIUM));
        assert_eq!(classify_strength(5), Ok(PasswordStrength::STRONG));
        assert!(matches!(
            classify_strength(u32::MAX),
            Err(ScoreError::InvalidArgument(_))
        ));
    }
}

#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());

        evaluate_password_strength_tx(&pwd, token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.score.value(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_with_cancellation() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("SomePassword123!".to_string().into());
        evaluate_password_strength_tx(&pwd, token, tx).await;

        // sender dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_with_closed_receiver() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let pwd = SecretString::new("abc".to_string().into());
        evaluate_password_strength_tx(&pwd, CancellationToken::new(), tx).await;
    }
}
