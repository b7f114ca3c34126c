//! Input validation functions
//!
//! Validation utilities shared by the backend and any embedding client.

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if !email.contains('@') || !email.contains('.') {
        return Err("Invalid email format".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password length bounds
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate rep count for a workout (1-999)
pub fn validate_reps(reps: i32) -> Result<(), String> {
    if reps < 1 {
        return Err("Reps must be at least 1".to_string());
    }
    if reps > 999 {
        return Err("Reps must be at most 999".to_string());
    }
    Ok(())
}

/// Validate a mood score (1-10), used for both mood logs and journal moods
pub fn validate_mood_score(score: i32) -> Result<(), String> {
    if !(1..=10).contains(&score) {
        return Err("Mood score must be between 1 and 10".to_string());
    }
    Ok(())
}

/// Validate a journal or resource title
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title cannot be empty".to_string());
    }
    if title.len() > 200 {
        return Err("Title too long".to_string());
    }
    Ok(())
}

/// Result of scoring a password against the signup requirements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    pub is_valid: bool,
    /// Requirements the password failed, as display strings
    pub missing: Vec<String>,
    /// 0-5, one point per satisfied requirement
    pub score: u8,
}

/// Score a password against the signup requirements: length, uppercase,
/// lowercase, digit, special character.
pub fn password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength {
            is_valid: false,
            missing: vec!["Password is required".to_string()],
            score: 0,
        };
    }

    let mut missing = Vec::new();
    let mut score = 0u8;

    if password.len() >= 8 {
        score += 1;
    } else {
        missing.push("At least 8 characters".to_string());
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    } else {
        missing.push("One uppercase letter (A-Z)".to_string());
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    } else {
        missing.push("One lowercase letter (a-z)".to_string());
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    } else {
        missing.push("One number (0-9)".to_string());
    }
    if password
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace())
    {
        score += 1;
    } else {
        missing.push("One special character (!@#$%^&* etc.)".to_string());
    }

    PasswordStrength {
        is_valid: missing.is_empty(),
        missing,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user.name@domain.co.uk").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no@dot").is_err());
        assert!(validate_email("spaces in@email.com").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("password123").is_ok());
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"a".repeat(129)).is_err());
    }

    #[test]
    fn test_validate_reps_bounds() {
        assert!(validate_reps(1).is_ok());
        assert!(validate_reps(500).is_ok());
        assert!(validate_reps(999).is_ok());
        assert!(validate_reps(0).is_err());
        assert!(validate_reps(1000).is_err());
        assert!(validate_reps(-5).is_err());
    }

    #[test]
    fn test_validate_mood_score_bounds() {
        assert!(validate_mood_score(1).is_ok());
        assert!(validate_mood_score(10).is_ok());
        assert!(validate_mood_score(0).is_err());
        assert!(validate_mood_score(11).is_err());
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Leg day").is_ok());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"x".repeat(201)).is_err());
    }

    #[test]
    fn test_password_strength_full_score() {
        let strength = password_strength("Str0ng!pass");
        assert!(strength.is_valid);
        assert_eq!(strength.score, 5);
        assert!(strength.missing.is_empty());
    }

    #[test]
    fn test_password_strength_missing_requirements() {
        let strength = password_strength("alllowercase");
        assert!(!strength.is_valid);
        assert_eq!(strength.score, 2); // length + lowercase
        assert_eq!(strength.missing.len(), 3);
    }

    #[test]
    fn test_password_strength_empty() {
        let strength = password_strength("");
        assert!(!strength.is_valid);
        assert_eq!(strength.score, 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_reps_range(reps in 1i32..=999) {
            prop_assert!(validate_reps(reps).is_ok());
        }

        #[test]
        fn prop_invalid_reps_above_max(reps in 1000i32..100_000) {
            prop_assert!(validate_reps(reps).is_err());
        }

        #[test]
        fn prop_valid_mood_range(score in 1i32..=10) {
            prop_assert!(validate_mood_score(score).is_ok());
        }

        #[test]
        fn prop_password_length_valid(len in 8usize..=128) {
            let password: String = (0..len).map(|_| 'a').collect();
            prop_assert!(validate_password(&password).is_ok());
        }

        #[test]
        fn prop_strength_score_bounded(password in ".{0,64}") {
            let strength = password_strength(&password);
            prop_assert!(strength.score <= 5);
            prop_assert_eq!(strength.is_valid, strength.missing.is_empty());
        }
    }
}
