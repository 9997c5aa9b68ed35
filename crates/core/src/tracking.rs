//! Validation rules for tracked titles.

use crate::error::CoreError;

/// Entity name used in not-found errors.
pub const ANIME_ENTITY: &str = "Anime";

/// Build the validation error for a set of `(field, is_missing)` pairs.
///
/// Missing fields are listed in the order given so the message is stable.
pub fn missing_fields_error(fields: &[(&'static str, bool)]) -> CoreError {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, is_missing)| *is_missing)
        .map(|(name, _)| *name)
        .collect();
    CoreError::Validation(format!(
        "Missing required field(s): {}",
        missing.join(", ")
    ))
}

/// Treat blank strings the same as an absent value.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Episode counters must not be negative.
pub fn validate_episode_counts(current: i64, total: Option<i64>) -> Result<(), CoreError> {
    if current < 0 {
        return Err(CoreError::Validation(format!(
            "current_episode must be non-negative, got {current}"
        )));
    }
    if let Some(total) = total {
        if total < 0 {
            return Err(CoreError::Validation(format!(
                "total_episodes must be non-negative, got {total}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_listed_in_order() {
        let err = missing_fields_error(&[
            ("title", true),
            ("current_episode", false),
            ("platform", true),
        ]);
        match err {
            CoreError::Validation(msg) => {
                assert_eq!(msg, "Missing required field(s): title, platform")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn blank_strings_count_as_missing() {
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("Frieren".to_string())).as_deref(), Some("Frieren"));
    }

    #[test]
    fn episode_counts_accept_zero_and_absent_total() {
        assert!(validate_episode_counts(0, None).is_ok());
        assert!(validate_episode_counts(12, Some(24)).is_ok());
    }

    #[test]
    fn negative_current_episode_rejected() {
        assert!(matches!(
            validate_episode_counts(-1, None),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn negative_total_episodes_rejected() {
        assert!(matches!(
            validate_episode_counts(3, Some(-12)),
            Err(CoreError::Validation(_))
        ));
    }
}
