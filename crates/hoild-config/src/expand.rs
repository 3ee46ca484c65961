//! Environment variable expansion for config strings.
//!
//! Supports `${VAR}` (required) and `${VAR:-default}` (with fallback).
//! Literal text outside `${...}` passes through unchanged.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a config string.
///
/// # Errors
///
/// Returns [`ConfigError::EnvVar`] for an unset variable without a default,
/// or an unterminated `${` reference.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut result = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            return Err(ConfigError::EnvVar {
                field: field.to_owned(),
                message: "unterminated ${ reference".to_owned(),
            });
        };

        let reference = &after[..end];
        let (name, default) = match reference.split_once(":-") {
            Some((name, default)) => (name, Some(default)),
            None => (reference, None),
        };

        match std::env::var(name) {
            Ok(var) => result.push_str(&var),
            Err(_) => match default {
                Some(default) => result.push_str(default),
                None => {
                    return Err(ConfigError::EnvVar {
                        field: field.to_owned(),
                        message: format!("${{{name}}} not set"),
                    });
                }
            },
        }

        rest = &after[end + 1..];
    }

    result.push_str(rest);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_literal_unchanged() {
        let expanded = expand_env("https://cms.example.com", "field").unwrap();
        assert_eq!(expanded, "https://cms.example.com");
    }

    #[test]
    fn test_default_used_when_unset() {
        let expanded =
            expand_env("${HOILD_EXPAND_UNSET:-http://localhost:8000}/wp-json", "field").unwrap();
        assert_eq!(expanded, "http://localhost:8000/wp-json");
    }

    #[test]
    fn test_set_var_wins_over_default() {
        // SAFETY: test-only env mutation; no concurrent readers of this var.
        unsafe { std::env::set_var("HOILD_EXPAND_SET", "https://cms.live") };
        let expanded = expand_env("${HOILD_EXPAND_SET:-http://localhost}", "field").unwrap();
        assert_eq!(expanded, "https://cms.live");
    }

    #[test]
    fn test_unterminated_reference_errors() {
        assert!(expand_env("${OOPS", "field").is_err());
    }
}
