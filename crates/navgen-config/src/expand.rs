//! `${VAR}` expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Values without any `${` are returned untouched, including bare `$VAR`.
/// Once a value contains `${`, bare `$VAR` references in it are expanded
/// too. `field` names the config key in errors.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var)
            .map(Some)
            .map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Variable referenced without a default that is not set.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NAVGEN_TEST_TITLE", "Field Notes");
        }
        let result = expand_env("${NAVGEN_TEST_TITLE}", "site.title").unwrap();
        assert_eq!(result, "Field Notes");
        unsafe {
            std::env::remove_var("NAVGEN_TEST_TITLE");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("NAVGEN_TEST_UNSET_LANG");
        }
        let result = expand_env("${NAVGEN_TEST_UNSET_LANG:-en-US}", "site.lang").unwrap();
        assert_eq!(result, "en-US");
    }

    #[test]
    fn test_expand_embedded() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NAVGEN_TEST_ROOT", "/srv/site");
        }
        let result = expand_env("${NAVGEN_TEST_ROOT}/docs", "docs.source_dir").unwrap();
        assert_eq!(result, "/srv/site/docs");
        unsafe {
            std::env::remove_var("NAVGEN_TEST_ROOT");
        }
    }

    #[test]
    fn test_missing_var_names_field_and_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("NAVGEN_TEST_MISSING");
        }
        let err = expand_env("${NAVGEN_TEST_MISSING}", "site.description").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let msg = err.to_string();
        assert!(msg.contains("NAVGEN_TEST_MISSING"));
        assert!(msg.contains("site.description"));
    }

    #[test]
    fn test_bare_var_expanded_alongside_braced() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NAVGEN_TEST_MIXED_ROOT", "/srv");
            std::env::set_var("NAVGEN_TEST_MIXED_DIR", "docs");
        }
        let result = expand_env(
            "${NAVGEN_TEST_MIXED_ROOT}/$NAVGEN_TEST_MIXED_DIR",
            "docs.source_dir",
        )
        .unwrap();
        assert_eq!(result, "/srv/docs");
        unsafe {
            std::env::remove_var("NAVGEN_TEST_MIXED_ROOT");
            std::env::remove_var("NAVGEN_TEST_MIXED_DIR");
        }
    }

    #[test]
    fn test_literals_unchanged() {
        assert_eq!(expand_env("Notes", "site.title").unwrap(), "Notes");
        assert_eq!(expand_env("$HOME", "site.title").unwrap(), "$HOME");
        assert_eq!(expand_env("costs $5", "site.title").unwrap(), "costs $5");
    }
}
