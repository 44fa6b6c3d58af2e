//! Environment variable expansion for string configuration values.

use crate::ConfigError;

/// Expand environment variable references in a configuration string.
///
/// Supports two forms:
/// - `${VAR}` - expands to the value of `VAR`, errors if unset
/// - `${VAR:-default}` - expands to `VAR` if set, otherwise the default
pub(crate) fn expand_env(input: &str) -> Result<String, ConfigError> {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find('}') else {
            // Unterminated reference: keep it literal.
            result.push_str(&rest[start..]);
            rest = "";
            break;
        };

        let reference = &after[..end];
        let (name, default) = match reference.split_once(":-") {
            Some((name, default)) => (name, Some(default)),
            None => (reference, None),
        };

        match std::env::var(name) {
            Ok(value) => result.push_str(&value),
            Err(_) => match default {
                Some(default) => result.push_str(default),
                None => return Err(ConfigError::UnsetVariable(name.to_owned())),
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
    fn test_plain_string_unchanged() {
        assert_eq!(expand_env("http://localhost:5000").unwrap(), "http://localhost:5000");
    }

    #[test]
    fn test_expands_set_variable() {
        // Unique name to avoid interference from parallel tests.
        unsafe { std::env::set_var("FLOWGEN_TEST_EXPAND_SET", "http://svc:8000") };
        assert_eq!(
            expand_env("${FLOWGEN_TEST_EXPAND_SET}").unwrap(),
            "http://svc:8000"
        );
    }

    #[test]
    fn test_default_used_when_unset() {
        assert_eq!(
            expand_env("${FLOWGEN_TEST_EXPAND_UNSET:-http://fallback:5000}").unwrap(),
            "http://fallback:5000"
        );
    }

    #[test]
    fn test_set_variable_beats_default() {
        unsafe { std::env::set_var("FLOWGEN_TEST_EXPAND_BEATS", "real") };
        assert_eq!(expand_env("${FLOWGEN_TEST_EXPAND_BEATS:-fallback}").unwrap(), "real");
    }

    #[test]
    fn test_unset_without_default_errors() {
        let err = expand_env("${FLOWGEN_TEST_EXPAND_MISSING}").unwrap_err();
        assert!(matches!(err, ConfigError::UnsetVariable(name) if name == "FLOWGEN_TEST_EXPAND_MISSING"));
    }

    #[test]
    fn test_surrounding_text_preserved() {
        unsafe { std::env::set_var("FLOWGEN_TEST_EXPAND_HOST", "svc") };
        assert_eq!(
            expand_env("http://${FLOWGEN_TEST_EXPAND_HOST}:5000/api").unwrap(),
            "http://svc:5000/api"
        );
    }

    #[test]
    fn test_unterminated_reference_kept_literal() {
        assert_eq!(expand_env("${OOPS").unwrap(), "${OOPS");
    }
}
