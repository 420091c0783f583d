//! Environment variable parsing helpers
//!
//! All configuration for the entrypoint comes from the process environment.
//! This trait gives every type ergonomic accessors for the common patterns:
//! value-with-default, optional value, boolean flag, and typed parse.

use std::env;
use std::str::FromStr;

/// Extension trait for reading configuration from environment variables.
pub trait EnvExt {
    /// Get an environment variable, falling back to a default.
    ///
    /// # Example
    /// ```ignore
    /// let cmd = String::env_or("MIGRATION_COMMAND", "alembic upgrade head");
    /// ```
    fn env_or(name: &str, default: &str) -> String {
        env::var(name).unwrap_or_else(|_| default.to_string())
    }

    /// Get an environment variable if it is set and non-empty.
    ///
    /// Empty values are treated as unset so that `FOO=` in a compose file
    /// behaves the same as leaving `FOO` out entirely.
    fn env_opt(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.is_empty())
    }

    /// Get an environment variable as a boolean.
    ///
    /// Returns `true` only for the value "true" (case-insensitive),
    /// otherwise `default`.
    fn env_bool(name: &str, default: bool) -> bool {
        env::var(name)
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(default)
    }

    /// Get an environment variable parsed as `T`, or `default` when the
    /// variable is unset or unparseable.
    ///
    /// # Example
    /// ```ignore
    /// let attempts: u32 = u32::env_parse("DB_WAIT_MAX_ATTEMPTS", 30);
    /// ```
    fn env_parse<T: FromStr>(name: &str, default: T) -> T {
        env::var(name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}

// Blanket implementation for all types
impl<T> EnvExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_or_returns_default_when_unset() {
        assert_eq!(
            String::env_or("PG_ENTRYPOINT_TEST_UNSET_OR", "fallback"),
            "fallback"
        );
    }

    #[test]
    fn env_opt_treats_empty_as_unset() {
        env::set_var("PG_ENTRYPOINT_TEST_EMPTY_OPT", "");
        assert_eq!(String::env_opt("PG_ENTRYPOINT_TEST_EMPTY_OPT"), None);
        env::remove_var("PG_ENTRYPOINT_TEST_EMPTY_OPT");
    }

    #[test]
    fn env_parse_falls_back_on_garbage() {
        env::set_var("PG_ENTRYPOINT_TEST_PARSE", "not-a-number");
        assert_eq!(u32::env_parse("PG_ENTRYPOINT_TEST_PARSE", 7), 7);
        env::remove_var("PG_ENTRYPOINT_TEST_PARSE");
    }

    #[test]
    fn env_bool_is_strict_about_true() {
        env::set_var("PG_ENTRYPOINT_TEST_BOOL", "True");
        assert!(bool::env_bool("PG_ENTRYPOINT_TEST_BOOL", false));
        env::set_var("PG_ENTRYPOINT_TEST_BOOL", "1");
        assert!(!bool::env_bool("PG_ENTRYPOINT_TEST_BOOL", false));
        env::remove_var("PG_ENTRYPOINT_TEST_BOOL");
    }
}
