//! Reading tunables from the process environment.

use std::fmt::Display;
use std::str::FromStr;

/// Value of `var` parsed as `T`, or `default` when unset.
///
/// A set but unparsable value is reported at `warn` and replaced by
/// `default`; surrounding whitespace is ignored.
pub fn env_parse_with_default<T: FromStr + Display>(var: &str, default: T) -> T {
    let Some(raw) = env_non_empty(var) else {
        return default;
    };
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(var, value = %raw, default = %default, "invalid env var value, using default");
        default
    })
}

/// Trimmed value of `var`, treating an empty or whitespace-only value as unset.
#[must_use]
pub fn env_non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every case uses its own variable name, so tests may run in parallel.
    fn with_var<R>(var: &str, value: Option<&str>, f: impl FnOnce() -> R) -> R {
        match value {
            Some(v) => unsafe { std::env::set_var(var, v) },
            None => unsafe { std::env::remove_var(var) },
        }
        let result = f();
        unsafe { std::env::remove_var(var) };
        result
    }

    #[test]
    fn integer_values() {
        let cases = [
            ("IDEADUP_TEST_INT_SET", Some("42"), 42_usize),
            ("IDEADUP_TEST_INT_PADDED", Some(" 7 "), 7),
            ("IDEADUP_TEST_INT_GARBAGE", Some("banana"), 2),
            ("IDEADUP_TEST_INT_NEGATIVE", Some("-3"), 2),
            ("IDEADUP_TEST_INT_EMPTY", Some(""), 2),
            ("IDEADUP_TEST_INT_UNSET", None, 2),
        ];
        for (var, value, expected) in cases {
            let got = with_var(var, value, || env_parse_with_default(var, 2_usize));
            assert_eq!(got, expected, "{var}={value:?}");
        }
    }

    #[test]
    fn float_value() {
        let got = with_var("IDEADUP_TEST_FLOAT", Some("0.3"), || {
            env_parse_with_default("IDEADUP_TEST_FLOAT", 0.25_f64)
        });
        assert!((got - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn blank_string_is_unset() {
        let got = with_var("IDEADUP_TEST_BLANK", Some("   "), || env_non_empty("IDEADUP_TEST_BLANK"));
        assert_eq!(got, None);
        let got = with_var("IDEADUP_TEST_URL", Some(" postgres://db "), || {
            env_non_empty("IDEADUP_TEST_URL")
        });
        assert_eq!(got.as_deref(), Some("postgres://db"));
    }
}
