use std::str::FromStr;

use crate::loader::error::ConfigLoadError;

/// Reads `name`, treating unset and whitespace-only values the same.
pub fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

/// Parses an optional raw env value, naming the variable on failure.
pub fn parse_env_value<T: FromStr>(
    var: &'static str,
    raw: Option<&str>,
) -> Result<Option<T>, ConfigLoadError> {
    raw.map(|value| {
        value.trim().parse::<T>().map_err(|_| ConfigLoadError::InvalidEnv {
            var,
            value: value.to_string(),
        })
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_present_values() {
        let parsed: Option<usize> = parse_env_value("X", Some(" 42 ")).unwrap();
        assert_eq!(parsed, Some(42));
        let absent: Option<usize> = parse_env_value("X", None).unwrap();
        assert_eq!(absent, None);
    }

    #[test]
    fn reports_the_offending_variable() {
        let err = parse_env_value::<usize>("EXTREMAL_CHUNK_SIZE", Some("lots")).unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::InvalidEnv { var: "EXTREMAL_CHUNK_SIZE", ref value } if value == "lots"
        ));
    }
}
