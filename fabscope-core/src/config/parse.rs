//! Minimal parser for `scope.toml`
//!
//! Handles only the subset the instrument needs:
//! - `key = integer` pairs
//! - an optional `[scope]` section header
//! - comments (`# ...`), including trailing ones
//!
//! Unknown keys are rejected so that typos do not silently fall back to
//! defaults.

use heapless::String;

use super::types::{ScopeConfig, MAX_SAMPLE_PERIOD_US, MIN_SAMPLE_PERIOD_US};

/// Longest key or section name kept for error reporting
pub const MAX_KEY_LEN: usize = 24;

/// What went wrong on a line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigErrorKind {
    /// Line is neither a header, a comment nor `key = value`
    InvalidLine,
    /// Section other than `[scope]`
    UnknownSection(String<MAX_KEY_LEN>),
    /// Key not recognised
    UnknownKey(String<MAX_KEY_LEN>),
    /// Value is not a non-negative integer
    InvalidValue,
    /// Value parsed but is outside the allowed range
    OutOfRange,
}

/// Parse error with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigError {
    pub line: usize,
    pub kind: ConfigErrorKind,
}

/// Parse configuration text, starting from defaults
pub fn parse_config(input: &str) -> Result<ScopeConfig, ConfigError> {
    let mut config = ScopeConfig::default();

    for (index, raw) in input.lines().enumerate() {
        let fail = |kind| ConfigError {
            line: index + 1,
            kind,
        };

        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(section) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let section = section.trim();
            if section != "scope" {
                return Err(fail(ConfigErrorKind::UnknownSection(truncated(section))));
            }
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .ok_or(fail(ConfigErrorKind::InvalidLine))?;
        let key = key.trim();
        let value = value.trim();

        apply(&mut config, key, value).map_err(fail)?;
    }

    Ok(config)
}

fn apply(config: &mut ScopeConfig, key: &str, value: &str) -> Result<(), ConfigErrorKind> {
    match key {
        "sample_period_us" => {
            let period = parse_u32(value)?;
            if !(MIN_SAMPLE_PERIOD_US..=MAX_SAMPLE_PERIOD_US).contains(&period) {
                return Err(ConfigErrorKind::OutOfRange);
            }
            config.sample_period_us = period;
        }
        "baudrate" => {
            let baudrate = parse_u32(value)?;
            if baudrate == 0 {
                return Err(ConfigErrorKind::OutOfRange);
            }
            config.baudrate = baudrate;
        }
        "trigger_level" => {
            config.trigger_level =
                u8::try_from(parse_u32(value)?).map_err(|_| ConfigErrorKind::OutOfRange)?;
        }
        _ => return Err(ConfigErrorKind::UnknownKey(truncated(key))),
    }
    Ok(())
}

/// Parse a decimal integer, allowing `_` separators
fn parse_u32(value: &str) -> Result<u32, ConfigErrorKind> {
    if value.is_empty() {
        return Err(ConfigErrorKind::InvalidValue);
    }

    let mut result: u32 = 0;
    for c in value.chars().filter(|&c| c != '_') {
        let digit = c.to_digit(10).ok_or(ConfigErrorKind::InvalidValue)?;
        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or(ConfigErrorKind::OutOfRange)?;
    }
    Ok(result)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn truncated(s: &str) -> String<MAX_KEY_LEN> {
    let mut out = String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(parse_config(""), Ok(ScopeConfig::default()));
        assert_eq!(parse_config("# nothing\n\n"), Ok(ScopeConfig::default()));
    }

    #[test]
    fn test_full_config() {
        let input = "\
# FabScope
[scope]
sample_period_us = 10   # 100 kHz
baudrate = 230_400
trigger_level = 64
";
        let config = parse_config(input).unwrap();
        assert_eq!(config.sample_period_us, 10);
        assert_eq!(config.baudrate, 230_400);
        assert_eq!(config.trigger_level, 64);
    }

    #[test]
    fn test_unknown_key() {
        let err = parse_config("[scope]\nbaud = 9600\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.kind, ConfigErrorKind::UnknownKey(ref k) if k.as_str() == "baud"));
    }

    #[test]
    fn test_unknown_section() {
        let err = parse_config("[display]\n").unwrap_err();
        assert!(matches!(err.kind, ConfigErrorKind::UnknownSection(_)));
    }

    #[test]
    fn test_invalid_values() {
        let err = parse_config("trigger_level = 256").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::OutOfRange);

        let err = parse_config("trigger_level = -1").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::InvalidValue);

        let err = parse_config("sample_period_us = 1").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::OutOfRange);

        let err = parse_config("baudrate = 99999999999").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::OutOfRange);

        let err = parse_config("baudrate =").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::InvalidValue);
    }

    #[test]
    fn test_invalid_line() {
        let err = parse_config("[scope]\n\njust words\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(err.kind, ConfigErrorKind::InvalidLine);
    }

    #[test]
    fn test_long_key_truncated() {
        let err = parse_config("a_really_long_key_that_overflows_the_buffer = 1").unwrap_err();
        match err.kind {
            ConfigErrorKind::UnknownKey(k) => assert_eq!(k.len(), MAX_KEY_LEN),
            other => panic!("unexpected {:?}", other),
        }
    }
}
