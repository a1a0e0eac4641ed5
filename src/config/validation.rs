//! Value parsers for environment variables.
//!
//! Each parser takes the raw string and returns the typed value or a short
//! description of what was expected. The loader attaches the variable name and
//! the received value to build the final error.

use crate::config::settings::LogLevel;

/// Strict base-10 port: ASCII digits only, 1-65535.
pub fn parse_port(raw: &str) -> Result<u16, &'static str> {
    const EXPECTED: &str = "an integer between 1 and 65535";

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EXPECTED);
    }

    // Digits only, so the only possible failure is overflow.
    let value: u32 = raw.parse().map_err(|_| EXPECTED)?;
    match u16::try_from(value) {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(EXPECTED),
    }
}

/// Boolean in one of the accepted spellings, case-insensitive.
pub fn parse_bool(raw: &str) -> Result<bool, &'static str> {
    const TRUE: [&str; 3] = ["true", "1", "yes"];
    const FALSE: [&str; 3] = ["false", "0", "no"];

    if TRUE.iter().any(|t| t.eq_ignore_ascii_case(raw)) {
        Ok(true)
    } else if FALSE.iter().any(|f| f.eq_ignore_ascii_case(raw)) {
        Ok(false)
    } else {
        Err("one of true/false, 1/0, yes/no")
    }
}

pub fn parse_log_level(raw: &str) -> Result<LogLevel, &'static str> {
    raw.parse()
        .map_err(|_| "one of debug, info, warning, error, critical")
}

pub fn parse_non_empty(raw: &str) -> Result<String, &'static str> {
    if raw.trim().is_empty() {
        Err("a non-empty string")
    } else {
        Ok(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_bounds() {
        assert_eq!(parse_port("1"), Ok(1));
        assert_eq!(parse_port("5000"), Ok(5000));
        assert_eq!(parse_port("65535"), Ok(65535));
        assert!(parse_port("0").is_err());
        assert!(parse_port("65536").is_err());
        assert!(parse_port("99999999999999999999").is_err());
    }

    #[test]
    fn test_port_rejects_non_digits() {
        for raw in ["-1", "+80", " 80", "80 ", "abc", "8o", "", "0x50"] {
            assert!(parse_port(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_bool_spellings() {
        for raw in ["true", "TRUE", "True", "1", "yes", "YES"] {
            assert_eq!(parse_bool(raw), Ok(true), "{raw:?}");
        }
        for raw in ["false", "FALSE", "0", "no", "No"] {
            assert_eq!(parse_bool(raw), Ok(false), "{raw:?}");
        }
        for raw in ["perhaps", "maybe", "", "y", "on"] {
            assert!(parse_bool(raw).is_err(), "{raw:?}");
        }
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(parse_non_empty("svc"), Ok("svc".to_string()));
        assert!(parse_non_empty("").is_err());
        assert!(parse_non_empty("   ").is_err());
    }
}
