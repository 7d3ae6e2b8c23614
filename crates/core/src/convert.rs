//! Timestamp and number-base converters.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Invalid timestamp: {0}")]
    Timestamp(String),

    #[error("Radix must be between 2 and 36, got {0}")]
    InvalidRadix(u32),

    #[error("Invalid number '{input}' for base {radix}")]
    InvalidNumber { input: String, radix: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseConversion {
    pub input: String,
    pub from: u32,
    pub to: u32,
    pub output: String,
    pub decimal: String,
}

pub fn unix_to_rfc3339(seconds: i64) -> Result<String, ConvertError> {
    DateTime::<Utc>::from_timestamp(seconds, 0)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        .ok_or_else(|| ConvertError::Timestamp(format!("{seconds} is out of range")))
}

pub fn rfc3339_to_unix(input: &str) -> Result<i64, ConvertError> {
    DateTime::parse_from_rfc3339(input.trim())
        .map(|dt| dt.timestamp())
        .map_err(|e| ConvertError::Timestamp(format!("{input}: {e}")))
}

fn check_radix(radix: u32) -> Result<(), ConvertError> {
    if (2..=36).contains(&radix) {
        Ok(())
    } else {
        Err(ConvertError::InvalidRadix(radix))
    }
}

fn strip_prefix(input: &str, radix: u32) -> &str {
    let prefix = match radix {
        16 => "0x",
        8 => "0o",
        2 => "0b",
        _ => return input,
    };
    input
        .strip_prefix(prefix)
        .or_else(|| input.strip_prefix(&prefix.to_uppercase()))
        .unwrap_or(input)
}

pub fn format_radix(mut value: u128, radix: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        let digit = (value % radix as u128) as u32;
        digits.push(std::char::from_digit(digit, radix).unwrap_or('?'));
        value /= radix as u128;
    }
    digits.iter().rev().collect()
}

pub fn convert_base(input: &str, from: u32, to: u32) -> Result<BaseConversion, ConvertError> {
    check_radix(from)?;
    check_radix(to)?;

    let cleaned: String = input.trim().chars().filter(|c| *c != '_').collect();
    let digits = strip_prefix(&cleaned, from);
    let value = u128::from_str_radix(digits, from).map_err(|_| ConvertError::InvalidNumber {
        input: input.to_string(),
        radix: from,
    })?;

    Ok(BaseConversion {
        input: input.to_string(),
        from,
        to,
        output: format_radix(value, to),
        decimal: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_to_rfc3339() {
        assert_eq!(unix_to_rfc3339(0).unwrap(), "1970-01-01T00:00:00Z");
        assert_eq!(unix_to_rfc3339(1_700_000_000).unwrap(), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn test_unix_to_rfc3339_out_of_range() {
        assert!(unix_to_rfc3339(i64::MAX).is_err());
    }

    #[test]
    fn test_rfc3339_to_unix_with_offset() {
        assert_eq!(rfc3339_to_unix("2023-11-14T22:13:20Z").unwrap(), 1_700_000_000);
        assert_eq!(
            rfc3339_to_unix("2023-11-15T00:13:20+02:00").unwrap(),
            1_700_000_000
        );
        assert!(rfc3339_to_unix("yesterday").is_err());
    }

    #[test]
    fn test_convert_base() {
        assert_eq!(convert_base("255", 10, 16).unwrap().output, "ff");
        assert_eq!(convert_base("0xFF", 16, 2).unwrap().output, "11111111");
        assert_eq!(convert_base("0b1010", 2, 10).unwrap().output, "10");
        assert_eq!(convert_base("z", 36, 10).unwrap().output, "35");
        assert_eq!(convert_base("0", 10, 2).unwrap().output, "0");
        assert_eq!(convert_base("1_000", 10, 8).unwrap().decimal, "1000");
    }

    #[test]
    fn test_convert_base_errors() {
        assert_eq!(
            convert_base("12", 1, 10).unwrap_err(),
            ConvertError::InvalidRadix(1)
        );
        assert!(matches!(
            convert_base("19", 8, 10),
            Err(ConvertError::InvalidNumber { radix: 8, .. })
        ));
        assert!(convert_base("-5", 10, 2).is_err());
    }
}
