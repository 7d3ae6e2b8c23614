//! Format validators.
//!
//! These are shape checks only: an email that validates may not have a
//! mailbox, a URL that validates may not resolve.

use std::net::Ipv6Addr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid email address: {0}")]
    Email(String),

    #[error("Invalid URL: {0}")]
    Url(String),

    #[error("Invalid IPv4 address: {0}")]
    Ipv4(String),

    #[error("Invalid IPv6 address: {0}")]
    Ipv6(String),

    #[error("Invalid UUID: {0}")]
    Uuid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardType {
    Visa,
    MasterCard,
    #[serde(rename = "American Express")]
    Amex,
    Discover,
    Unknown,
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardType::Visa => "Visa",
            CardType::MasterCard => "MasterCard",
            CardType::Amex => "American Express",
            CardType::Discover => "Discover",
            CardType::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CardCheck {
    pub valid: bool,
    pub card_type: CardType,
    pub digits: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordReport {
    pub valid: bool,
    /// 0 to 6.
    pub score: u8,
    pub strength: Strength,
    pub feedback: Vec<String>,
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

fn ipv4_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^((25[0-5]|2[0-4]\d|[01]?\d\d?)\.){3}(25[0-5]|2[0-4]\d|[01]?\d\d?)$")
            .unwrap()
    })
}

fn uuid_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
            .unwrap()
    })
}

pub fn validate_email(input: &str) -> Result<(), ValidationError> {
    if email_regex().is_match(input.trim()) {
        Ok(())
    } else {
        Err(ValidationError::Email(input.to_string()))
    }
}

pub fn validate_url(input: &str) -> Result<(), ValidationError> {
    url::Url::parse(input.trim())
        .map(|_| ())
        .map_err(|e| ValidationError::Url(format!("{input} ({e})")))
}

pub fn validate_ipv4(input: &str) -> Result<(), ValidationError> {
    if ipv4_regex().is_match(input.trim()) {
        Ok(())
    } else {
        Err(ValidationError::Ipv4(input.to_string()))
    }
}

/// Full RFC 4291 text form, including `::` compression and embedded IPv4.
pub fn validate_ipv6(input: &str) -> Result<(), ValidationError> {
    input
        .trim()
        .parse::<Ipv6Addr>()
        .map(|_| ())
        .map_err(|_| ValidationError::Ipv6(input.to_string()))
}

pub fn validate_uuid(input: &str) -> Result<(), ValidationError> {
    if uuid_regex().is_match(input.trim()) {
        Ok(())
    } else {
        Err(ValidationError::Uuid(input.to_string()))
    }
}

/// Luhn checksum over a string of ASCII digits.
pub fn luhn_checksum_valid(digits: &str) -> bool {
    let mut sum = 0u32;
    for (i, c) in digits.chars().rev().enumerate() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if i % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    sum % 10 == 0
}

pub fn detect_card_type(digits: &str) -> CardType {
    let prefix2 = digits.get(..2).unwrap_or("");

    if digits.starts_with('4') {
        CardType::Visa
    } else if matches!(prefix2, "51" | "52" | "53" | "54" | "55") {
        CardType::MasterCard
    } else if matches!(prefix2, "34" | "37") {
        CardType::Amex
    } else if digits.starts_with("6011") || prefix2 == "65" {
        CardType::Discover
    } else {
        CardType::Unknown
    }
}

pub fn validate_credit_card(input: &str) -> CardCheck {
    let digits: String = input
        .trim()
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect();

    let invalid = |message: &str| CardCheck {
        valid: false,
        card_type: CardType::Unknown,
        digits: digits.clone(),
        message: message.to_string(),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return invalid("Card number must contain only digits, spaces or dashes");
    }
    if !(13..=19).contains(&digits.len()) {
        return invalid("Card number must be between 13 and 19 digits");
    }
    if !luhn_checksum_valid(&digits) {
        return invalid("Card number fails the Luhn checksum");
    }

    let card_type = detect_card_type(&digits);
    CardCheck {
        valid: true,
        card_type,
        message: format!("Valid {card_type} card number"),
        digits,
    }
}

pub fn validate_password(password: &str) -> PasswordReport {
    let length = password.chars().count();
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    // Anything outside letters and digits counts, spaces included.
    let has_special = password.chars().any(|c| !c.is_alphanumeric());

    let mut feedback = Vec::new();
    if length < 8 {
        feedback.push("Use at least 8 characters".to_string());
    }
    if !has_upper {
        feedback.push("Add an uppercase letter".to_string());
    }
    if !has_lower {
        feedback.push("Add a lowercase letter".to_string());
    }
    if !has_digit {
        feedback.push("Add a number".to_string());
    }
    if !has_special {
        feedback.push("Add a special character".to_string());
    }

    let score = [
        length >= 8,
        length >= 12,
        has_lower,
        has_upper,
        has_digit,
        has_special,
    ]
    .into_iter()
    .filter(|passed| *passed)
    .count() as u8;

    let strength = match score {
        0..=2 => Strength::Weak,
        3..=4 => Strength::Medium,
        _ => Strength::Strong,
    };

    PasswordReport {
        valid: feedback.is_empty(),
        score,
        strength,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // email / url tests
    // ============================================================================

    #[test]
    fn test_validate_email() {
        assert!(validate_email("dev@example.com").is_ok());
        assert!(validate_email("first.last+tag@sub.example.org").is_ok());
        assert!(validate_email("no-at-sign.com").is_err());
        assert!(validate_email("spaces in@example.com").is_err());
        assert!(validate_email("missing@tld").is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://example.com/path?q=1").is_ok());
        assert!(validate_url("ftp://files.example.com").is_ok());
        assert!(validate_url("example.com").is_err());
        assert!(validate_url("http://").is_err());
    }

    // ============================================================================
    // ip / uuid tests
    // ============================================================================

    #[test]
    fn test_validate_ipv4() {
        assert!(validate_ipv4("192.168.0.1").is_ok());
        assert!(validate_ipv4("255.255.255.255").is_ok());
        assert!(validate_ipv4("256.1.1.1").is_err());
        assert!(validate_ipv4("1.2.3").is_err());
        assert!(validate_ipv4("1.2.3.4.5").is_err());
    }

    #[test]
    fn test_validate_ipv6_full_and_compressed() {
        assert!(validate_ipv6("2001:0db8:85a3:0000:0000:8a2e:0370:7334").is_ok());
        assert!(validate_ipv6("2001:db8::1").is_ok());
        assert!(validate_ipv6("::1").is_ok());
        assert!(validate_ipv6("::ffff:192.0.2.128").is_ok());
        assert!(validate_ipv6("2001:db8:::1").is_err());
        assert!(validate_ipv6("12345::").is_err());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("550E8400-E29B-41D4-A716-446655440000").is_ok());
        assert!(validate_uuid("550e8400e29b41d4a716446655440000").is_err());
        assert!(validate_uuid("550e8400-e29b-71d4-a716-446655440000").is_err());
    }

    // ============================================================================
    // credit card tests
    // ============================================================================

    #[test]
    fn test_validate_credit_card_visa() {
        let check = validate_credit_card("4532015112830366");
        assert!(check.valid);
        assert_eq!(check.card_type, CardType::Visa);
        assert_eq!(check.card_type.to_string(), "Visa");
    }

    #[test]
    fn test_validate_credit_card_fails_luhn() {
        let check = validate_credit_card("1234567890123");
        assert!(!check.valid);
    }

    #[test]
    fn test_validate_credit_card_strips_separators() {
        let check = validate_credit_card("4532-0151 1283-0366");
        assert!(check.valid);
        assert_eq!(check.digits, "4532015112830366");
    }

    #[test]
    fn test_validate_credit_card_length_bounds() {
        assert!(!validate_credit_card("424242424242").valid);
        assert!(!validate_credit_card("42424242424242424242").valid);
        assert!(!validate_credit_card("4242abcd42424242").valid);
    }

    #[test]
    fn test_detect_card_type_prefixes() {
        assert_eq!(detect_card_type("5555555555554444"), CardType::MasterCard);
        assert_eq!(detect_card_type("378282246310005"), CardType::Amex);
        assert_eq!(detect_card_type("6011111111111117"), CardType::Discover);
        assert_eq!(detect_card_type("6511111111111117"), CardType::Discover);
        assert_eq!(detect_card_type("5611111111111111"), CardType::Unknown);
    }

    #[test]
    fn test_luhn_known_numbers() {
        assert!(luhn_checksum_valid("378282246310005"));
        assert!(luhn_checksum_valid("6011111111111117"));
        assert!(!luhn_checksum_valid("6011111111111118"));
    }

    // ============================================================================
    // password tests
    // ============================================================================

    #[test]
    fn test_validate_password_strong() {
        let report = validate_password("Correct-Horse-42");
        assert!(report.valid);
        assert_eq!(report.score, 6);
        assert_eq!(report.strength, Strength::Strong);
        assert!(report.feedback.is_empty());
    }

    #[test]
    fn test_validate_password_medium() {
        // length >= 8, lower, digit: 3 points
        let report = validate_password("password1");
        assert!(!report.valid);
        assert_eq!(report.score, 3);
        assert_eq!(report.strength, Strength::Medium);
        assert_eq!(report.feedback.len(), 2);
    }

    #[test]
    fn test_validate_password_weak() {
        let report = validate_password("abc");
        assert_eq!(report.score, 1);
        assert_eq!(report.strength, Strength::Weak);
        assert!(report
            .feedback
            .contains(&"Use at least 8 characters".to_string()));
    }

    #[test]
    fn test_validate_password_empty() {
        let report = validate_password("");
        assert_eq!(report.score, 0);
        assert_eq!(report.feedback.len(), 5);
    }

    #[test]
    fn test_validate_password_space_is_special() {
        let report = validate_password("Correct horse 42");
        assert!(report.valid);
        assert_eq!(report.score, 6);
    }
}
