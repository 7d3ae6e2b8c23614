use colored::Colorize;
use devtools_core::validate::{self, CardCheck, PasswordReport, Strength};
use serde::Serialize;

use crate::input::{read_text, read_value};
use crate::prelude::{println, *};

#[derive(Debug, clap::Parser)]
#[command(name = "validate")]
#[command(about = "Validate common identifiers and secrets")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Email,
    Url,
    Ipv4,
    Ipv6,
    Uuid,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Email address
    Email { value: Option<String> },
    /// Absolute URL
    Url { value: Option<String> },
    /// Dotted-quad IPv4 address
    Ipv4 { value: Option<String> },
    /// IPv6 address, including compressed forms
    Ipv6 { value: Option<String> },
    /// UUID (versions 1 to 5)
    Uuid { value: Option<String> },
    /// Credit card number (Luhn checksum and issuer)
    Card { value: Option<String> },
    /// Password strength
    Password { value: Option<String> },
}

/// Outcome of a format check.
#[derive(Debug, Serialize)]
pub struct Verdict {
    pub valid: bool,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn check(kind: Kind, value: &str) -> Verdict {
    let result = match kind {
        Kind::Email => validate::validate_email(value),
        Kind::Url => validate::validate_url(value),
        Kind::Ipv4 => validate::validate_ipv4(value),
        Kind::Ipv6 => validate::validate_ipv6(value),
        Kind::Uuid => validate::validate_uuid(value),
    };

    Verdict {
        valid: result.is_ok(),
        value: value.to_string(),
        error: result.err().map(|e| e.to_string()),
    }
}

/// Score a password exactly as given; surrounding whitespace is part of it.
pub fn password_report(value: Option<String>) -> Result<PasswordReport> {
    Ok(validate::validate_password(&read_text(value)?))
}

pub fn run(app: App, _global: crate::Global) -> Result<()> {
    let json = app.json;

    let (kind, value) = match app.command {
        Commands::Email { value } => (Kind::Email, value),
        Commands::Url { value } => (Kind::Url, value),
        Commands::Ipv4 { value } => (Kind::Ipv4, value),
        Commands::Ipv6 { value } => (Kind::Ipv6, value),
        Commands::Uuid { value } => (Kind::Uuid, value),
        Commands::Card { value } => {
            let report = validate::validate_credit_card(&read_value(value)?);
            return if json {
                print_json(&report)
            } else {
                print_card(&report);
                Ok(())
            };
        }
        Commands::Password { value } => {
            let report = password_report(value)?;
            return if json {
                print_json(&report)
            } else {
                print_password(&report);
                Ok(())
            };
        }
    };

    let verdict = check(kind, &read_value(value)?);
    if json {
        print_json(&verdict)
    } else {
        match &verdict.error {
            None => println!("{} {}", "valid".green().bold(), verdict.value),
            Some(error) => println!("{} {}", "invalid".red().bold(), error),
        }
        Ok(())
    }
}

fn print_card(report: &CardCheck) {
    let status = if report.valid {
        "valid".green().bold()
    } else {
        "invalid".red().bold()
    };
    println!("{status} {}", report.message);
    if report.valid {
        println!("  {}: {}", "Issuer".green(), report.card_type);
    }
}

fn print_password(report: &PasswordReport) {
    let strength = match report.strength {
        Strength::Weak => report.strength.to_string().red(),
        Strength::Medium => report.strength.to_string().yellow(),
        Strength::Strong => report.strength.to_string().green(),
    };
    println!("{} ({}/6)", strength.bold(), report.score);
    for tip in &report.feedback {
        println!("  - {tip}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_reports_error_message() {
        let verdict = check(Kind::Email, "not-an-email");
        assert!(!verdict.valid);
        assert!(verdict.error.is_some());

        let verdict = check(Kind::Ipv6, "::1");
        assert!(verdict.valid);
        assert!(verdict.error.is_none());
    }

    #[test]
    fn test_password_keeps_surrounding_spaces() {
        // Only the spaces make this one special-character complete.
        let report = password_report(Some(" Abcdefgh12 ".to_string())).unwrap();
        assert_eq!(
            report.score,
            validate::validate_password(" Abcdefgh12 ").score
        );
        assert_eq!(report.score, 6);
    }
}
