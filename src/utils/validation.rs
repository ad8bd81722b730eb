use crate::utils::error::{EtlError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

// Local part, @, dotted domain, then a TLD of at least two letters.
const EMAIL_PATTERN: &str = r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).unwrap())
}

/// Anchored, case-insensitive email format check. Trims and lower-cases
/// before matching, so it accepts raw as well as normalized input.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(&email.trim().to_lowercase())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_file_extension(
    field_name: &str,
    file: &str,
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension) => Ok(()),
        Some(extension) => Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email_accepts_documented_pattern() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@sub-domain.co"));
        assert!(is_valid_email("a_b%c@mail.example.io"));
        // Case-insensitive and tolerant of surrounding whitespace.
        assert!(is_valid_email("USER@EXAMPLE.COM"));
        assert!(is_valid_email("  ana@test.com  "));
    }

    #[test]
    fn test_is_valid_email_rejects_missing_at() {
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email("not-an-email"));
    }

    #[test]
    fn test_is_valid_email_rejects_missing_domain_dot() {
        assert!(!is_valid_email("user@examplecom"));
    }

    #[test]
    fn test_is_valid_email_rejects_short_tld() {
        assert!(!is_valid_email("user@example.c"));
    }

    #[test]
    fn test_is_valid_email_rejects_empty_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@example."));
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("batch_size", 500, 1).is_ok());
        assert!(validate_positive_number("batch_size", 0, 1).is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("input_file", "contactos.csv", &["csv", "txt"]).is_ok());
        assert!(validate_file_extension("input_file", "contactos.xlsx", &["csv", "txt"]).is_err());
        assert!(validate_file_extension("input_file", "contactos", &["csv", "txt"]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("input_file", "contactos.csv").is_ok());
        assert!(validate_non_empty_string("input_file", "   ").is_err());
    }
}
