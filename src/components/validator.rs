use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Browser `\s`: Unicode White_Space without U+0085, plus U+FEFF.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let part = r"[[^\s@\x{FEFF}]\x{85}]+";
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is valid")
});

/// Whitespace as browser string trimming sees it.
fn is_browser_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select(&'static [&'static str]),
    TextArea,
}

impl FieldKind {
    /// Value for the `type` attribute of an `<input>`.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            _ => "text",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required")]
    MissingRequiredField,
    #[error("Please enter a valid email address")]
    InvalidEmailFormat,
}

pub fn validate_field(spec: &FieldSpec, value: &str) -> Result<(), FieldError> {
    let value = value.trim_matches(is_browser_whitespace);

    if spec.required && value.is_empty() {
        return Err(FieldError::MissingRequiredField);
    }

    if spec.kind == FieldKind::Email && !value.is_empty() && !EMAIL_PATTERN.is_match(value) {
        return Err(FieldError::InvalidEmailFormat);
    }

    Ok(())
}

/// Live validation while typing only runs for fields already flagged.
pub fn should_revalidate_on_input(currently_flagged: bool) -> bool {
    currently_flagged
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: FieldSpec = FieldSpec {
        name: "full-name",
        label: "Full Name",
        kind: FieldKind::Text,
        required: true,
    };

    const EMAIL: FieldSpec = FieldSpec {
        name: "email",
        label: "Email",
        kind: FieldKind::Email,
        required: true,
    };

    const NOTE: FieldSpec = FieldSpec {
        name: "message",
        label: "Message",
        kind: FieldKind::TextArea,
        required: false,
    };

    #[test]
    fn test_required_field_rejects_blank_values() {
        assert_eq!(validate_field(&NAME, ""), Err(FieldError::MissingRequiredField));
        assert_eq!(validate_field(&NAME, "   \t"), Err(FieldError::MissingRequiredField));
        assert!(validate_field(&NAME, " Ali ").is_ok());
    }

    #[test]
    fn test_optional_field_accepts_blank() {
        assert!(validate_field(&NOTE, "").is_ok());
    }

    #[test]
    fn test_email_requires_tld_segment() {
        assert_eq!(validate_field(&EMAIL, "a@b"), Err(FieldError::InvalidEmailFormat));
        assert!(validate_field(&EMAIL, "a@b.com").is_ok());
        assert!(validate_field(&EMAIL, "  a@b.com  ").is_ok());
        assert_eq!(validate_field(&EMAIL, "a b@c.com"), Err(FieldError::InvalidEmailFormat));
        assert_eq!(validate_field(&EMAIL, "a@@b.com"), Err(FieldError::InvalidEmailFormat));
    }

    #[test]
    fn test_byte_order_mark_counts_as_blank() {
        assert_eq!(validate_field(&NAME, "\u{feff}"), Err(FieldError::MissingRequiredField));
        assert_eq!(validate_field(&NAME, " \u{feff}\u{a0}"), Err(FieldError::MissingRequiredField));
        assert!(validate_field(&EMAIL, "\u{feff}a@b.com").is_ok());
        assert_eq!(validate_field(&EMAIL, "a\u{feff}b@c.com"), Err(FieldError::InvalidEmailFormat));
    }

    #[test]
    fn test_next_line_is_not_trimmed() {
        assert!(validate_field(&NAME, "\u{85}").is_ok());
        assert!(validate_field(&EMAIL, "a\u{85}b@c.com").is_ok());
    }

    #[test]
    fn test_blank_email_reports_missing_not_format() {
        assert_eq!(validate_field(&EMAIL, ""), Err(FieldError::MissingRequiredField));
    }

    #[test]
    fn test_error_copy() {
        assert_eq!(FieldError::MissingRequiredField.to_string(), "This field is required");
        assert_eq!(
            FieldError::InvalidEmailFormat.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_input_revalidation_only_when_flagged() {
        assert!(should_revalidate_on_input(true));
        assert!(!should_revalidate_on_input(false));
    }
}
