//! Validation for the email fields of the demo request and newsletter forms
//!
//! Permissive: catches typos before showing the confirmation, no full
//! RFC 5322 parsing.

/// Maximum length of an address (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length of the part before `@`
pub const MAX_LOCAL_PART_LENGTH: usize = 64;

/// Email validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Ingresa tu email")]
    Empty,

    #[error("El email es demasiado largo ({actual} caracteres, máximo {max})")]
    TooLong { max: usize, actual: usize },

    #[error("El email debe contener una sola @")]
    MissingAt,

    #[error("Falta el usuario antes de la @")]
    EmptyLocalPart,

    #[error("El dominio '{domain}' no es válido")]
    InvalidDomain { domain: String },

    #[error("El email contiene caracteres no permitidos: '{invalid}'")]
    InvalidCharacters { invalid: String },
}

/// Validate an email address, returning the trimmed address on success
pub fn validate_email(input: &str) -> Result<&str, EmailError> {
    let email = input.trim();
    if email.is_empty() {
        return Err(EmailError::Empty);
    }

    let length = email.chars().count();
    if length > MAX_EMAIL_LENGTH {
        return Err(EmailError::TooLong {
            max: MAX_EMAIL_LENGTH,
            actual: length,
        });
    }

    let invalid: String = email
        .chars()
        .filter(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '<' | '>' | '(' | ')' | ',' | ';' | ':' | '"' | '\\')
        })
        .collect();
    if !invalid.is_empty() {
        return Err(EmailError::InvalidCharacters { invalid });
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(EmailError::MissingAt);
    };

    if local.is_empty() {
        return Err(EmailError::EmptyLocalPart);
    }
    if local.chars().count() > MAX_LOCAL_PART_LENGTH {
        return Err(EmailError::TooLong {
            max: MAX_LOCAL_PART_LENGTH,
            actual: local.chars().count(),
        });
    }

    if !is_valid_domain(domain) {
        return Err(EmailError::InvalidDomain {
            domain: domain.to_string(),
        });
    }

    Ok(email)
}

/// Outcome of submitting one of the email forms
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    /// Message explaining why the address was rejected
    Invalid(String),
    /// Confirmation shown in place of a network round trip
    Sent(String),
}

impl FormStatus {
    /// Validate `input` and build the resulting status
    pub fn submit(input: &str, confirmation: impl FnOnce(&str) -> String) -> Self {
        match validate_email(input) {
            Ok(email) => FormStatus::Sent(confirmation(email)),
            Err(err) => FormStatus::Invalid(err.to_string()),
        }
    }
}

/// At least two non-empty labels; labels are alphanumeric or hyphen and do
/// not start or end with a hyphen
fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert_eq!(validate_email("ana@empresa.com"), Ok("ana@empresa.com"));
        assert_eq!(validate_email("  seguridad@novack.co.cr "), Ok("seguridad@novack.co.cr"));
        assert!(validate_email("first.last+demo@sub-domain.example.org").is_ok());
    }

    #[test]
    fn test_empty_email() {
        assert_eq!(validate_email(""), Err(EmailError::Empty));
        assert_eq!(validate_email("   "), Err(EmailError::Empty));
    }

    #[test]
    fn test_missing_or_repeated_at() {
        assert_eq!(validate_email("ana.empresa.com"), Err(EmailError::MissingAt));
        assert_eq!(validate_email("ana@@empresa.com"), Err(EmailError::MissingAt));
        assert_eq!(validate_email("a@b@empresa.com"), Err(EmailError::MissingAt));
    }

    #[test]
    fn test_empty_local_part() {
        assert_eq!(validate_email("@empresa.com"), Err(EmailError::EmptyLocalPart));
    }

    #[test]
    fn test_invalid_domains() {
        for email in [
            "ana@empresa",
            "ana@.com",
            "ana@empresa.",
            "ana@-empresa.com",
            "ana@emp_resa.com",
        ] {
            assert!(
                matches!(validate_email(email), Err(EmailError::InvalidDomain { .. })),
                "{email} should have an invalid domain"
            );
        }
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            validate_email("ana maria@empresa.com"),
            Err(EmailError::InvalidCharacters {
                invalid: " ".to_string()
            })
        );
        assert!(matches!(
            validate_email("<ana>@empresa.com"),
            Err(EmailError::InvalidCharacters { .. })
        ));
    }

    #[test]
    fn test_too_long() {
        let long_local = "a".repeat(65);
        assert_eq!(
            validate_email(&format!("{long_local}@empresa.com")),
            Err(EmailError::TooLong { max: 64, actual: 65 })
        );

        let long_domain = format!("ana@{}.com", "d".repeat(260));
        assert!(matches!(
            validate_email(&long_domain),
            Err(EmailError::TooLong { max: MAX_EMAIL_LENGTH, .. })
        ));
    }

    #[test]
    fn test_form_status_submit() {
        let sent = FormStatus::submit(" ana@empresa.com ", |email| format!("ok {email}"));
        assert_eq!(sent, FormStatus::Sent("ok ana@empresa.com".to_string()));

        let invalid = FormStatus::submit("ana", |_| unreachable!());
        assert_eq!(invalid, FormStatus::Invalid("El email debe contener una sola @".to_string()));

        assert_eq!(FormStatus::default(), FormStatus::Idle);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(EmailError::Empty.to_string(), "Ingresa tu email");
        assert_eq!(
            EmailError::InvalidDomain {
                domain: "empresa".to_string()
            }
            .to_string(),
            "El dominio 'empresa' no es válido"
        );
    }
}
