use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Validated fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn all() -> [Field; 3] {
        [Field::Name, Field::Email, Field::Message]
    }

    /// Element id of the input; its error element is `err-<id>`
    pub fn input_id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn error_id(&self) -> String {
        format!("err-{}", self.input_id())
    }

    pub fn is_valid(&self, value: &str) -> bool {
        match self {
            Field::Name | Field::Message => !value.trim().is_empty(),
            Field::Email => is_valid_email(value),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Only Formspree endpoints are submitted from the page
pub fn is_formspree_action(action: &str) -> bool {
    action.contains("formspree.io")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.co"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_required_fields_reject_blank() {
        assert!(!Field::Name.is_valid("   "));
        assert!(Field::Name.is_valid(" Ada "));
        assert!(!Field::Message.is_valid("\n\t"));
    }

    #[test]
    fn test_error_ids() {
        assert_eq!(Field::Email.error_id(), "err-email");
    }

    #[test]
    fn test_formspree_action() {
        assert!(is_formspree_action("https://formspree.io/f/abc"));
        assert!(!is_formspree_action("/contact"));
    }
}
