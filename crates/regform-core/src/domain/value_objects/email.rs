//! Email format rule

use regex::Regex;

/// Accepted email shape: `local@domain.tld`, no whitespace, single `@`
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Compiled email format check
///
/// The value is tested as typed: no trimming, no case folding.
#[derive(Clone, Debug)]
pub struct EmailFormat {
    pattern: Regex,
}

impl EmailFormat {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(EMAIL_PATTERN)?,
        })
    }

    pub fn matches(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format() -> EmailFormat {
        EmailFormat::new().unwrap()
    }

    #[test]
    fn test_minimal_address_passes() {
        assert!(format().matches("a@b.c"));
        assert!(format().matches("buyer@acme-supply.com"));
    }

    #[test]
    fn test_missing_at_or_tld_fails() {
        assert!(!format().matches("abc"));
        assert!(!format().matches("a@b"));
        assert!(!format().matches("a@@b.c"));
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        assert!(!format().matches(" a@b.c"));
        assert!(!format().matches("a b@c.d"));
    }
}
