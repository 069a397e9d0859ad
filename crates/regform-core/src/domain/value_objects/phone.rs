//! Phone format rule

use regex::Regex;

/// Accepted digit string after normalization
pub const PHONE_PATTERN: &str = r"^[+]?[1-9][0-9]{0,15}$";

/// Compiled phone format check
///
/// Every non-digit character (including a leading `+`) is stripped before
/// the pattern is tested, so formatted numbers such as `(555) 123-4567` pass.
#[derive(Clone, Debug)]
pub struct PhoneFormat {
    pattern: Regex,
}

impl PhoneFormat {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(PHONE_PATTERN)?,
        })
    }

    /// Keep ASCII digits only
    pub fn normalize(value: &str) -> String {
        value.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    pub fn matches(&self, value: &str) -> bool {
        self.pattern.is_match(&Self::normalize(value))
    }
}
