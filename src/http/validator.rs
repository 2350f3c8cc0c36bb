use crate::config::HeaderConfig;
use crate::http::is_tchar;

/// Names that never reach a [`HeaderCollection`](crate::http::headers::HeaderCollection)
pub const FORBIDDEN_HEADERS: [&str; 2] = ["Set-Cookie", "Set-Cookie2"];

/// Why a header line was left out of the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InvalidName,
    InvalidValue,
    Forbidden,
}

pub struct Validator {
    extra_forbidden: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            extra_forbidden: Vec::new(),
        }
    }

    pub fn with_config(config: &HeaderConfig) -> Self {
        Self {
            extra_forbidden: config.extra_forbidden.clone(),
        }
    }

    /// The field name must be a non-empty RFC 9110 token.
    pub fn validate_name(name: &str) -> Result<(), Rejection> {
        if name.is_empty() || !name.chars().all(is_tchar) {
            return Err(Rejection::InvalidName);
        }
        Ok(())
    }

    /// Only HTAB, visible ASCII, SP and the Latin-1 upper half are allowed.
    pub fn validate_value(value: &str) -> Result<(), Rejection> {
        let valid = value
            .chars()
            .all(|c| matches!(c, '\t' | '\x20'..='\x7e' | '\u{80}'..='\u{ff}'));
        if !valid {
            return Err(Rejection::InvalidValue);
        }
        Ok(())
    }

    pub fn is_forbidden(&self, name: &str) -> bool {
        FORBIDDEN_HEADERS
            .iter()
            .copied()
            .chain(self.extra_forbidden.iter().map(String::as_str))
            .any(|forbidden| forbidden.eq_ignore_ascii_case(name))
    }

    pub fn validate_field(&self, name: &str, value: &str) -> Result<(), Rejection> {
        if self.is_forbidden(name) {
            return Err(Rejection::Forbidden);
        }
        Self::validate_name(name)?;
        Self::validate_value(value)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
