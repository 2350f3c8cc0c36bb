use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::error::{IntegrityError, IntegrityResult};

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(sha256|sha384|sha512)-([A-Za-z0-9+/=]+)$").expect("integrity token pattern")
});

/// Hash algorithms accepted in an integrity attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Prefix used in the integrity attribute (`sha256`)
    pub fn sri_name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Name handed to a [`DigestProvider`](super::digest::DigestProvider) (`SHA-256`)
    pub fn digest_name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// Digest length in bytes
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    pub fn from_sri_name(name: &str) -> Option<Self> {
        match name {
            "sha256" => Some(HashAlgorithm::Sha256),
            "sha384" => Some(HashAlgorithm::Sha384),
            "sha512" => Some(HashAlgorithm::Sha512),
            _ => None,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sri_name())
    }
}

/// One `<algorithm>-<base64 digest>` assertion of an integrity attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityToken {
    pub algorithm: HashAlgorithm,
    pub expected_digest: String,
}

impl IntegrityToken {
    pub fn parse(token: &str) -> IntegrityResult<Self> {
        let captures = TOKEN_PATTERN
            .captures(token)
            .ok_or_else(|| IntegrityError::MalformedIntegrity(format!("unsupported token {token:?}")))?;

        let algorithm = HashAlgorithm::from_sri_name(&captures[1])
            .ok_or_else(|| IntegrityError::MalformedIntegrity(format!("unsupported token {token:?}")))?;

        Ok(Self {
            algorithm,
            expected_digest: captures[2].to_string(),
        })
    }
}

/// Splits an integrity attribute on whitespace and parses every token.
///
/// Any malformed token fails the whole attribute, as does an attribute with
/// no tokens at all.
pub fn parse_integrity(attribute: &str) -> IntegrityResult<Vec<IntegrityToken>> {
    let tokens = attribute
        .split_ascii_whitespace()
        .map(IntegrityToken::parse)
        .collect::<IntegrityResult<Vec<_>>>()?;

    if tokens.is_empty() {
        return Err(IntegrityError::MalformedIntegrity(
            "empty integrity attribute".to_string(),
        ));
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_algorithm() {
        let tokens = parse_integrity("sha256-AAAA sha384-BB+/ \t sha512-CC==").unwrap();
        let algorithms: Vec<_> = tokens.iter().map(|t| t.algorithm).collect();

        assert_eq!(
            algorithms,
            [HashAlgorithm::Sha256, HashAlgorithm::Sha384, HashAlgorithm::Sha512]
        );
        assert_eq!(tokens[1].expected_digest, "BB+/");
        assert_eq!(tokens[2].expected_digest, "CC==");
    }

    #[test]
    fn rejects_empty_attributes() {
        for attribute in ["", "   ", "\t\n"] {
            assert!(matches!(
                parse_integrity(attribute),
                Err(IntegrityError::MalformedIntegrity(_))
            ));
        }
    }

    #[test]
    fn rejects_malformed_tokens() {
        for attribute in [
            "sha256-",
            "sha384-",
            "sha512-",
            "md5-AAAA",
            "sha1-AAAA",
            "SHA256-AAAA",
            "sha256_AAAA",
            "sha256-AA-AA",
            "sha256-AAAA?opt",
            "sha256-AAAA sha256-",
        ] {
            assert!(
                matches!(
                    parse_integrity(attribute),
                    Err(IntegrityError::MalformedIntegrity(_))
                ),
                "{attribute:?} should be malformed"
            );
        }
    }

    #[test]
    fn algorithm_names() {
        assert_eq!(HashAlgorithm::Sha384.sri_name(), "sha384");
        assert_eq!(HashAlgorithm::Sha384.digest_name(), "SHA-384");
        assert_eq!(HashAlgorithm::Sha512.digest_len(), 64);
        assert_eq!(HashAlgorithm::from_sri_name("sha1"), None);
    }
}
