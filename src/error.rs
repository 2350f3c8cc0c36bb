//! Error types for integrity verification and digest computation.
//!
//! Header parsing has no error type: malformed header lines are dropped
//! by [`HeaderBlockParser`](crate::http::parser::HeaderBlockParser) and
//! never reported to the caller.

use thiserror::Error;

use crate::integrity::token::HashAlgorithm;

/// Result type for integrity verification
pub type IntegrityResult<T> = Result<T, IntegrityError>;

/// Reasons a payload is not accepted by the
/// [`IntegrityVerifier`](crate::integrity::IntegrityVerifier).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    /// The attribute (or one of its tokens) is not `<alg>-<base64>`.
    #[error("Malformed integrity: {0}")]
    MalformedIntegrity(String),

    /// A well-formed digest assertion does not match the payload.
    #[error("Integrity mismatch for {algorithm}")]
    IntegrityMismatch { algorithm: HashAlgorithm },

    /// The hashing capability is missing or does not support the algorithm.
    #[error("Digest unavailable: {0}")]
    DigestUnavailable(String),

    #[error("Integrity verification cancelled")]
    Cancelled,
}

impl IntegrityError {
    /// None of the integrity failures change on a second attempt with
    /// the same inputs.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Errors reported by a [`DigestProvider`](crate::integrity::digest::DigestProvider)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    #[error("Digest algorithm unavailable: {0}")]
    Unavailable(String),

    #[error("Digest computation cancelled")]
    Cancelled,
}

impl From<DigestError> for IntegrityError {
    fn from(err: DigestError) -> Self {
        match err {
            DigestError::Unavailable(name) => IntegrityError::DigestUnavailable(name),
            DigestError::Cancelled => IntegrityError::Cancelled,
        }
    }
}

/// Error returned when a string cannot be mapped back onto bytes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsomorphicError {
    #[error("Character {ch:?} at index {index} is outside the Latin-1 range")]
    NonLatin1 { index: usize, ch: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_errors_keep_their_kind() {
        assert_eq!(
            IntegrityError::from(DigestError::Unavailable("SHA-384".into())),
            IntegrityError::DigestUnavailable("SHA-384".into())
        );
        assert_eq!(
            IntegrityError::from(DigestError::Cancelled),
            IntegrityError::Cancelled
        );
    }

    #[test]
    fn nothing_is_retryable() {
        let errors = [
            IntegrityError::MalformedIntegrity("x".into()),
            IntegrityError::IntegrityMismatch {
                algorithm: HashAlgorithm::Sha256,
            },
            IntegrityError::DigestUnavailable("SHA-256".into()),
            IntegrityError::Cancelled,
        ];
        assert!(errors.iter().all(|e| !e.is_retryable()));
    }

    #[test]
    fn mismatch_message_names_the_algorithm() {
        let err = IntegrityError::IntegrityMismatch {
            algorithm: HashAlgorithm::Sha512,
        };
        assert_eq!(err.to_string(), "Integrity mismatch for sha512");
    }
}
