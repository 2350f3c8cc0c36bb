//! Hashing capability consumed by the integrity verifier.
//!
//! The verifier never hashes on its own; it is handed a [`DigestProvider`]
//! so tests and embedders can substitute their own engine.

use async_trait::async_trait;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::error::DigestError;
use crate::integrity::token::HashAlgorithm;

#[async_trait]
pub trait DigestProvider: Send + Sync {
    /// Whether the capability exists at all. Checked once before any
    /// attribute parsing.
    fn is_available(&self) -> bool {
        true
    }

    /// Computes the raw digest of `bytes` under `algorithm`.
    async fn digest(&self, algorithm: HashAlgorithm, bytes: &[u8]) -> Result<Vec<u8>, DigestError>;
}

/// SHA-2 family backed by the `sha2` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha2Digest;

#[async_trait]
impl DigestProvider for Sha2Digest {
    async fn digest(&self, algorithm: HashAlgorithm, bytes: &[u8]) -> Result<Vec<u8>, DigestError> {
        let digest = match algorithm {
            HashAlgorithm::Sha256 => Sha256::digest(bytes).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(bytes).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(bytes).to_vec(),
        };
        Ok(digest)
    }
}

/// Stand-in for a host without a hashing capability
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDigest;

#[async_trait]
impl DigestProvider for NoDigest {
    fn is_available(&self) -> bool {
        false
    }

    async fn digest(&self, algorithm: HashAlgorithm, _bytes: &[u8]) -> Result<Vec<u8>, DigestError> {
        Err(DigestError::Unavailable(algorithm.digest_name().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[async_std::test]
    async fn sha2_digest_lengths() {
        for algorithm in [HashAlgorithm::Sha256, HashAlgorithm::Sha384, HashAlgorithm::Sha512] {
            let digest = Sha2Digest.digest(algorithm, b"abc").await.unwrap();
            assert_eq!(digest.len(), algorithm.digest_len());
        }
    }

    #[async_std::test]
    async fn sha256_of_abc() {
        let digest = Sha2Digest.digest(HashAlgorithm::Sha256, b"abc").await.unwrap();
        let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
        assert_eq!(
            hex,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[async_std::test]
    async fn no_digest_is_unavailable() {
        assert!(!NoDigest.is_available());
        assert_eq!(
            NoDigest.digest(HashAlgorithm::Sha512, b"").await,
            Err(DigestError::Unavailable("SHA-512".to_string()))
        );
    }
}
