//! Subresource Integrity verification.
//!
//! An integrity attribute holds one or more whitespace-separated
//! `<algorithm>-<base64 digest>` tokens. A payload is accepted only when
//! every token matches. Unlike header parsing, nothing here is lenient: a
//! malformed token, a missing hashing capability, or a single mismatching
//! digest rejects the payload.
//!
//! Verification order:
//!
//! 1. The [`DigestProvider`] must be available, otherwise
//!    [`IntegrityError::DigestUnavailable`] before looking at the attribute.
//! 2. All tokens are parsed; one bad token gives
//!    [`IntegrityError::MalformedIntegrity`].
//! 3. The payload is hashed once per distinct algorithm.
//! 4. Tokens are compared in attribute order; the first mismatch gives
//!    [`IntegrityError::IntegrityMismatch`].
//!
//! See <https://w3c.github.io/webappsec-subresource-integrity/#the-integrity-attribute>.

pub mod cancel;
pub mod digest;
pub mod token;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::config::IntegrityConfig;
use crate::error::{IntegrityError, IntegrityResult};
use cancel::CancelFlag;
use digest::DigestProvider;
use token::{HashAlgorithm, IntegrityToken, parse_integrity};

/// Verifies `payload` against `attribute` with the default configuration.
pub async fn verify_integrity<P>(attribute: &str, payload: &[u8], provider: &P) -> IntegrityResult<()>
where
    P: DigestProvider + ?Sized,
{
    IntegrityVerifier::new()
        .verify(attribute, payload, provider)
        .await
}

#[derive(Debug, Clone, Default)]
pub struct IntegrityVerifier {
    concurrent_digests: bool,
}

impl IntegrityVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &IntegrityConfig) -> Self {
        Self {
            concurrent_digests: config.concurrent_digests,
        }
    }

    pub async fn verify<P>(&self, attribute: &str, payload: &[u8], provider: &P) -> IntegrityResult<()>
    where
        P: DigestProvider + ?Sized,
    {
        self.verify_cancellable(attribute, payload, provider, &CancelFlag::new())
            .await
    }

    /// Like [`verify`](Self::verify), but gives up with
    /// [`IntegrityError::Cancelled`] once `cancel` is set. The flag is
    /// checked before and after every digest computation.
    pub async fn verify_cancellable<P>(
        &self,
        attribute: &str,
        payload: &[u8],
        provider: &P,
        cancel: &CancelFlag,
    ) -> IntegrityResult<()>
    where
        P: DigestProvider + ?Sized,
    {
        if !provider.is_available() {
            return Err(IntegrityError::DigestUnavailable(
                "digest function is not available".to_string(),
            ));
        }

        let tokens = parse_integrity(attribute)?;
        let digests = self.compute_digests(&tokens, payload, provider, cancel).await?;

        for token in &tokens {
            let actual = digests
                .iter()
                .find(|(algorithm, _)| *algorithm == token.algorithm)
                .map(|(_, digest)| digest.as_bytes())
                .unwrap_or_default();

            if actual != token.expected_digest.as_bytes() {
                log::warn!("Integrity verification failed for {}", token.algorithm);
                return Err(IntegrityError::IntegrityMismatch {
                    algorithm: token.algorithm,
                });
            }
        }

        log::debug!("Integrity verified ({} token(s), {} bytes)", tokens.len(), payload.len());
        Ok(())
    }

    /// Base64 digests, one per distinct algorithm in first-seen order
    async fn compute_digests<P>(
        &self,
        tokens: &[IntegrityToken],
        payload: &[u8],
        provider: &P,
        cancel: &CancelFlag,
    ) -> IntegrityResult<Vec<(HashAlgorithm, String)>>
    where
        P: DigestProvider + ?Sized,
    {
        let mut algorithms: Vec<HashAlgorithm> = Vec::new();
        for token in tokens {
            if !algorithms.contains(&token.algorithm) {
                algorithms.push(token.algorithm);
            }
        }

        check_cancelled(cancel)?;

        if self.concurrent_digests {
            let pending = algorithms
                .iter()
                .map(|&algorithm| digest_base64(provider, algorithm, payload));
            let digests = futures::future::try_join_all(pending).await?;
            check_cancelled(cancel)?;
            return Ok(algorithms.into_iter().zip(digests).collect());
        }

        let mut digests = Vec::with_capacity(algorithms.len());
        for algorithm in algorithms {
            check_cancelled(cancel)?;
            let digest = digest_base64(provider, algorithm, payload).await?;
            digests.push((algorithm, digest));
        }
        check_cancelled(cancel)?;
        Ok(digests)
    }
}

fn check_cancelled(cancel: &CancelFlag) -> IntegrityResult<()> {
    if cancel.is_cancelled() {
        return Err(IntegrityError::Cancelled);
    }
    Ok(())
}

async fn digest_base64<P>(provider: &P, algorithm: HashAlgorithm, payload: &[u8]) -> IntegrityResult<String>
where
    P: DigestProvider + ?Sized,
{
    let digest = provider.digest(algorithm, payload).await?;
    Ok(STANDARD.encode(digest))
}
