//! Turns what a legacy request primitive hands back (status, status text,
//! final URL, raw header string, body bytes) into a [`FetchResponse`].
//!
//! When the caller asked for an integrity check, the body is verified
//! before anything else is built, and a failed check means no response.

use std::time::SystemTime;

use crate::error::IntegrityResult;
use crate::http::headers::HeaderCollection;
use crate::http::parser::HeaderBlockParser;
use crate::integrity::IntegrityVerifier;
use crate::integrity::digest::DigestProvider;

/// Response as delivered by the underlying request primitive
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub final_url: String,
    pub response_headers: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub status_text: String,
    pub url: String,
    pub headers: HeaderCollection,
    pub body: Vec<u8>,
}

impl FetchResponse {
    /// Builds a response from `raw`, verifying the body first when
    /// `integrity` is a non-empty attribute.
    pub async fn from_raw<P>(
        raw: RawResponse,
        integrity: Option<&str>,
        parser: &HeaderBlockParser,
        verifier: &IntegrityVerifier,
        provider: &P,
    ) -> IntegrityResult<Self>
    where
        P: DigestProvider + ?Sized,
    {
        if let Some(attribute) = integrity.filter(|attribute| !attribute.is_empty()) {
            verifier.verify(attribute, &raw.body, provider).await?;
        }

        Ok(Self {
            status: raw.status,
            status_text: raw.status_text,
            url: raw.final_url,
            headers: parser.parse(raw.response_headers.as_deref()),
            body: raw.body,
        })
    }

    /// Status in the 200..=299 range
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn last_modified(&self) -> Option<SystemTime> {
        self.headers.get_date("Last-Modified")
    }
}
