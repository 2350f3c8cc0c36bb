//! Header-block parsing and Subresource Integrity verification for
//! responses obtained through legacy, XHR-style request primitives.
//!
//! The two halves are independent:
//!
//! - [`parse_headers`] turns a raw `getAllResponseHeaders()`-style string into
//!   a [`HeaderCollection`]. It never fails; lines it does not trust are
//!   dropped.
//! - [`verify_integrity`] checks body bytes against an SRI attribute using an
//!   injected [`DigestProvider`]. It fails on anything it cannot confirm.
//!
//! [`FetchResponse::from_raw`] composes both.

pub mod config;
pub mod error;
pub mod http;
pub mod integrity;
pub mod isomorphic;

pub use config::ShimConfig;
pub use error::{DigestError, IntegrityError, IntegrityResult};
pub use http::headers::HeaderCollection;
pub use http::parser::{HeaderBlockParser, parse_headers};
pub use http::response::{FetchResponse, RawResponse};
pub use integrity::cancel::CancelFlag;
pub use integrity::digest::{DigestProvider, NoDigest, Sha2Digest};
pub use integrity::token::{HashAlgorithm, IntegrityToken, parse_integrity};
pub use integrity::{IntegrityVerifier, verify_integrity};
