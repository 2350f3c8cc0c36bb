//! Parser for complete header blocks as returned by legacy XHR-style
//! request primitives (`getAllResponseHeaders()` and friends).
//!
//! The parser is lenient: any line it does not understand is dropped and
//! logged at debug level, never reported as an error. The input is always a
//! whole block; there is no incremental feeding.
//!
//! Lines are separated by runs of CRLF. A bare LF is *not* a separator:
//! some hosts join the lines of a multi-valued `Set-Cookie` with LF only, and
//! those lines must be discarded together with the forbidden field rather
//! than re-read as fields of their own.

use crate::config::HeaderConfig;
use crate::http::headers::HeaderCollection;
use crate::http::validator::Validator;
use crate::isomorphic;

/// Parses a header block with the default configuration.
///
/// `None`, `""` and whitespace-only input all give an empty collection.
pub fn parse_headers(raw: Option<&str>) -> HeaderCollection {
    HeaderBlockParser::new().parse(raw)
}

/// One CRLF-delimited line of the block, before validation
#[derive(Debug, PartialEq, Eq)]
enum RawHeaderLine<'a> {
    Field { name: &'a str, value: &'a str },
    /// obs-fold (RFC 9112 §5.2): leading SP/HTAB and no colon
    Continuation(&'a str),
    Invalid,
}

impl<'a> RawHeaderLine<'a> {
    fn classify(line: &'a str) -> Self {
        // Only the first colon splits; values may contain more.
        match line.split_once(':') {
            Some((name, value)) => RawHeaderLine::Field {
                name,
                value: trim_ows(value),
            },
            None if line.starts_with([' ', '\t']) => RawHeaderLine::Continuation(trim_ows(line)),
            None => RawHeaderLine::Invalid,
        }
    }
}

fn trim_ows(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_ascii_whitespace())
}

pub struct HeaderBlockParser {
    validator: Validator,
    fold_continuations: bool,
}

impl HeaderBlockParser {
    pub fn new() -> Self {
        Self {
            validator: Validator::new(),
            fold_continuations: true,
        }
    }

    pub fn with_config(config: &HeaderConfig) -> Self {
        Self {
            validator: Validator::with_config(config),
            fold_continuations: config.fold_continuations,
        }
    }

    pub fn parse(&self, raw: Option<&str>) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        let Some(raw) = raw else {
            return headers;
        };

        // Name of the last accepted field; continuation lines attach to it.
        // Reset whenever a field is dropped so folds never revive it.
        let mut current: Option<&str> = None;

        for line in raw.split("\r\n").filter(|line| !line.is_empty()) {
            match RawHeaderLine::classify(line) {
                RawHeaderLine::Field { name, value } => {
                    match self.validator.validate_field(name, value) {
                        Ok(()) => {
                            headers.append(name, value);
                            current = Some(name);
                        }
                        Err(reason) => {
                            log::debug!("Dropping header line {:?}: {:?}", name, reason);
                            current = None;
                        }
                    }
                }
                RawHeaderLine::Continuation(content) => {
                    let Some(name) = current else {
                        log::debug!("Dropping continuation line without a field");
                        continue;
                    };
                    if !self.fold_continuations {
                        log::debug!("Dropping continuation line of {:?}", name);
                        continue;
                    }
                    if content.is_empty() {
                        continue;
                    }
                    if let Err(reason) = Validator::validate_value(content) {
                        log::debug!("Dropping continuation line of {:?}: {:?}", name, reason);
                        current = None;
                        continue;
                    }
                    Self::fold(&mut headers, name, content);
                }
                RawHeaderLine::Invalid => {
                    log::debug!("Dropping header line without a colon");
                }
            }
        }

        headers
    }

    /// Parses a header block given as raw bytes, one character per byte.
    pub fn parse_bytes(&self, raw: &[u8]) -> HeaderCollection {
        let decoded = isomorphic::encode(raw);
        self.parse(Some(&decoded))
    }

    /// Replaces an obs-fold with a single SP (RFC 9112 §5.2).
    fn fold(headers: &mut HeaderCollection, name: &str, content: &str) {
        let folded = match headers.get(name) {
            Some(existing) if !existing.is_empty() => format!("{existing} {content}"),
            _ => content.to_string(),
        };
        headers.set(name, &folded);
    }
}

impl Default for HeaderBlockParser {
    fn default() -> Self {
        Self::new()
    }
}
