//! Ordered, case-insensitive header collection produced by
//! [`HeaderBlockParser`](crate::http::parser::HeaderBlockParser).
//!
//! Headers are stored in an ordered map keyed by the canonical name (see
//! [`canonical_name`]), so a name appears at most once no matter how the
//! sender cased it. Repeated fields are combined into one value joined by
//! `, ` (RFC 9110 §5.3).
//!
//! This type does no validation of its own. Callers that build a collection
//! by hand are trusted; the parser only inserts fields that passed the
//! [`validator`](crate::http::validator) checks.

use indexmap::IndexMap;
use indexmap::map::Iter;
use std::time::SystemTime;

use crate::http::canonical_name;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderCollection {
    headers: IndexMap<String, String>,
}

impl HeaderCollection {
    pub fn new() -> Self {
        Self {
            headers: IndexMap::new(),
        }
    }

    /// Adds a field value, combining it with an existing value of the same
    /// name as `existing, value`.
    pub fn append(&mut self, name: &str, value: &str) {
        self.headers
            .entry(canonical_name(name))
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    /// Replaces the value of `name`, keeping its position if already present.
    pub fn set(&mut self, name: &str, value: &str) {
        self.headers.insert(canonical_name(name), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers.get(&canonical_name(name)).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.headers.contains_key(&canonical_name(name))
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.headers.shift_remove(&canonical_name(name))
    }

    /// Parses an HTTP-date value such as `Last-Modified` or `Date`.
    pub fn get_date(&self, name: &str) -> Option<SystemTime> {
        self.get(name)
            .and_then(|value| httpdate::parse_http_date(value).ok())
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.headers.iter()
    }

    /// Serializes as `Name: value\r\n` lines in insertion order.
    ///
    /// Feeding the result back to the parser yields an equal collection.
    pub fn stringify(&self) -> String {
        let mut result = String::new();
        for (name, value) in &self.headers {
            result.push_str(&format!("{}: {}\r\n", name, value));
        }
        result
    }
}

impl<'a> IntoIterator for &'a HeaderCollection {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn lookup_ignores_case() {
        let mut headers = HeaderCollection::new();
        headers.append("content-type", "text/html");

        assert_eq!(headers.get("Content-Type"), Some("text/html"));
        assert_eq!(headers.get("CONTENT-TYPE"), Some("text/html"));
        assert!(headers.contains("content-Type"));
        assert_eq!(headers.get("Content-Length"), None);
    }

    #[test]
    fn append_combines_repeated_names() {
        let mut headers = HeaderCollection::new();
        headers.append("Vary", "a");
        headers.append("vary", "b");

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("Vary"), Some("a, b"));
    }

    #[test]
    fn set_replaces_in_place() {
        let mut headers = HeaderCollection::new();
        headers.append("A", "1");
        headers.append("B", "2");
        headers.set("a", "3");

        let names: Vec<&String> = headers.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(headers.get("A"), Some("3"));
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut headers = HeaderCollection::new();
        headers.append("A", "1");
        headers.append("B", "2");
        headers.append("C", "3");

        assert_eq!(headers.remove("b"), Some("2".to_string()));
        assert_eq!(headers.stringify(), "A: 1\r\nC: 3\r\n");
    }

    #[test]
    fn parses_http_dates() {
        let mut headers = HeaderCollection::new();
        headers.append("Last-Modified", "Sat, 06 Aug 2022 18:33:05 GMT");
        headers.append("Expires", "never");

        assert_eq!(
            headers.get_date("last-modified"),
            Some(UNIX_EPOCH + Duration::from_secs(1_659_810_785))
        );
        assert_eq!(headers.get_date("Expires"), None);
        assert_eq!(headers.get_date("Date"), None);
    }
}
