pub mod headers;
pub mod parser;
pub mod response;
pub mod validator;

/// `tchar` from RFC 9110 §5.6.2
///
/// tchar = "!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" / "-" / "." /
///         "^" / "_" / "`" / "|" / "~" / DIGIT / ALPHA
pub fn is_tchar(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|' | '~'
        )
}

/// Title-cases every `-`-separated segment of a header name:
/// `content-TYPE` becomes `Content-Type`.
///
/// The result is the same for every casing of the same name, which is what
/// makes lookups in [`HeaderCollection`](headers::HeaderCollection)
/// case-insensitive.
pub fn canonical_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = true;
    for c in name.chars() {
        if upper {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c.to_ascii_lowercase());
        }
        upper = c == '-';
    }
    out
}
