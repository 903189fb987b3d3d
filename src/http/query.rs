//! Query string helpers

/// First value of `name` in a URL query string, percent-decoded
///
/// `+` decodes to a space. A key present with no value (`p` or `p=`) yields
/// `Some("")`.
pub fn first_query_value(query: Option<&str>, name: &str) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
