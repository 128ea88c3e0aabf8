//! Query-string formatting for selections.
//!
//! Pure formatting helpers, independent of the constraint engine. Pair order
//! is the caller's order; the engine always passes header order, which keeps
//! the output canonical for a given matrix.

use std::borrow::Cow;

/// Serializes pairs as `k=v&k=v`, percent-encoding both sides.
///
/// # Example
///
/// ```
/// use choicematrix::to_query_str;
///
/// let qs = to_query_str([("Gas", "CO₂"), ("Accounting", "Production-based")]);
/// assert_eq!(qs, "Gas=CO%E2%82%82&Accounting=Production-based");
/// ```
pub fn to_query_str<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parses `k=v&k=v` back into decoded pairs.
///
/// Pairs without `=` become `(key, "")`. Byte sequences that do not decode
/// as UTF-8 are kept percent-encoded rather than dropped.
pub fn from_query_str(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(component: &str) -> String {
    urlencoding::decode(component)
        .unwrap_or(Cow::Borrowed(component))
        .into_owned()
}
