//! Query-string parsing and building.
//!
//! [`QueryParams`] is the parsed form of a URL query string: a
//! multi-valued parameter map over
//! [`MultiValueDict`](strada_core::utils::MultiValueDict) that preserves
//! first-seen key order, so encoding reproduces keys in their original
//! order.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

use strada_core::utils::MultiValueDict;
use strada_core::StradaResult;

/// A multi-valued parameter map parsed from a URL query string.
///
/// Each key maps to the ordered sequence of its values; a `None` value
/// marks a segment that had no `=`. Keys are stored exactly as they appear
/// in the query string: they are never percent-decoded, while values are.
/// Encoding keeps that asymmetry.
///
/// # Examples
///
/// ```
/// use strada_routing::QueryParams;
///
/// let params = QueryParams::parse("a=1&a=2&b=&flag").unwrap();
/// assert_eq!(
///     params.get_list("a"),
///     Some(&vec![Some("1".to_string()), Some("2".to_string())]),
/// );
/// assert_eq!(params.get_list("b"), Some(&vec![Some(String::new())]));
/// assert_eq!(params.get_list("flag"), Some(&vec![None]));
///
/// // Absent and empty values are omitted on the way back out.
/// assert_eq!(params.urlencode(), "a=1&a=2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    data: MultiValueDict<String, Option<String>>,
}

impl QueryParams {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a URL query string (e.g. `"key1=val1&key2=val2"`).
    ///
    /// Segments are split on `&`; empty segments are skipped. Each segment
    /// splits on its **first** `=`: the key is everything to the left
    /// (kept raw), the value everything to the right (percent-decoded).
    /// A segment with no `=` yields a `None` value.
    ///
    /// # Errors
    ///
    /// Propagates the decoding failure when a percent-decoded value is not
    /// valid UTF-8.
    pub fn parse(query: &str) -> StradaResult<Self> {
        let mut data = MultiValueDict::new();

        for pair in query.split('&') {
            if pair.is_empty() {
                continue;
            }

            match pair.split_once('=') {
                Some((key, value)) => {
                    let decoded = percent_decode_str(value).decode_utf8()?.into_owned();
                    data.append(key.to_string(), Some(decoded));
                }
                None => data.append(pair.to_string(), None),
            }
        }

        Ok(Self { data })
    }

    /// Returns the last value for the given key.
    ///
    /// The outer `None` means the key is absent; an inner `None` marks a
    /// segment that had no `=`.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.data.get(&key.to_string()).map(|v| v.as_deref())
    }

    /// Returns all values for the given key, or `None` if not present.
    pub fn get_list(&self, key: &str) -> Option<&Vec<Option<String>>> {
        self.data.get_list(&key.to_string())
    }

    /// Sets a single value for the given key, replacing any existing values.
    pub fn set(&mut self, key: impl Into<String>, value: Option<String>) {
        self.data.set(key.into(), value);
    }

    /// Appends a value to the list for the given key.
    pub fn append(&mut self, key: impl Into<String>, value: Option<String>) {
        self.data.append(key.into(), value);
    }

    /// Encodes this parameter map as a URL query string.
    ///
    /// Keys are emitted in first-seen order and each key's values in their
    /// original order. Absent (`None`) and empty values are omitted;
    /// callers must not rely on them round-tripping. No trailing `&`.
    pub fn urlencode(&self) -> String {
        let mut parts = Vec::new();

        for (key, values) in self.data.iter() {
            for value in values {
                let Some(value) = value.as_deref() else { continue };
                if value.is_empty() {
                    continue;
                }
                let encoded_key = percent_encode(key);
                let encoded_value = percent_encode(value);
                parts.push(format!("{encoded_key}={encoded_value}"));
            }
        }

        parts.join("&")
    }

    /// Returns an iterator over the keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.data.keys()
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the map contains no keys.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if the specified key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(&key.to_string())
    }

    /// Returns a reference to the underlying `MultiValueDict`.
    pub const fn data(&self) -> &MultiValueDict<String, Option<String>> {
        &self.data
    }
}

/// Percent-encodes a string for use in a URL query.
fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, NON_ALPHANUMERIC).to_string()
}
