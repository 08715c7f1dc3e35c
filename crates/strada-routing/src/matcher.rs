//! Path pattern matching.
//!
//! This module provides the [`PathMatcher`] trait, the polymorphic seam
//! for "does this string match, and if so what are the capture groups",
//! together with [`RegexMatcher`], the regular-expression-backed default
//! implementation.

use std::fmt;

use regex::Regex;

use strada_core::{StradaError, StradaResult};

/// A value that can test a path and yield capture groups on success.
///
/// A matcher's canonical text form ([`as_str`](PathMatcher::as_str)) is the
/// identity used by route removal: two matchers with equal forms are
/// interchangeable for that purpose.
pub trait PathMatcher: Send + Sync {
    /// Attempts to match `path`, returning the captured groups on success.
    ///
    /// The whole-match group is excluded: index 0 of the returned vector is
    /// the first parenthesized group. Groups that did not participate in
    /// the match are `None`.
    fn captures(&self, path: &str) -> Option<Vec<Option<String>>>;

    /// The canonical text form of this matcher.
    fn as_str(&self) -> &str;
}

/// A [`PathMatcher`] backed by a compiled regular expression.
///
/// Matching uses *search* semantics: the pattern may match anywhere in the
/// path. Anchor with `^...$` to require an exact match.
///
/// # Examples
///
/// ```
/// use strada_routing::{PathMatcher, RegexMatcher};
///
/// let matcher = RegexMatcher::new(r"^user/(\d+)$").unwrap();
/// assert_eq!(
///     matcher.captures("user/42"),
///     Some(vec![Some("42".to_string())]),
/// );
/// assert_eq!(matcher.captures("user/new"), None);
/// ```
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    /// Compiles `pattern` into a matcher.
    ///
    /// # Errors
    ///
    /// Returns [`StradaError::InvalidPattern`] if the pattern fails to compile.
    pub fn new(pattern: &str) -> StradaResult<Self> {
        let regex =
            Regex::new(pattern).map_err(|e| StradaError::InvalidPattern(e.to_string()))?;
        Ok(Self { regex })
    }

    /// Returns the compiled regex.
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl From<Regex> for RegexMatcher {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}

impl fmt::Debug for RegexMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegexMatcher")
            .field("regex", &self.regex.as_str())
            .finish()
    }
}

impl PathMatcher for RegexMatcher {
    fn captures(&self, path: &str) -> Option<Vec<Option<String>>> {
        let captures = self.regex.captures(path)?;
        Some(
            captures
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str().to_string()))
                .collect(),
        )
    }

    fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
