//! Path canonicalization.
//!
//! Pure functions that bring raw location paths into canonical form: no
//! leading or trailing slash, root prefix removed, percent-escapes decoded.

use percent_encoding::percent_decode_str;

use strada_core::{RouterConfig, StradaResult};

/// Strips leading and trailing `/` characters from `path`.
///
/// Idempotent: applying it twice equals applying it once. No other
/// characters are altered.
///
/// # Examples
///
/// ```
/// use strada_routing::path::clear_slashes;
///
/// assert_eq!(clear_slashes("/user/42/"), "user/42");
/// assert_eq!(clear_slashes("user/42"), "user/42");
/// assert_eq!(clear_slashes("/"), "");
/// ```
pub fn clear_slashes(path: &str) -> &str {
    path.trim_matches('/')
}

/// Canonicalizes a raw location path against the router configuration.
///
/// Percent-escapes are decoded, boundary slashes stripped, and a single
/// occurrence of the configured root removed as a literal prefix (when the
/// root is not `/`; the root is compared in slash-cleared form since the
/// path no longer carries boundary slashes at that point). The result
/// never begins or ends with `/`, and the root path itself canonicalizes
/// to the empty string.
///
/// # Errors
///
/// Propagates the decoding failure when the percent-decoded bytes are not
/// valid UTF-8.
pub fn canonical_pathname(raw: &str, config: &RouterConfig) -> StradaResult<String> {
    let decoded = percent_decode_str(raw).decode_utf8()?;
    let mut path = clear_slashes(&decoded);

    if config.root != "/" {
        let root = clear_slashes(&config.root);
        if !root.is_empty() {
            if let Some(stripped) = path.strip_prefix(root) {
                path = stripped;
            }
        }
    }

    Ok(clear_slashes(path).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_slashes_strips_both_ends() {
        assert_eq!(clear_slashes("/user/42/"), "user/42");
        assert_eq!(clear_slashes("/user/42"), "user/42");
        assert_eq!(clear_slashes("user/42/"), "user/42");
    }

    #[test]
    fn test_clear_slashes_idempotent() {
        for input in ["/a/", "//a//", "a", "/", "//", ""] {
            assert_eq!(clear_slashes(clear_slashes(input)), clear_slashes(input));
        }
    }

    #[test]
    fn test_clear_slashes_keeps_interior_slashes() {
        assert_eq!(clear_slashes("/a/b/c/"), "a/b/c");
    }

    #[test]
    fn test_canonical_root_path_is_empty() {
        let config = RouterConfig::default();
        assert_eq!(canonical_pathname("/", &config).unwrap(), "");
        assert_eq!(canonical_pathname("", &config).unwrap(), "");
    }

    #[test]
    fn test_canonical_default_root() {
        let config = RouterConfig::default();
        assert_eq!(
            canonical_pathname("/user/42/", &config).unwrap(),
            "user/42"
        );
    }

    #[test]
    fn test_canonical_strips_configured_root() {
        let config = RouterConfig::with_root("/app/");
        assert_eq!(
            canonical_pathname("/app/profile/", &config).unwrap(),
            "profile"
        );
        assert_eq!(canonical_pathname("/app/", &config).unwrap(), "");
    }

    #[test]
    fn test_canonical_root_stripped_once() {
        let config = RouterConfig::with_root("/app/");
        assert_eq!(
            canonical_pathname("/app/app/x/", &config).unwrap(),
            "app/x"
        );
    }

    #[test]
    fn test_canonical_decodes_percent_escapes() {
        let config = RouterConfig::default();
        assert_eq!(
            canonical_pathname("/caf%C3%A9/menu/", &config).unwrap(),
            "café/menu"
        );
    }

    #[test]
    fn test_canonical_never_bounded_by_slash() {
        let config = RouterConfig::with_root("/base/");
        for raw in ["/base/x/y/", "/x/", "/", "/base/"] {
            let canonical = canonical_pathname(raw, &config).unwrap();
            assert!(!canonical.starts_with('/'), "{canonical:?}");
            assert!(!canonical.ends_with('/'), "{canonical:?}");
        }
    }

    #[test]
    fn test_canonical_invalid_utf8_propagates() {
        let config = RouterConfig::default();
        assert!(canonical_pathname("/%FF/", &config).is_err());
    }
}
