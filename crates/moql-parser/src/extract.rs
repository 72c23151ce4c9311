//! Parameter extraction: query string to individual `key<op>value` tokens

use std::collections::HashSet;

/// Split a raw query string into parameter tokens.
///
/// Percent-encoded input is decoded before splitting, so encoded and plain
/// spellings of the same query yield the same token list. Empty segments
/// are dropped; an empty input yields an empty sequence.
pub fn extract_parameters(query: &str) -> Vec<String> {
    let decoded = match urlencoding::decode(query) {
        Ok(decoded) => decoded.into_owned(),
        // Not valid UTF-8 after decoding: treat the input as already plain
        Err(_) => query.to_string(),
    };
    decoded
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drop tokens whose key component is blacklisted.
///
/// Blacklisting removes non-filter metadata keys (API keys, cache-busters)
/// before any operator or type parsing can fire on them. Without a
/// blacklist this is the identity.
pub fn remove_blacklisted(
    parameters: Vec<String>,
    blacklist: Option<&HashSet<String>>,
) -> Vec<String> {
    let Some(blacklist) = blacklist else {
        return parameters;
    };
    parameters
        .into_iter()
        .filter(|token| !blacklist.contains(token_key(token)))
        .collect()
}

/// The key component of a token: everything before the first operator
/// character, or the whole token when none is present.
fn token_key(token: &str) -> &str {
    match token.find(['=', '<', '>', '!']) {
        Some(at) => &token[..at],
        None => token,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ENCODED: &str = "score%3E525&sort%3D-created_at";
    const PLAIN: &str = "score>525&sort=-created_at";

    #[test]
    fn test_extract_plain() {
        assert_eq!(extract_parameters(PLAIN), vec!["score>525", "sort=-created_at"]);
    }

    #[test]
    fn test_extract_decodes_before_splitting() {
        assert_eq!(extract_parameters(ENCODED), extract_parameters(PLAIN));
    }

    #[test]
    fn test_extract_empty_input() {
        assert!(extract_parameters("").is_empty());
    }

    #[test]
    fn test_extract_drops_empty_segments() {
        assert_eq!(extract_parameters("a=1&&b=2"), vec!["a=1", "b=2"]);
    }

    #[test]
    fn test_remove_blacklisted_without_blacklist() {
        let tokens = vec!["a=1".to_string(), "b=2".to_string()];
        assert_eq!(remove_blacklisted(tokens.clone(), None), tokens);
    }

    #[test]
    fn test_remove_blacklisted_matches_key_component() {
        let tokens = vec![
            "latitude>9.93".to_string(),
            "score>525".to_string(),
            "longitude=-84.08".to_string(),
        ];
        let blacklist: HashSet<String> = ["latitude".to_string(), "longitude".to_string()].into();
        assert_eq!(
            remove_blacklisted(tokens, Some(&blacklist)),
            vec!["score>525"]
        );
    }

    #[test]
    fn test_remove_blacklisted_exists_token() {
        let tokens = vec!["api_key".to_string(), "score>5".to_string()];
        let blacklist: HashSet<String> = ["api_key".to_string()].into();
        assert_eq!(remove_blacklisted(tokens, Some(&blacklist)), vec!["score>5"]);
    }
}
