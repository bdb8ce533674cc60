// src/targets/candidates.rs
// =============================================================================
// Builds the list of WordPress REST endpoints worth probing for a target.
//
// The list is fixed apart from the base URL:
// - five user-listing paths (two under /blog/, one bare wp-json, two
//   rest_route query forms, one of them with a mixed-case "usErs" decoy
//   that slips past naive case-sensitive blocking rules)
// - one endpoint per numbered user ID, 1..=999
// - a search for the conventional admin@<domain> account
//
// The function is pure: same target in, same ordered list out.
// =============================================================================

use std::ops::RangeInclusive;

/// User IDs probed through /wp-json/wp/v2/users/{id}
pub const USER_ID_RANGE: RangeInclusive<u32> = 1..=999;

const LISTING_PATHS: [&str; 5] = [
    "/blog/wp-json/wp/v2/users",
    "/blog/?rest_route=/wp/v2/users",
    "/wp-json/wp/v2/users",
    "/section/news?rest_route=/wp/v2/users",
    "/section/news?rest_route=/wp/v2/usErs",
];

// Generates every candidate URL for `target` (e.g. "https://example.com")
//
// Numbered user endpoints are fully qualified. A path-only form would be
// rejected as a malformed URL and never reach the server.
pub fn candidate_urls(target: &str) -> Vec<String> {
    let target = target.trim_end_matches('/');

    let mut urls: Vec<String> = LISTING_PATHS
        .iter()
        .map(|path| format!("{}{}", target, path))
        .collect();

    urls.extend(USER_ID_RANGE.map(|id| format!("{}/wp-json/wp/v2/users/{}", target, id)));

    urls.push(format!(
        "{}/wp-json/wp/v2/users?search=admin@{}",
        target,
        strip_scheme(target)
    ));

    urls
}

/// Removes a leading http:// or https:// if present
pub fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_count() {
        let urls = candidate_urls("https://example.com");
        assert_eq!(urls.len(), 5 + 999 + 1);
    }

    #[test]
    fn test_fixed_paths_come_first() {
        let urls = candidate_urls("https://example.com");
        assert_eq!(urls[0], "https://example.com/blog/wp-json/wp/v2/users");
        assert_eq!(urls[1], "https://example.com/blog/?rest_route=/wp/v2/users");
        assert_eq!(urls[2], "https://example.com/wp-json/wp/v2/users");
        assert_eq!(urls[3], "https://example.com/section/news?rest_route=/wp/v2/users");
        assert_eq!(urls[4], "https://example.com/section/news?rest_route=/wp/v2/usErs");
    }

    #[test]
    fn test_numbered_users_are_fully_qualified() {
        let urls = candidate_urls("https://example.com");
        assert_eq!(urls[5], "https://example.com/wp-json/wp/v2/users/1");
        assert_eq!(urls[1003], "https://example.com/wp-json/wp/v2/users/999");
        assert!(urls.iter().all(|url| url.starts_with("https://example.com/")));
    }

    #[test]
    fn test_admin_search_uses_bare_host() {
        let urls = candidate_urls("http://example.com");
        assert_eq!(
            urls.last().unwrap(),
            "http://example.com/wp-json/wp/v2/users?search=admin@example.com"
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        let first = candidate_urls("https://example.com");
        let second = candidate_urls("https://example.com");
        assert_eq!(first, second);
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(
            candidate_urls("https://example.com/"),
            candidate_urls("https://example.com")
        );
    }

    #[test]
    fn test_strip_scheme() {
        assert_eq!(strip_scheme("https://example.com"), "example.com");
        assert_eq!(strip_scheme("http://example.com:8080"), "example.com:8080");
        assert_eq!(strip_scheme("example.com"), "example.com");
    }
}
