//! URL handling for collection requests.
//!
//! Collection URLs look like `{{baseUrl}}/controls/:controlId?pageSize=10`.
//! This module strips the host placeholder, separates the query string, and
//! breaks the path into literal and `:param` segments.

use crate::naming::{NamingTables, normalize};

/// Host placeholders stripped from the front of a raw URL.
const HOST_PLACEHOLDERS: &[&str] = &["{{baseUrl}}", "{{authUrl}}"];

/// Version segment skipped when choosing a namespace.
pub const VERSION_SEGMENT: &str = "v1";

/// Namespace used for operations at the path root.
pub const ROOT_NAMESPACE: &str = "Root";

/// One `/`-separated piece of a normalized path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment<'a> {
    Literal(&'a str),
    /// A `:name` placeholder, without the colon.
    Param(&'a str),
}

/// Normalizes a raw collection URL into `(path, raw_query)`.
///
/// Returns `None` when nothing remains after trimming whitespace and the host
/// placeholder. The path always starts with `/`.
///
/// ## Examples
///
/// ```
/// use exemplar_gen::parser::normalize_raw_url;
///
/// assert_eq!(
///     normalize_raw_url("{{baseUrl}}/controls/:controlId?pageSize=10"),
///     Some(("/controls/:controlId".to_string(), "pageSize=10".to_string()))
/// );
/// assert_eq!(normalize_raw_url("  {{baseUrl}} "), None);
/// ```
pub fn normalize_raw_url(raw: &str) -> Option<(String, String)> {
    let mut rest = raw.trim();
    for placeholder in HOST_PLACEHOLDERS {
        if let Some(stripped) = rest.strip_prefix(placeholder) {
            rest = stripped;
        }
    }
    if rest.is_empty() {
        return None;
    }

    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    Some((path, query.to_string()))
}

/// Splits a raw `k=v&k2` query string into `(key, value)` pairs.
///
/// Empty pieces are skipped; a piece without `=` has an empty value.
pub fn parse_raw_query(raw_query: &str) -> Vec<(String, String)> {
    raw_query
        .split('&')
        .filter(|piece| !piece.is_empty())
        .map(|piece| match piece.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (piece.to_string(), String::new()),
        })
        .collect()
}

/// Breaks a path into its segments, skipping empty ones.
///
/// A lone `:` is treated as a literal.
pub fn path_segments(path: &str) -> Vec<PathSegment<'_>> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| match s.strip_prefix(':') {
            Some(name) if !name.is_empty() => PathSegment::Param(name),
            _ => PathSegment::Literal(s),
        })
        .collect()
}

/// Extracts `:param` names from a path, first occurrence wins.
///
/// ## Examples
///
/// ```
/// use exemplar_gen::parser::extract_path_params;
///
/// assert_eq!(extract_path_params("/controls"), Vec::<String>::new());
/// assert_eq!(
///     extract_path_params("/controls/:controlId/documents/:documentId"),
///     vec!["controlId", "documentId"]
/// );
/// ```
pub fn extract_path_params(path: &str) -> Vec<String> {
    let mut params: Vec<String> = Vec::new();
    for segment in path_segments(path) {
        if let PathSegment::Param(name) = segment
            && !params.iter().any(|p| p == name)
        {
            params.push(name.to_string());
        }
    }
    params
}

/// Chooses the namespace for a normalized path.
///
/// The first segment is normalized; a leading `v1` is skipped when another
/// segment follows it. An empty path maps to `Root`.
pub fn namespace_from_path(path: &str, tables: &NamingTables) -> String {
    let parts: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    let first = match parts.as_slice() {
        [] | [""] => return ROOT_NAMESPACE.to_string(),
        [version, next, ..] if *version == VERSION_SEGMENT => *next,
        [first, ..] => *first,
    };

    let name = normalize(first, false, tables);
    if name.is_empty() {
        ROOT_NAMESPACE.to_string()
    } else {
        name
    }
}

/// Collapses all whitespace runs into single spaces and trims the ends.
pub fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_placeholders_and_adds_slash() {
        assert_eq!(
            normalize_raw_url("{{baseUrl}}/controls"),
            Some(("/controls".to_string(), String::new()))
        );
        assert_eq!(
            normalize_raw_url("{{authUrl}}oauth/token"),
            Some(("/oauth/token".to_string(), String::new()))
        );
        assert_eq!(
            normalize_raw_url("  vendors/:id?x=1&y  "),
            Some(("/vendors/:id".to_string(), "x=1&y".to_string()))
        );
    }

    #[test]
    fn empty_after_trim_is_none() {
        assert_eq!(normalize_raw_url(""), None);
        assert_eq!(normalize_raw_url("{{baseUrl}}"), None);
        assert_eq!(normalize_raw_url("   "), None);
    }

    #[test]
    fn query_only_url_maps_to_root_path() {
        assert_eq!(
            normalize_raw_url("{{baseUrl}}?verbose=true"),
            Some(("/".to_string(), "verbose=true".to_string()))
        );
    }

    #[test]
    fn raw_query_pairs() {
        assert_eq!(
            parse_raw_query("pageSize=10&pageCursor&&filter=a=b"),
            vec![
                ("pageSize".to_string(), "10".to_string()),
                ("pageCursor".to_string(), String::new()),
                ("filter".to_string(), "a=b".to_string()),
            ]
        );
        assert!(parse_raw_query("").is_empty());
    }

    #[test]
    fn segments_split_literals_and_params() {
        assert_eq!(
            path_segments("/controls/:controlId/documents"),
            vec![
                PathSegment::Literal("controls"),
                PathSegment::Param("controlId"),
                PathSegment::Literal("documents"),
            ]
        );
        assert_eq!(path_segments("/a/:/b"), vec![
            PathSegment::Literal("a"),
            PathSegment::Literal(":"),
            PathSegment::Literal("b"),
        ]);
        assert!(path_segments("/").is_empty());
    }

    #[test]
    fn repeated_params_extracted_once() {
        assert_eq!(extract_path_params("/a/:id/b/:id"), vec!["id"]);
    }

    #[test]
    fn namespaces() {
        let tables = NamingTables::default();
        assert_eq!(namespace_from_path("/controls/:id", &tables), "Controls");
        assert_eq!(namespace_from_path("/v1/vendors", &tables), "Vendors");
        assert_eq!(namespace_from_path("/v1", &tables), "V1");
        assert_eq!(namespace_from_path("/", &tables), "Root");
        assert_eq!(namespace_from_path("/trust-centers", &tables), "TrustCenters");
        assert_eq!(namespace_from_path("/oauth/token", &tables), "OAuth");
    }

    #[test]
    fn one_line_collapses_whitespace() {
        assert_eq!(one_line("  Lists\n  all\tcontrols. "), "Lists all controls.");
        assert_eq!(one_line(""), "");
    }
}
