use crate::prefixes::RoutePrefixes;

/// Non-empty `/`-delimited segments of a URL path.
pub fn path_segments(pathname: &str) -> Vec<&str> {
    pathname.split('/').filter(|s| !s.is_empty()).collect()
}

/// Map a resource type and URL path to the storefront route for it.
///
/// Special cases are checked first and ignore the prefix table where noted:
/// - `FRONTPAGE` is always `/`
/// - `ARTICLE` becomes `/{BLOG prefix}/{blog handle}/{article handle}/`, the
///   trailing slash being what tells article routes apart
/// - `COLLECTIONS`, `SEARCH` and `CATALOG` are fixed landing routes built from
///   their prefix alone
///
/// Every other type, including ones this table has never heard of, resolves
/// to `/{prefix}/{handle}` or `/{handle}` when the prefix is empty.
pub fn resolve_to_from_type(item_type: &str, pathname: &str, prefixes: &RoutePrefixes) -> String {
    if item_type.is_empty() {
        return String::new();
    }

    let segments = path_segments(pathname);
    let handle = segments.last().copied().unwrap_or("");

    match item_type {
        "FRONTPAGE" => "/".to_string(),
        "ARTICLE" => {
            let blog_handle = segments
                .len()
                .checked_sub(2)
                .map(|i| segments[i])
                .unwrap_or("");
            let parts: Vec<&str> = [prefixes.get("BLOG"), blog_handle, handle]
                .into_iter()
                .filter(|p| !p.is_empty())
                .collect();
            if parts.is_empty() {
                "/".to_string()
            } else {
                format!("/{}/", parts.join("/"))
            }
        }
        "COLLECTIONS" | "SEARCH" | "CATALOG" => format!("/{}", prefixes.get(item_type)),
        _ => match prefixes.get(item_type) {
            "" => format!("/{}", handle),
            prefix => format!("/{}/{}", prefix, handle),
        },
    }
}
