use std::collections::HashMap;

/// Built-in route prefix per resource type.
/// See the storefront `MenuItemType` enum; `COLLECTIONS` is undocumented upstream.
pub const DEFAULT_PREFIXES: &[(&str, &str)] = &[
    ("BLOG", "blogs"),
    ("COLLECTION", "collections"),
    ("COLLECTIONS", "collections"),
    ("FRONTPAGE", "frontpage"),
    ("HTTP", ""),
    ("PAGE", "pages"),
    ("CATALOG", "collections/all"),
    ("PRODUCT", "products"),
    ("SEARCH", "search"),
    ("SHOP_POLICY", "policies"),
];

/// Resource type to path prefix table: built-in defaults with caller
/// overrides laid on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePrefixes {
    table: HashMap<String, String>,
}

impl Default for RoutePrefixes {
    fn default() -> Self {
        Self {
            table: DEFAULT_PREFIXES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl RoutePrefixes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with `custom`. Keys in `custom` win; every other
    /// type keeps its built-in prefix.
    pub fn with_custom(custom: &HashMap<String, String>) -> Self {
        let mut prefixes = Self::default();
        prefixes.extend(custom);
        prefixes
    }

    pub fn extend(&mut self, custom: &HashMap<String, String>) {
        for (item_type, prefix) in custom {
            self.set(item_type, prefix);
        }
    }

    pub fn set(&mut self, item_type: &str, prefix: &str) {
        // Stored without surrounding slashes so paths can be joined with '/'
        self.table
            .insert(item_type.to_string(), prefix.trim_matches('/').to_string());
    }

    /// Prefix for `item_type`; unknown types have an empty prefix.
    pub fn get(&self, item_type: &str) -> &str {
        self.table.get(item_type).map(String::as_str).unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
