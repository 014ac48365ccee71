use serde::{Deserialize, Serialize};

/// A navigation menu as returned by the storefront API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// A raw menu node. `items` is `None` when the API omitted the field,
/// which is distinct from an empty child list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    pub title: String,
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<MenuItem>>,
}

impl MenuItem {
    pub fn new(id: &str, title: &str, item_type: &str, url: &str) -> Self {
        Self {
            id: id.to_string(),
            resource_id: None,
            title: title.to_string(),
            item_type: item_type.to_string(),
            url: Some(url.to_string()),
            items: None,
        }
    }

    pub fn with_items(mut self, items: Vec<MenuItem>) -> Self {
        self.items = Some(items);
        self
    }
}

/// Browsing context a link should open in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkTarget {
    #[serde(rename = "_self")]
    SelfTab,
    #[serde(rename = "_blank")]
    Blank,
}

impl LinkTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkTarget::SelfTab => "_self",
            LinkTarget::Blank => "_blank",
        }
    }
}

impl std::fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancedMenu {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub items: Vec<EnhancedMenuItem>,
}

impl EnhancedMenu {
    /// Strip the routing fields, giving back the raw menu shape.
    pub fn to_raw(&self) -> Menu {
        Menu {
            id: self.id.clone(),
            items: self.items.iter().map(EnhancedMenuItem::to_raw).collect(),
        }
    }

    /// Total number of nodes at every depth.
    pub fn node_count(&self) -> usize {
        self.items.iter().map(EnhancedMenuItem::node_count).sum()
    }
}

/// A menu node carrying the resolved route for navigation controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedMenuItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub url: String,
    pub is_external: bool,
    pub target: LinkTarget,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<EnhancedMenuItem>>,
}

impl EnhancedMenuItem {
    pub fn to_raw(&self) -> MenuItem {
        MenuItem {
            id: self.id.clone(),
            resource_id: self.resource_id.clone(),
            title: self.title.clone(),
            item_type: self.item_type.clone(),
            url: Some(self.url.clone()),
            items: self
                .items
                .as_ref()
                .map(|children| children.iter().map(EnhancedMenuItem::to_raw).collect()),
        }
    }

    pub fn node_count(&self) -> usize {
        1 + self
            .items
            .as_ref()
            .map(|children| children.iter().map(EnhancedMenuItem::node_count).sum())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_deserializes_api_shape() {
        let json = r#"{
            "id": "gid://shopify/MenuItem/1",
            "resourceId": "gid://shopify/Collection/9",
            "title": "Shop",
            "type": "COLLECTION",
            "url": "https://demo.myshopify.com/collections/freestyle"
        }"#;

        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_type, "COLLECTION");
        assert_eq!(item.resource_id.as_deref(), Some("gid://shopify/Collection/9"));
        assert!(item.items.is_none());
    }

    #[test]
    fn test_missing_url_deserializes_as_none() {
        let item: MenuItem =
            serde_json::from_str(r#"{"id": "1", "title": "Broken", "type": "PAGE"}"#).unwrap();
        assert!(item.url.is_none());
    }

    #[test]
    fn test_enhanced_item_serializes_camel_case() {
        let item = EnhancedMenuItem {
            id: "1".to_string(),
            resource_id: None,
            title: "Journal".to_string(),
            item_type: "BLOG".to_string(),
            url: "https://demo.myshopify.com/blogs/journal".to_string(),
            is_external: false,
            target: LinkTarget::SelfTab,
            to: "/journal".to_string(),
            items: None,
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["isExternal"], false);
        assert_eq!(value["target"], "_self");
        assert_eq!(value["type"], "BLOG");
        assert!(value.get("items").is_none());
    }

    fn external(id: &str) -> EnhancedMenuItem {
        EnhancedMenuItem {
            id: id.to_string(),
            resource_id: None,
            title: id.to_string(),
            item_type: "HTTP".to_string(),
            url: "https://example.com/".to_string(),
            is_external: true,
            target: LinkTarget::Blank,
            to: "https://example.com/".to_string(),
            items: None,
        }
    }

    #[test]
    fn test_node_count_includes_children() {
        let mut parent = external("1");
        parent.items = Some(vec![external("2"), external("3")]);

        assert_eq!(parent.node_count(), 3);
    }

    #[test]
    fn test_to_raw_keeps_absent_children_absent() {
        let mut parent = external("1");
        parent.items = Some(vec![external("2")]);

        let raw = parent.to_raw();
        assert_eq!(raw.url.as_deref(), Some("https://example.com/"));
        let children = raw.items.unwrap();
        assert_eq!(children.len(), 1);
        assert!(children[0].items.is_none());
    }
}
