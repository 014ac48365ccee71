// Layout documents: the header and footer menus fetched for every page

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use storenav_menu::{EnhancedMenu, Menu, MenuResolver};
use tracing::{info, warn};

/// Menu handle the header navigation is configured under.
pub const HEADER_MENU_HANDLE: &str = "main-menu";
/// Menu handle the footer navigation is configured under.
pub const FOOTER_MENU_HANDLE: &str = "footer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub name: String,
}

/// Response of the layout menus query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDocument {
    #[serde(default)]
    pub shop: Option<Shop>,
    #[serde(default)]
    pub header_menu: Option<Menu>,
    #[serde(default)]
    pub footer_menu: Option<Menu>,
}

impl LayoutDocument {
    pub fn from_menu(menu: Menu) -> Self {
        Self {
            shop: None,
            header_menu: Some(menu),
            footer_menu: None,
        }
    }

    pub fn shop_name(&self) -> Option<&str> {
        self.shop.as_ref().map(|s| s.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_name: Option<String>,
    pub header_menu: EnhancedMenu,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_menu: Option<EnhancedMenu>,
    /// Why the footer was dropped, when it was present but malformed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_error: Option<String>,
}

/// Parse a layout document. Accepts the layout object itself, the same
/// object wrapped in a GraphQL `data` envelope, or a bare menu, which is
/// treated as the header.
pub fn parse_document(json: &str) -> Result<LayoutDocument> {
    let value: Value = serde_json::from_str(json)?;
    let value = unwrap_envelope(value)?;

    let Some(object) = value.as_object() else {
        return Err(CoreError::InvalidDocument(
            "expected a JSON object".to_string(),
        ));
    };

    if ["shop", "headerMenu", "footerMenu"]
        .iter()
        .any(|key| object.contains_key(*key))
    {
        Ok(serde_json::from_value(value)?)
    } else if object.contains_key("items") {
        Ok(LayoutDocument::from_menu(serde_json::from_value(value)?))
    } else {
        Err(CoreError::InvalidDocument(
            "neither a layout document nor a menu".to_string(),
        ))
    }
}

fn unwrap_envelope(mut value: Value) -> Result<Value> {
    let Some(object) = value.as_object_mut() else {
        return Ok(value);
    };
    if !object.contains_key("data") && !object.contains_key("errors") {
        return Ok(value);
    }

    match object.remove("data") {
        Some(data) if !data.is_null() => Ok(data),
        _ => {
            let message = object
                .get("errors")
                .and_then(|errors| errors.get(0))
                .and_then(|error| error.get("message"))
                .and_then(Value::as_str)
                .unwrap_or("response has no data");
            Err(CoreError::InvalidDocument(message.to_string()))
        }
    }
}

/// Enhance both navigation regions of a layout.
///
/// The header is required and its errors propagate. A malformed footer is
/// left out of the result so the header can still render.
pub fn enhance_layout(
    document: &LayoutDocument,
    resolver: &MenuResolver,
) -> Result<EnhancedLayout> {
    let header = document
        .header_menu
        .as_ref()
        .ok_or(CoreError::MissingHeaderMenu)?;
    let header_menu = resolver.enhance(header)?;

    let (footer_menu, footer_error) = match document.footer_menu {
        Some(ref footer) => match resolver.enhance(footer) {
            Ok(enhanced) => (Some(enhanced), None),
            Err(e) => {
                warn!("Omitting footer menu: {}", e);
                (None, Some(e.to_string()))
            }
        },
        None => (None, None),
    };

    info!(
        "Enhanced layout for {}: header {} items, footer {}",
        document.shop_name().unwrap_or("unknown shop"),
        header_menu.node_count(),
        footer_menu
            .as_ref()
            .map(|f| format!("{} items", f.node_count()))
            .unwrap_or_else(|| "none".to_string())
    );

    Ok(EnhancedLayout {
        shop_name: document.shop_name().map(str::to_string),
        header_menu,
        footer_menu,
        footer_error,
    })
}
