use crate::domain::{DomainPolicy, OwnedDomains};
use crate::error::{MenuError, Result};
use crate::item::{EnhancedMenu, EnhancedMenuItem, LinkTarget, Menu, MenuItem};
use crate::prefixes::RoutePrefixes;
use crate::route::resolve_to_from_type;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

/// Routing metadata computed for a single link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub is_external: bool,
    pub target: LinkTarget,
    pub to: String,
}

/// Turns raw menus into enhanced menus.
///
/// A resolver holds only immutable configuration, so one instance can be
/// shared between requests and threads.
#[derive(Clone)]
pub struct MenuResolver {
    prefixes: RoutePrefixes,
    policy: Arc<dyn DomainPolicy>,
    max_depth: Option<usize>,
}

impl Default for MenuResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MenuResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuResolver")
            .field("prefixes", &self.prefixes)
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

impl MenuResolver {
    pub fn new() -> Self {
        Self {
            prefixes: RoutePrefixes::default(),
            policy: Arc::new(OwnedDomains::default()),
            max_depth: None,
        }
    }

    pub fn with_prefixes(mut self, prefixes: RoutePrefixes) -> Self {
        self.prefixes = prefixes;
        self
    }

    pub fn with_custom_prefixes(mut self, custom: &HashMap<String, String>) -> Self {
        self.prefixes.extend(custom);
        self
    }

    pub fn with_owned_domains(self, domains: OwnedDomains) -> Self {
        self.with_domain_policy(domains)
    }

    pub fn with_domain_policy<P>(mut self, policy: P) -> Self
    where
        P: DomainPolicy + 'static,
    {
        self.policy = Arc::new(policy);
        self
    }

    /// Reject menus nested deeper than `depth`. Unbounded unless set.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn prefixes(&self) -> &RoutePrefixes {
        &self.prefixes
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Enhance every node of `menu`, keeping order and shape.
    ///
    /// Fails on the first malformed node; there is no partial result.
    pub fn enhance(&self, menu: &Menu) -> Result<EnhancedMenu> {
        if menu.items.is_empty() {
            warn!("Rejecting menu {:?}: no items", menu.id);
            return Err(MenuError::InvalidMenu);
        }

        let mut ancestors: Vec<&str> = Vec::new();
        let items = menu
            .items
            .iter()
            .map(|item| self.enhance_item(item, &mut ancestors, 1))
            .collect::<Result<Vec<_>>>()?;

        let enhanced = EnhancedMenu {
            id: menu.id.clone(),
            items,
        };
        info!(
            "Enhanced menu {:?}: {} top-level items, {} total",
            enhanced.id,
            enhanced.items.len(),
            enhanced.node_count()
        );
        Ok(enhanced)
    }

    /// Compute routing metadata for a single URL of the given resource type.
    pub fn resolve_link(&self, item_type: &str, url: &str) -> Result<ResolvedLink> {
        let parsed = parse_menu_url(url).map_err(|reason| MenuError::InvalidMenuItem {
            id: format!("<{}>", item_type),
            reason,
        })?;
        Ok(self.resolve_parsed(item_type, url, &parsed))
    }

    fn resolve_parsed(&self, item_type: &str, raw_url: &str, parsed: &Url) -> ResolvedLink {
        if self.policy.is_owned(parsed) {
            ResolvedLink {
                is_external: false,
                target: LinkTarget::SelfTab,
                to: resolve_to_from_type(item_type, parsed.path(), &self.prefixes),
            }
        } else {
            ResolvedLink {
                is_external: true,
                target: LinkTarget::Blank,
                to: raw_url.to_string(),
            }
        }
    }

    fn enhance_item<'a>(
        &self,
        item: &'a MenuItem,
        ancestors: &mut Vec<&'a str>,
        depth: usize,
    ) -> Result<EnhancedMenuItem> {
        if let Some(max_depth) = self.max_depth
            && depth > max_depth
        {
            warn!("Menu item {} is nested deeper than {}", item.id, max_depth);
            return Err(MenuError::MenuTooDeep { max_depth });
        }
        if ancestors.contains(&item.id.as_str()) {
            warn!("Menu item {} is its own ancestor", item.id);
            return Err(MenuError::CyclicMenu {
                id: item.id.clone(),
            });
        }

        let raw_url = item.url.as_deref().ok_or_else(|| MenuError::InvalidMenuItem {
            id: item.id.clone(),
            reason: "missing url".to_string(),
        })?;
        let parsed = parse_menu_url(raw_url).map_err(|reason| MenuError::InvalidMenuItem {
            id: item.id.clone(),
            reason,
        })?;

        let link = self.resolve_parsed(&item.item_type, raw_url, &parsed);
        debug!(
            "{} [{}] {} -> {} ({})",
            item.id, item.item_type, raw_url, link.to, link.target
        );

        let items = match item.items {
            Some(ref children) => {
                ancestors.push(item.id.as_str());
                let enhanced = children
                    .iter()
                    .map(|child| self.enhance_item(child, ancestors, depth + 1))
                    .collect::<Result<Vec<_>>>();
                ancestors.pop();
                Some(enhanced?)
            }
            None => None,
        };

        Ok(EnhancedMenuItem {
            id: item.id.clone(),
            resource_id: item.resource_id.clone(),
            title: item.title.clone(),
            item_type: item.item_type.clone(),
            url: raw_url.to_string(),
            is_external: link.is_external,
            target: link.target,
            to: link.to,
            items,
        })
    }
}

fn parse_menu_url(raw: &str) -> std::result::Result<Url, String> {
    if raw.trim().is_empty() {
        return Err("missing url".to_string());
    }
    Url::parse(raw).map_err(|e| format!("unparsable url '{}': {}", raw, e))
}

/// Enhance `menu` using the built-in prefixes overlaid with `custom_prefixes`
/// and the default owned domain.
pub fn enhance_menu(
    menu: &Menu,
    custom_prefixes: &HashMap<String, String>,
) -> Result<EnhancedMenu> {
    MenuResolver::new()
        .with_custom_prefixes(custom_prefixes)
        .enhance(menu)
}
