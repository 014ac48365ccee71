// Resolver configuration file

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use storenav_menu::{DEFAULT_OWNED_DOMAIN, MenuResolver, OwnedDomains, RoutePrefixes};
use tracing::{debug, info};

pub const DEFAULT_CONFIG_DIR: &str = "~/.config/storenav/";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavConfig {
    /// Hostnames treated as this storefront; everything else opens in a new tab.
    pub owned_domains: Vec<String>,
    /// Route prefix overrides keyed by resource type.
    pub prefixes: BTreeMap<String, String>,
    /// Optional nesting limit; menus of any depth are accepted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl Default for NavConfig {
    fn default() -> Self {
        // Matches the storefront's own routes: journal articles live at the
        // root and the catalog landing page is /products.
        Self {
            owned_domains: vec![DEFAULT_OWNED_DOMAIN.to_string()],
            prefixes: BTreeMap::from([
                ("BLOG".to_string(), String::new()),
                ("CATALOG".to_string(), "products".to_string()),
            ]),
            max_depth: None,
        }
    }
}

impl NavConfig {
    /// `~/.config/storenav/config.json`, tilde-expanded
    pub fn default_path() -> PathBuf {
        let dir = shellexpand::tilde(DEFAULT_CONFIG_DIR);
        Path::new(dir.as_ref()).join(CONFIG_FILE_NAME)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CoreError::InvalidConfig(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config: NavConfig = serde_json::from_str(&content).map_err(|e| {
            CoreError::InvalidConfig(format!("failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` when given, else the default location if it exists,
    /// else built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Self::default_path();
                if default_path.exists() {
                    Self::load(&default_path)
                } else {
                    debug!("No config at {}, using defaults", default_path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!("Wrote config to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth == Some(0) {
            return Err(CoreError::InvalidConfig(
                "maxDepth must be at least 1".to_string(),
            ));
        }
        if let Some(key) = self.prefixes.keys().find(|k| k.trim().is_empty()) {
            return Err(CoreError::InvalidConfig(format!(
                "prefix override has an empty resource type: '{}'",
                key
            )));
        }
        Ok(())
    }

    pub fn set_prefix(&mut self, item_type: &str, prefix: &str) {
        self.prefixes
            .insert(item_type.trim().to_uppercase(), prefix.to_string());
    }

    pub fn resolver(&self) -> MenuResolver {
        let mut prefixes = RoutePrefixes::default();
        for (item_type, prefix) in &self.prefixes {
            prefixes.set(item_type, prefix);
        }
        let resolver = MenuResolver::new()
            .with_prefixes(prefixes)
            .with_owned_domains(OwnedDomains::new(&self.owned_domains));
        match self.max_depth {
            Some(depth) => resolver.with_max_depth(depth),
            None => resolver,
        }
    }
}

/// Parse a `TYPE=SEGMENT` override. The segment may be empty (`BLOG=`).
pub fn parse_prefix_override(arg: &str) -> Result<(String, String)> {
    let (item_type, prefix) = arg.split_once('=').ok_or_else(|| {
        CoreError::InvalidConfig(format!("expected TYPE=SEGMENT, got '{}'", arg))
    })?;
    let item_type = item_type.trim();
    if item_type.is_empty() {
        return Err(CoreError::InvalidConfig(format!(
            "missing resource type in '{}'",
            arg
        )));
    }
    Ok((item_type.to_uppercase(), prefix.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_storefront_loader() {
        let config = NavConfig::default();
        assert_eq!(config.owned_domains, vec!["myshopify.com"]);
        assert_eq!(config.prefixes.get("BLOG").map(String::as_str), Some(""));
        assert_eq!(
            config.prefixes.get("CATALOG").map(String::as_str),
            Some("products")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolver_uses_overrides() {
        let config = NavConfig::default();
        let resolver = config.resolver();
        assert_eq!(resolver.prefixes().get("CATALOG"), "products");
        assert_eq!(resolver.prefixes().get("PRODUCT"), "products");
        assert_eq!(resolver.max_depth(), None);
    }

    #[test]
    fn test_parse_prefix_override() {
        assert_eq!(
            parse_prefix_override("blog=journal").unwrap(),
            ("BLOG".to_string(), "journal".to_string())
        );
        assert_eq!(
            parse_prefix_override("BLOG=").unwrap(),
            ("BLOG".to_string(), "".to_string())
        );
        assert!(parse_prefix_override("BLOG").is_err());
        assert!(parse_prefix_override("=journal").is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: NavConfig = serde_json::from_str(r#"{"maxDepth": 4}"#).unwrap();
        assert_eq!(config.max_depth, Some(4));
        assert_eq!(config.owned_domains, vec!["myshopify.com"]);
    }

    #[test]
    fn test_zero_depth_is_invalid() {
        let config = NavConfig {
            max_depth: Some(0),
            ..NavConfig::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::InvalidConfig(_))));
    }
}
