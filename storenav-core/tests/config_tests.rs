// Tests for configuration files

use std::io::Write;
use storenav_core::config::NavConfig;
use storenav_core::error::CoreError;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_save_then_load() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("nested").join("config.json");

    let mut config = NavConfig::default();
    config.owned_domains = vec!["snowdevil.example".to_string()];
    config.set_prefix("product", "shop");
    config.save(&path)?;

    let loaded = NavConfig::load(&path)?;
    assert_eq!(loaded, config);
    assert_eq!(loaded.prefixes.get("PRODUCT").map(String::as_str), Some("shop"));
    Ok(())
}

#[test]
fn test_loaded_config_drives_resolver() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"{{"ownedDomains": ["snowdevil.example"], "prefixes": {{"PRODUCT": "shop"}}, "maxDepth": 2}}"#
    )?;

    let config = NavConfig::load(file.path())?;
    let resolver = config.resolver();

    let link = resolver.resolve_link("PRODUCT", "https://www.snowdevil.example/products/board")?;
    assert!(!link.is_external);
    assert_eq!(link.to, "/shop/board");

    let link = resolver.resolve_link("PRODUCT", "https://demo.myshopify.com/products/board")?;
    assert!(link.is_external);
    assert_eq!(resolver.max_depth(), Some(2));
    Ok(())
}

#[test]
fn test_load_malformed_config() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "ownedDomains = [\"x\"]").unwrap();

    let err = NavConfig::load(file.path()).unwrap_err();
    match err {
        CoreError::InvalidConfig(msg) => assert!(msg.contains("failed to parse")),
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_load_rejects_zero_depth() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"maxDepth": 0}}"#).unwrap();

    assert!(matches!(
        NavConfig::load(file.path()),
        Err(CoreError::InvalidConfig(_))
    ));
}

#[test]
fn test_load_or_default_with_explicit_missing_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.json");

    assert!(NavConfig::load_or_default(Some(&missing)).is_err());
}

#[test]
fn test_default_path_is_expanded() {
    let path = NavConfig::default_path();
    assert!(path.ends_with(".config/storenav/config.json"));
    assert!(!path.to_string_lossy().starts_with('~'));
}
