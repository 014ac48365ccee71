// Tests for report generation functionality

use storenav_core::config::NavConfig;
use storenav_core::layout::{EnhancedLayout, enhance_layout, parse_document};
use storenav_core::report::{
    ReportFormat, generate_json_report, generate_markdown_report, generate_report,
    generate_text_report, save_report,
};
use tempfile::TempDir;

fn fixture_layout() -> EnhancedLayout {
    let doc = parse_document(include_str!("fixtures/layout.json")).unwrap();
    enhance_layout(&doc, &NavConfig::default().resolver()).unwrap()
}

// ============================================================================
// Report Format Tests
// ============================================================================

#[test]
fn test_report_format_from_str() {
    assert_eq!(ReportFormat::from_str("text"), Some(ReportFormat::Text));
    assert_eq!(ReportFormat::from_str("json"), Some(ReportFormat::Json));
    assert_eq!(ReportFormat::from_str("markdown"), Some(ReportFormat::Markdown));
    assert_eq!(ReportFormat::from_str("md"), Some(ReportFormat::Markdown));
}

#[test]
fn test_report_format_from_str_case_insensitive() {
    assert_eq!(ReportFormat::from_str("TEXT"), Some(ReportFormat::Text));
    assert_eq!(ReportFormat::from_str("Json"), Some(ReportFormat::Json));
}

#[test]
fn test_report_format_from_str_invalid() {
    assert_eq!(ReportFormat::from_str("csv"), None);
    assert_eq!(ReportFormat::from_str(""), None);
}

// ============================================================================
// Text Report Tests
// ============================================================================

#[test]
fn test_text_report_tree() {
    let report = generate_text_report(&fixture_layout());

    assert!(report.contains("NAVIGATION: Snowdevil"));
    assert!(report.contains("Header menu (main-menu): 6 links, 0 external"));
    assert!(report.contains("├── Home -> /\n"));
    assert!(report.contains("│   ├── Freestyle -> /collections/freestyle\n"));
    assert!(report.contains("│   └── The Hydrogen -> /products/the-hydrogen\n"));
    assert!(report.contains("└── Journal -> /journal\n"));
    assert!(report.contains("    └── Winter Guide -> /journal/winter-guide/\n"));
}

#[test]
fn test_text_report_footer_marks_external() {
    let report = generate_text_report(&fixture_layout());

    assert!(report.contains("Footer menu (footer): 3 links, 1 external"));
    assert!(report.contains(
        "    └── Hydrogen docs -> https://shopify.dev/custom-storefronts/hydrogen (external)\n"
    ));
}

#[test]
fn test_text_report_footer_error() {
    let mut layout = fixture_layout();
    layout.footer_menu = None;
    layout.footer_error = Some("Invalid menu: menu has no items".to_string());

    let report = generate_text_report(&layout);
    assert!(!report.contains("Footer menu"));
    assert!(report.contains("Footer omitted: Invalid menu: menu has no items"));
}

// ============================================================================
// Markdown / JSON Report Tests
// ============================================================================

#[test]
fn test_markdown_report_nesting() {
    let report = generate_markdown_report(&fixture_layout());

    assert!(report.starts_with("# Navigation: Snowdevil\n"));
    assert!(report.contains("## Header (`main-menu`)"));
    assert!(report.contains("- [Shop](/products) `CATALOG` `_self`\n"));
    assert!(report.contains("  - [Freestyle](/collections/freestyle) `COLLECTION` `_self`\n"));
    assert!(report.contains("## Footer (`footer`)"));
}

#[test]
fn test_markdown_report_escapes_link_destination() {
    let doc = parse_document(
        r#"{
        "headerMenu": {
            "items": [
                {
                    "id": "wiki",
                    "title": "Rust (language)",
                    "type": "HTTP",
                    "url": "https://en.wikipedia.org/wiki/Rust_(programming language)"
                }
            ]
        }
    }"#,
    )
    .unwrap();
    let layout = enhance_layout(&doc, &NavConfig::default().resolver()).unwrap();
    let report = generate_markdown_report(&layout);

    assert!(report.contains(
        "- [Rust (language)](https://en.wikipedia.org/wiki/Rust_%28programming%20language%29) \
         `HTTP` `_blank`\n"
    ));
    // The stored link is untouched; only the rendered destination is encoded
    assert_eq!(
        layout.header_menu.items[0].to,
        "https://en.wikipedia.org/wiki/Rust_(programming language)"
    );
}

#[test]
fn test_json_report_round_trips_layout() {
    let layout = fixture_layout();
    let json = generate_json_report(&layout).unwrap();
    let parsed: EnhancedLayout = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, layout);
}

#[test]
fn test_generate_report_dispatch() {
    let layout = fixture_layout();
    let text = generate_report(&layout, ReportFormat::Text).unwrap();
    let json = generate_report(&layout, ReportFormat::Json).unwrap();

    assert!(text.contains("NAVIGATION"));
    assert!(json.trim_start().starts_with('{'));
}

#[test]
fn test_save_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nav.md");

    save_report("# Navigation\n", &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Navigation\n");
}
