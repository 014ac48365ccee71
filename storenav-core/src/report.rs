// Report generation for enhanced menus

use crate::layout::{EnhancedLayout, FOOTER_MENU_HANDLE, HEADER_MENU_HANDLE};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use storenav_menu::{EnhancedMenu, EnhancedMenuItem};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
    Markdown,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            _ => None,
        }
    }
}

pub fn generate_report(
    layout: &EnhancedLayout,
    format: ReportFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(generate_text_report(layout)),
        ReportFormat::Json => generate_json_report(layout),
        ReportFormat::Markdown => Ok(generate_markdown_report(layout)),
    }
}

pub fn generate_text_report(layout: &EnhancedLayout) -> String {
    let mut report = String::new();

    report.push_str(RULE);
    report.push_str(&format!(
        "NAVIGATION: {}\n",
        layout.shop_name.as_deref().unwrap_or("(unnamed shop)")
    ));
    report.push_str(RULE);
    report.push('\n');

    push_text_section(&mut report, "Header", HEADER_MENU_HANDLE, &layout.header_menu);

    if let Some(ref footer) = layout.footer_menu {
        report.push('\n');
        push_text_section(&mut report, "Footer", FOOTER_MENU_HANDLE, footer);
    }
    if let Some(ref error) = layout.footer_error {
        report.push_str(&format!("\nFooter omitted: {}\n", error));
    }

    report
}

fn push_text_section(report: &mut String, label: &str, handle: &str, menu: &EnhancedMenu) {
    let external = count_external(&menu.items);
    report.push_str(&format!(
        "{} menu ({}): {} links, {} external\n",
        label,
        handle,
        menu.node_count(),
        external
    ));
    push_text_tree(report, &menu.items, "");
}

fn push_text_tree(report: &mut String, items: &[EnhancedMenuItem], indent: &str) {
    for (i, item) in items.iter().enumerate() {
        let is_last = i == items.len() - 1;
        let branch = if is_last { "└── " } else { "├── " };

        report.push_str(&format!("{}{}{} -> {}", indent, branch, item.title, item.to));
        if item.is_external {
            report.push_str(" (external)");
        }
        report.push('\n');

        if let Some(ref children) = item.items {
            let child_indent = format!("{}{}", indent, if is_last { "    " } else { "│   " });
            push_text_tree(report, children, &child_indent);
        }
    }
}

fn count_external(items: &[EnhancedMenuItem]) -> usize {
    items
        .iter()
        .map(|item| {
            usize::from(item.is_external)
                + item.items.as_deref().map(count_external).unwrap_or(0)
        })
        .sum()
}

pub fn generate_markdown_report(layout: &EnhancedLayout) -> String {
    let mut report = String::new();

    report.push_str(&format!(
        "# Navigation: {}\n\n",
        layout.shop_name.as_deref().unwrap_or("(unnamed shop)")
    ));

    report.push_str(&format!("## Header (`{}`)\n\n", HEADER_MENU_HANDLE));
    push_markdown_list(&mut report, &layout.header_menu.items, 0);

    if let Some(ref footer) = layout.footer_menu {
        report.push_str(&format!("\n## Footer (`{}`)\n\n", FOOTER_MENU_HANDLE));
        push_markdown_list(&mut report, &footer.items, 0);
    }
    if let Some(ref error) = layout.footer_error {
        report.push_str(&format!("\n> Footer omitted: {}\n", error));
    }

    report
}

fn push_markdown_list(report: &mut String, items: &[EnhancedMenuItem], depth: usize) {
    let indent = "  ".repeat(depth);
    for item in items {
        report.push_str(&format!(
            "{}- [{}]({}) `{}` `{}`\n",
            indent,
            escape_markdown(&item.title),
            escape_link_destination(&item.to),
            item.item_type,
            item.target
        ));
        if let Some(ref children) = item.items {
            push_markdown_list(report, children, depth + 1);
        }
    }
}

fn escape_markdown(text: &str) -> String {
    text.replace('[', "\\[").replace(']', "\\]")
}

/// Percent-encode the characters that end or break an inline link destination.
fn escape_link_destination(to: &str) -> String {
    let mut escaped = String::with_capacity(to.len());
    for c in to.chars() {
        match c {
            ' ' => escaped.push_str("%20"),
            '(' => escaped.push_str("%28"),
            ')' => escaped.push_str("%29"),
            '<' => escaped.push_str("%3C"),
            '>' => escaped.push_str("%3E"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn generate_json_report(layout: &EnhancedLayout) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(layout)
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
