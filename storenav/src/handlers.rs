use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use colored::Colorize;
use std::path::{Path, PathBuf};
use storenav_core::config::{CONFIG_FILE_NAME, NavConfig, parse_prefix_override};
use storenav_core::layout::enhance_layout;
use storenav_core::report::{ReportFormat, generate_report, save_report};
use storenav_core::source::{DocumentFetcher, DocumentSource};
use storenav_menu::ResolvedLink;
use tracing::Level;
use url::Url;

/// Install the fmt subscriber. Logs go to stderr so reports on stdout stay clean.
pub fn init_logging(verbosity: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    // A second install (tests, repeated calls) is harmless
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Apply command-line overrides on top of a loaded config.
pub fn apply_overrides(
    mut config: NavConfig,
    owned_domains: &[String],
    prefixes: &[String],
    max_depth: Option<usize>,
) -> Result<NavConfig> {
    if !owned_domains.is_empty() {
        config.owned_domains = owned_domains.to_vec();
    }
    for arg in prefixes {
        let (item_type, prefix) = parse_prefix_override(arg)?;
        config.set_prefix(&item_type, &prefix);
    }
    if let Some(depth) = max_depth {
        config.max_depth = Some(depth);
    }
    config.validate()?;
    Ok(config)
}

/// Expand a leading `~` in a path argument.
pub fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

fn config_from_args(args: &ArgMatches) -> Result<NavConfig> {
    let config_path = args.get_one::<PathBuf>("config").map(|p| expand_path(p));
    let config = NavConfig::load_or_default(config_path.as_deref())
        .context("Failed to load configuration")?;

    let owned_domains: Vec<String> = args
        .get_many::<String>("owned-domain")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let prefixes: Vec<String> = args
        .get_many::<String>("prefix")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let max_depth = args.get_one::<usize>("max-depth").copied();

    apply_overrides(config, &owned_domains, &prefixes, max_depth)
}

pub async fn handle_resolve(args: &ArgMatches) -> Result<()> {
    let config = config_from_args(args)?;
    let source = DocumentSource::from_args(
        args.get_one::<Url>("url"),
        args.get_one::<PathBuf>("file"),
    )?;
    let format_name = args
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");
    let format = ReportFormat::from_str(format_name)
        .with_context(|| format!("Unknown report format '{}'", format_name))?;

    let document = DocumentFetcher::new()?
        .load(&source)
        .await
        .with_context(|| format!("Failed to load {}", source.describe()))?;
    let layout = enhance_layout(&document, &config.resolver())
        .with_context(|| format!("Failed to resolve menus from {}", source.describe()))?;
    let report = generate_report(&layout, format)?;

    match args.get_one::<PathBuf>("output") {
        Some(path) => {
            save_report(&report, path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            eprintln!(
                "{} Report saved to {}",
                "✓".green().bold(),
                path.display().to_string().bright_white()
            );
        }
        None => print!("{}", report),
    }
    Ok(())
}

/// One-line summary of a resolved link.
pub fn format_link(item_type: &str, url: &str, link: &ResolvedLink) -> String {
    let kind = if link.is_external { "external" } else { "internal" };
    format!(
        "{} {} -> {} [target={}, {}]",
        item_type, url, link.to, link.target, kind
    )
}

pub fn handle_route(args: &ArgMatches) -> Result<()> {
    let config = config_from_args(args)?;
    let item_type = args
        .get_one::<String>("type")
        .context("--type is required")?;
    let url = args.get_one::<String>("url").context("--url is required")?;

    let link = config
        .resolver()
        .resolve_link(item_type, url)
        .with_context(|| format!("Cannot resolve '{}'", url))?;
    println!("{}", format_link(item_type, url, &link));
    Ok(())
}

/// Write the default config into `dir`. Refuses to replace an existing
/// file unless `force` is set.
pub fn write_default_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    NavConfig::default().save(&path)?;
    Ok(path)
}

pub fn handle_init(args: &ArgMatches) -> Result<()> {
    let dir = args
        .get_one::<String>("PATH")
        .map(String::as_str)
        .unwrap_or("~/.config/storenav/");
    let force = args.get_flag("force");
    let expanded = shellexpand::tilde(dir);

    let path = write_default_config(Path::new(expanded.as_ref()), force)?;
    println!(
        "{} Configuration written to {}",
        "✓".green().bold(),
        path.display().to_string().bright_white()
    );
    println!(
        "{} Edit ownedDomains to list the hostnames your storefront serves",
        "ℹ".blue()
    );
    Ok(())
}
