use crate::CLAP_STYLING;
use clap::{arg, command};
use url::Url;

fn config_override_args(cmd: clap::Command) -> clap::Command {
    cmd.arg(
        arg!(--"owned-domain" <DOMAIN>)
            .required(false)
            .help("Storefront hostname (repeatable, replaces the configured list)")
            .action(clap::ArgAction::Append),
    )
    .arg(
        arg!(-p --"prefix" <TYPE_EQ_SEGMENT>)
            .required(false)
            .help("Route prefix override such as BLOG=journal or BLOG= (repeatable)")
            .action(clap::ArgAction::Append),
    )
    .arg(
        arg!(--"max-depth" <DEPTH>)
            .required(false)
            .help("Reject menus nested deeper than DEPTH (unbounded by default)")
            .value_parser(clap::value_parser!(usize)),
    )
}

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("storenav")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("storenav")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(
            arg!(-v --"verbose" "Increase log verbosity (-v, -vv, -vvv)")
                .required(false)
                .action(clap::ArgAction::Count),
        )
        .arg(
            arg!(-c --"config" <PATH>)
                .required(false)
                .global(true)
                .help("Config file (default: ~/.config/storenav/config.json if present)")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .subcommand_required(false)
        .subcommand(
            command!("init")
                .about("Writes a default configuration file")
                .arg(
                    arg!([PATH])
                        .required(false)
                        .help("Directory to store the configuration in")
                        .default_value("~/.config/storenav/"),
                )
                .arg(
                    arg!(-f --"force")
                        .help("Overwrite an existing configuration file")
                        .required(false),
                ),
        )
        .subcommand(config_override_args(
            command!("resolve")
                .about("Resolve a storefront layout or menu document into navigable links")
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(false)
                        .help("URL serving the layout or menu JSON")
                        .value_parser(clap::value_parser!(Url))
                        .conflicts_with("file"),
                )
                .arg(
                    arg!(-f --"file" <PATH>)
                        .required(false)
                        .help("Path to a layout or menu JSON file")
                        .value_parser(clap::value_parser!(std::path::PathBuf))
                        .conflicts_with("url"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to file (default: display to screen)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(--"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json, markdown")
                        .value_parser(["text", "json", "markdown"])
                        .default_value("text"),
                ),
        ))
        .subcommand(config_override_args(
            command!("route")
                .about("Resolve a single menu link")
                .arg(
                    arg!(-t --"type" <TYPE>)
                        .required(true)
                        .help("Resource type tag, e.g. PRODUCT, ARTICLE, CATALOG"),
                )
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(true)
                        .help("Absolute URL of the menu item"),
                ),
        ))
}
