pub mod config;
pub mod error;
pub mod layout;
pub mod report;
pub mod source;

pub use config::NavConfig;
pub use error::{CoreError, Result};
pub use layout::{EnhancedLayout, LayoutDocument, enhance_layout, parse_document};
pub use source::{DocumentFetcher, DocumentSource, load_document};

pub fn print_banner() {
    println!(
        r#"
     _
 ___| |_ ___  _ __ ___ _ __   __ ___   __
/ __| __/ _ \| '__/ _ \ '_ \ / _` \ \ / /
\__ \ || (_) | | |  __/ | | | (_| |\ V /
|___/\__\___/|_|  \___|_| |_|\__,_| \_/
                                v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
