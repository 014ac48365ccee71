use storenav_menu::MenuError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Menu error: {0}")]
    Menu(#[from] MenuError),

    #[error("Missing header menu")]
    MissingHeaderMenu,

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
