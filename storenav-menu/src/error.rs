use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("Invalid menu: menu has no items")]
    InvalidMenu,

    #[error("Invalid menu item {id}: {reason}")]
    InvalidMenuItem { id: String, reason: String },

    #[error("Cyclic menu: item {id} appears inside itself")]
    CyclicMenu { id: String },

    #[error("Menu nesting exceeds the maximum depth of {max_depth}")]
    MenuTooDeep { max_depth: usize },
}

pub type Result<T> = std::result::Result<T, MenuError>;
