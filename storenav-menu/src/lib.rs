pub mod domain;
pub mod error;
pub mod item;
pub mod prefixes;
pub mod resolver;
pub mod route;

pub use domain::{DEFAULT_OWNED_DOMAIN, DomainPolicy, OwnedDomains};
pub use error::{MenuError, Result};
pub use item::{EnhancedMenu, EnhancedMenuItem, LinkTarget, Menu, MenuItem};
pub use prefixes::RoutePrefixes;
pub use resolver::{MenuResolver, ResolvedLink, enhance_menu};
pub use route::{path_segments, resolve_to_from_type};
