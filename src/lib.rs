pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod export;
pub mod store;
pub mod utils;

pub use adapters::{ComtradeClient, FirmCatalog};
pub use config::{credentials::Credentials, CliConfig};
pub use core::{QueryResolver, ResultSet, Session};
pub use store::FavoritesStore;
pub use utils::error::{Result, TradeError};
