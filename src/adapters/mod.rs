// Adapters layer: concrete implementations for external systems.

pub mod comtrade;
pub mod firms;
pub mod sample;

pub use comtrade::ComtradeClient;
pub use firms::FirmCatalog;
