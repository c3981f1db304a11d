pub mod aggregate;
pub mod resolver;

pub use crate::domain::model::{
    FavoriteEntry, Provenance, QueryKind, QueryRequest, ResultSet, Rows, Session,
};
pub use crate::domain::ports::{ConfigProvider, FirmSource, TradeQuery, TradeSource};
pub use crate::utils::error::Result;
pub use resolver::QueryResolver;
