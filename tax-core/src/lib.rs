pub mod calculations;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod source;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use config::EngineConfig;
pub use engine::TaxEngine;
pub use error::{BracketTableError, TaxError};
pub use models::*;
pub use source::RateTableSource;
