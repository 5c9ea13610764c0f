mod portfolio_storage;

pub use portfolio_storage::{PortfolioStorage, PortfolioStorageError};
