mod memory_storage;
mod postgres_storage;
pub mod sea_orm_entity;

pub use memory_storage::InMemoryPortfolioStorage;
pub use postgres_storage::PortfolioStoragePostgres;
