//! `PostgreSQL` adapters for account directory persistence.

mod models;
mod repository;
mod schema;

pub use repository::{AccountPgPool, PostgresAccountRepository};
