//! In-memory adapters for account directory tests.

mod account;

pub use account::InMemoryAccountRepository;
