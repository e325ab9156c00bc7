//! Application services for the account directory.

mod directory;

pub use directory::{
    AccountDirectoryError, AccountDirectoryResult, AccountDirectoryService, AuthSession,
    RegisterAccountRequest,
};
