//! Adapter implementations for account directory ports.

pub mod jwt;
pub mod memory;
pub mod postgres;
