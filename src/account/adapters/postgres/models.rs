//! Diesel row models for account persistence.

use super::schema::accounts;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for account records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AccountRow {
    /// Account identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Normalized email address.
    pub email: String,
    /// Argon2id PHC password hash.
    pub password_hash: String,
    /// Account role.
    pub role: String,
    /// Optional department.
    pub department: Option<String>,
    /// Optional position.
    pub position: Option<String>,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for account records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
pub struct NewAccountRow {
    /// Account identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Normalized email address.
    pub email: String,
    /// Argon2id PHC password hash.
    pub password_hash: String,
    /// Account role.
    pub role: String,
    /// Optional department.
    pub department: Option<String>,
    /// Optional position.
    pub position: Option<String>,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}
