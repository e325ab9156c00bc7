//! Diesel schema for account directory persistence.

diesel::table! {
    /// Registered account records.
    accounts (id) {
        /// Account identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Normalized email address (unique).
        #[max_length = 255]
        email -> Varchar,
        /// Argon2id PHC password hash.
        #[max_length = 255]
        password_hash -> Varchar,
        /// Account role.
        #[max_length = 50]
        role -> Varchar,
        /// Optional department.
        #[max_length = 255]
        department -> Nullable<Varchar>,
        /// Optional position.
        #[max_length = 255]
        position -> Nullable<Varchar>,
        /// Registration timestamp.
        created_at -> Timestamptz,
    }
}
