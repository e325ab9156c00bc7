//! Diesel schema for performance ledger persistence.

diesel::table! {
    /// Per-employee aggregate performance counters.
    performance_records (id) {
        /// Record identifier.
        id -> Uuid,
        /// Employee the record belongs to.
        employee_id -> Uuid,
        /// Assigned-task counter.
        tasks_assigned -> BigInt,
        /// Completed-task counter.
        tasks_completed -> BigInt,
        /// Optional review rating (1-5).
        rating -> Nullable<SmallInt>,
        /// Optional review feedback.
        feedback -> Nullable<Text>,
        /// English month name of the most recent assignment.
        #[max_length = 20]
        month -> Varchar,
        /// Year of the most recent assignment.
        year -> Integer,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}
