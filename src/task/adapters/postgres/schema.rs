//! Diesel schema for task lifecycle persistence.

diesel::table! {
    /// Task records with assignment references.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Task description.
        description -> Text,
        /// Employee the task is assigned to.
        assigned_to -> Uuid,
        /// Employer who assigned the task.
        assigned_by -> Uuid,
        /// Task status.
        #[max_length = 50]
        status -> Varchar,
        /// Due date.
        due_date -> Timestamptz,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Completion timestamp, set while the status is completed.
        completed_at -> Nullable<Timestamptz>,
    }
}
