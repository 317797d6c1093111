//! Diesel schema for task record persistence.

diesel::table! {
    /// Task records mirrored by the local store.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        title -> Text,
        /// Board status.
        #[max_length = 50]
        status -> Varchar,
        /// Task priority.
        #[max_length = 50]
        priority -> Varchar,
        /// Optional owning project.
        project_id -> Nullable<Uuid>,
        /// Optional due date.
        due_date -> Nullable<Date>,
        /// Optional description.
        description -> Nullable<Text>,
        /// Optional assignee.
        assignee -> Nullable<Text>,
        /// Optional creating user.
        user_id -> Nullable<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
