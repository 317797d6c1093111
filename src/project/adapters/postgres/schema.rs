//! Diesel schema for project record persistence.

diesel::table! {
    /// Project records mirrored by the local store.
    projects (id) {
        /// Project identifier.
        id -> Uuid,
        /// Project name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional description.
        description -> Nullable<Text>,
        /// Accent colour in hex notation.
        #[max_length = 7]
        color -> Varchar,
        /// Optional creating user.
        user_id -> Nullable<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
