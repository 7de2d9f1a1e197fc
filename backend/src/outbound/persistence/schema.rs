//! Diesel schema for the credential store.

diesel::table! {
    users (id) {
        id -> Uuid,
        username -> Varchar,
        password_hash -> Varchar,
        created_at -> Timestamptz,
    }
}
