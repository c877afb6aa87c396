pub mod audio;
pub mod auth;
pub mod observability;
pub mod store;
