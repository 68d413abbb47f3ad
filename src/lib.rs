//! # Sisu (credential and profile API)
//!
//! `sisu` is a small HTTP service for account creation, credential
//! verification, a password-reset stub, and profile read/rename.
//!
//! ## Layers
//!
//! - **Router (`api`):** maps verb + path to a service call and translates the
//!   outcome into a status code and a `{"message": ...}` body.
//! - **Services (`service`):** `AuthService` and `ProfileService` perform presence
//!   checks and map store outcomes to the error taxonomy.
//! - **Store (`store`):** `UserStore` executes exactly the requested read or write
//!   and reports row-level outcomes. Username uniqueness is enforced here and is
//!   the only conflict signal for signup.
//!
//! Passwords are stored and compared verbatim, and no session or token is
//! issued on signin.

pub mod api;
pub mod cli;
pub mod service;
pub mod store;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
