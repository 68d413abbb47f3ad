//! API handlers.
//!
//! Handlers only unpack the request, call a service and pick the success
//! status; validation and error mapping live in the services.

pub mod auth;
pub mod health;
pub mod profile;
pub mod root;
pub mod types;
