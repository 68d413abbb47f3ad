//! Map validated CLI arguments to an action.

use crate::cli::actions::{server::Args, Action};
use crate::cli::commands::{database, ARG_FRONTEND_ORIGIN, ARG_PORT};
use anyhow::Result;

/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let db = database::Options::parse(matches)?;

    Ok(Action::Server(Args {
        port: matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(3000),
        dsn: db.dsn,
        db_max_connections: db.max_connections,
        db_acquire_timeout_seconds: db.acquire_timeout_seconds,
        frontend_origin: matches.get_one::<String>(ARG_FRONTEND_ORIGIN).cloned(),
    }))
}
