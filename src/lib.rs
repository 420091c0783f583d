//! Container entrypoint for PostgreSQL-backed applications
//!
//! Resolves the database connection URL from the environment, waits for the
//! database to accept connections, runs the schema-migration tool, then
//! execs the application process so signals and exit codes pass through
//! untouched.

pub mod command;
pub mod config;
pub mod database;
pub mod env;
pub mod error;
pub mod logging;
pub mod migrate;
pub mod probe;

pub use config::Config;
pub use database::{endpoint_label, resolve_url, DbParams};
pub use env::EnvExt;
pub use error::BootstrapError;
pub use logging::init_logging;
pub use migrate::run_migrations;
pub use probe::{wait_for_database, RetryPolicy};
