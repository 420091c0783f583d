//! Entrypoint configuration from environment variables

use crate::env::EnvExt;
use crate::probe::RetryPolicy;
use std::time::Duration;

pub const DEFAULT_MIGRATION_COMMAND: &str = "alembic upgrade head";

/// Tunables for the bootstrap sequence. All optional, all from env.
#[derive(Debug)]
pub struct Config {
    pub retry: RetryPolicy,
    /// Connect timeout handed to the probe via PGCONNECT_TIMEOUT.
    pub probe_timeout: Duration,
    pub migration_command: String,
    pub skip_migrations: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            retry: RetryPolicy::from_env(),
            probe_timeout: Duration::from_secs(u64::env_parse("DB_PROBE_TIMEOUT", 5)),
            migration_command: String::env_or("MIGRATION_COMMAND", DEFAULT_MIGRATION_COMMAND),
            skip_migrations: bool::env_bool("SKIP_MIGRATIONS", false),
        }
    }
}
