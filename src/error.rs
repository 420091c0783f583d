//! Bootstrap error taxonomy
//!
//! Every failure here is fatal. The only distinction that matters at the
//! process boundary is the exit code: a failed migration propagates the
//! migration tool's own code, everything else exits 1.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(
        "no database configuration: set DATABASE_URL or the complete \
         POSTGRESQL_HOST/POSTGRESQL_USER/POSTGRESQL_PASSWORD/POSTGRESQL_DBNAME set"
    )]
    MissingConfig,

    #[error("invalid database connection parameters: {0}")]
    InvalidConfig(String),

    #[error("database at {endpoint} unreachable after {attempts} attempts")]
    Unreachable { endpoint: String, attempts: u32 },

    #[error("MIGRATION_COMMAND is empty")]
    EmptyMigrationCommand,

    #[error("failed to run migration command `{command}`: {source}")]
    MigrationSpawn {
        command: String,
        source: std::io::Error,
    },

    #[error("migration command `{command}` exited with code {code}")]
    MigrationFailed { command: String, code: i32 },

    #[error("no application command given after the entrypoint arguments")]
    MissingAppCommand,

    #[error("failed to exec `{command}`: {source}")]
    ExecFailed {
        command: String,
        source: std::io::Error,
    },
}

impl BootstrapError {
    /// Exit code for the process when this error aborts the bootstrap.
    pub fn exit_code(&self) -> i32 {
        match self {
            BootstrapError::MigrationFailed { code, .. } => *code,
            _ => 1,
        }
    }
}
