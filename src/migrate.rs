//! Migration command runner
//!
//! Runs the external schema-migration tool once the database is reachable.
//! The tool reads DATABASE_URL from the environment; its stdout/stderr are
//! inherited so migration output lands in the container log.

use crate::error::BootstrapError;
use std::process::Stdio;
use tokio::process::Command;
use tracing::info;

/// Split a migration command line on whitespace.
pub fn parse_command(raw: &str) -> Result<Vec<String>, BootstrapError> {
    let argv: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
    if argv.is_empty() {
        return Err(BootstrapError::EmptyMigrationCommand);
    }
    Ok(argv)
}

/// Run the migration command synchronously and propagate its failure.
pub async fn run_migrations(raw: &str) -> Result<(), BootstrapError> {
    let argv = parse_command(raw)?;

    info!(command = %raw, "Running migrations");

    let status = Command::new(&argv[0])
        .args(&argv[1..])
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|source| BootstrapError::MigrationSpawn {
            command: raw.to_string(),
            source,
        })?;

    if status.success() {
        info!("Migrations applied");
        Ok(())
    } else {
        Err(BootstrapError::MigrationFailed {
            command: raw.to_string(),
            // killed by signal: no code, treat as generic failure
            code: status.code().unwrap_or(1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_command_on_whitespace() {
        let argv = parse_command("alembic  upgrade head").unwrap();
        assert_eq!(argv, vec!["alembic", "upgrade", "head"]);
    }

    #[test]
    fn rejects_blank_command() {
        assert!(matches!(
            parse_command("   "),
            Err(BootstrapError::EmptyMigrationCommand)
        ));
    }

    #[tokio::test]
    async fn succeeds_when_tool_exits_zero() {
        run_migrations("true").await.unwrap();
    }

    #[tokio::test]
    async fn propagates_tool_exit_code() {
        let err = run_migrations("sh -c exit_is_not_a_command").await.unwrap_err();
        match err {
            BootstrapError::MigrationFailed { code, .. } => assert_eq!(code, 127),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn reports_spawn_failure_distinctly() {
        let err = run_migrations("definitely-not-a-real-binary")
            .await
            .unwrap_err();
        assert!(matches!(err, BootstrapError::MigrationSpawn { .. }));
    }
}
