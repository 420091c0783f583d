//! Subprocess execution utilities
//!
//! Thin wrappers around `tokio::process::Command` with consistent error
//! handling and logging.

use anyhow::{Context, Result};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, instrument};

/// Result of a command execution with captured output.
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

/// Run a command, capturing stdout and stderr.
///
/// Extra environment variables are applied on top of the inherited
/// environment. Spawn failure is an `Err`; a non-zero exit is reported
/// through `CommandOutput`, not as an error.
#[instrument(skip_all, fields(cmd = %cmd))]
pub async fn run(cmd: &str, args: &[&str], envs: &[(&str, &str)]) -> Result<CommandOutput> {
    debug!(args = ?args, "Running command");

    let output = Command::new(cmd)
        .args(args)
        .envs(envs.iter().copied())
        .stdin(Stdio::null())
        .output()
        .await
        .context(format!("Failed to execute {}", cmd))?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        success: output.status.success(),
        code: output.status.code(),
    })
}

/// Probe the database with psql - returns Ok(true) if it answered the
/// round-trip query, Ok(false) if it refused or timed out.
///
/// Distinguishes spawn errors (Err, psql not installed) from an
/// endpoint that is not ready yet (Ok(false)). The connect timeout is
/// enforced by psql itself via PGCONNECT_TIMEOUT.
pub async fn psql_probe(url: &str, connect_timeout_secs: u64) -> Result<bool> {
    let timeout = connect_timeout_secs.to_string();
    let output = run(
        "psql",
        &[url, "-X", "-A", "-t", "-c", "select 1"],
        &[("PGCONNECT_TIMEOUT", timeout.as_str())],
    )
    .await?;

    if !output.success {
        debug!(stderr = %output.stderr, "Probe query failed");
    }

    Ok(output.success && output.stdout == "1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn run_captures_output_and_status() {
        let output = run("sh", &["-c", "echo ready"], &[]).await.unwrap();
        assert!(output.success);
        assert_eq!(output.stdout, "ready");
        assert_eq!(output.code, Some(0));
    }

    #[tokio::test]
    async fn run_reports_nonzero_exit_without_error() {
        let output = run("sh", &["-c", "exit 4"], &[]).await.unwrap();
        assert!(!output.success);
        assert_eq!(output.code, Some(4));
    }

    #[tokio::test]
    async fn run_passes_extra_environment() {
        let output = run("sh", &["-c", "printf %s \"$PROBE_VAR\""], &[("PROBE_VAR", "42")])
            .await
            .unwrap();
        assert_eq!(output.stdout, "42");
    }

    #[tokio::test]
    async fn run_errors_when_command_missing() {
        assert!(run("definitely-not-a-real-binary", &[], &[]).await.is_err());
    }
}
