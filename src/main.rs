//! Bootstrap sequence: resolve URL, wait for the database, migrate, exec.
//!
//! Usage (container ENTRYPOINT): `pg-entrypoint <app-command> [args...]`
//! Everything after the binary name is exec'd once migrations succeed.

use pg_entrypoint::{
    command, endpoint_label, init_logging, resolve_url, run_migrations, wait_for_database,
    BootstrapError, Config, DbParams,
};
use std::env;
use std::os::unix::process::CommandExt;
use std::process::Command;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        error!(error = %e, "Bootstrap failed");
        std::process::exit(e.exit_code());
    }
}

async fn run() -> Result<(), BootstrapError> {
    let config = Config::from_env();

    let app_command: Vec<String> = env::args().skip(1).collect();
    if app_command.is_empty() {
        return Err(BootstrapError::MissingAppCommand);
    }

    let url = resolve_url(&DbParams::from_env())?;
    let endpoint = endpoint_label(&url);

    // The migration tool and the application both read DATABASE_URL, so the
    // resolved form has to be in the environment before either starts.
    env::set_var("DATABASE_URL", &url);

    info!(
        endpoint = %endpoint,
        max_attempts = config.retry.max_attempts,
        delay = ?config.retry.delay,
        "Waiting for database"
    );

    let probe_timeout = config.probe_timeout.as_secs();
    wait_for_database(&config.retry, &endpoint, || {
        let url = url.clone();
        async move { command::psql_probe(&url, probe_timeout).await.unwrap_or(false) }
    })
    .await?;

    if config.skip_migrations {
        info!("SKIP_MIGRATIONS set, skipping migration step");
    } else {
        run_migrations(&config.migration_command).await?;
    }

    exec_app(&app_command)
}

/// Replace this process with the application. Only returns on failure.
fn exec_app(app_command: &[String]) -> Result<(), BootstrapError> {
    info!(command = %app_command.join(" "), "Handing off to application");

    let err = Command::new(&app_command[0]).args(&app_command[1..]).exec();

    Err(BootstrapError::ExecFailed {
        command: app_command.join(" "),
        source: err,
    })
}
