//! Serve until interrupted, then drain within a fixed budget.
//!
//! The server is built with OS signal handling disabled so this module owns
//! the shutdown sequence: wait for the signal, ask Actix to stop gracefully,
//! and give up if in-flight requests have not finished within
//! [`SHUTDOWN_DRAIN_BUDGET`].

use std::future::Future;
use std::io;
use std::time::Duration;

use actix_web::dev::Server;
use tracing::{error, info};

/// Maximum time allowed for in-flight requests to finish after a shutdown
/// signal.
pub const SHUTDOWN_DRAIN_BUDGET: Duration = Duration::from_secs(5);

/// Allowance after which Actix force-stops its workers. Must exceed
/// [`SHUTDOWN_DRAIN_BUDGET`] so an overrun surfaces as
/// [`ShutdownError::DrainTimedOut`].
pub const WORKER_SHUTDOWN_TIMEOUT: Duration =
    Duration::from_secs(SHUTDOWN_DRAIN_BUDGET.as_secs() + 1);

/// Shutdown failures that end the process with a non-zero status.
#[derive(Debug, thiserror::Error)]
pub enum ShutdownError {
    /// The server stopped on its own with an I/O error.
    #[error("server terminated unexpectedly: {0}")]
    Server(#[from] io::Error),
    /// The interrupt listener failed; the server was stopped anyway.
    #[error("failed to listen for shutdown signal: {0}")]
    Signal(#[source] io::Error),
    /// In-flight requests did not drain within the budget.
    #[error("graceful shutdown did not complete within {budget:?}")]
    DrainTimedOut { budget: Duration },
}

/// Drive `server` until `signal` resolves, then drain within
/// [`SHUTDOWN_DRAIN_BUDGET`].
///
/// # Errors
/// Returns [`ShutdownError::DrainTimedOut`] when draining exceeds the budget,
/// [`ShutdownError::Server`] when the server fails before the signal, and
/// [`ShutdownError::Signal`] when the signal listener itself fails.
pub async fn run_until_interrupt<S>(server: Server, signal: S) -> Result<(), ShutdownError>
where
    S: Future<Output = io::Result<()>>,
{
    run_with_budget(server, signal, SHUTDOWN_DRAIN_BUDGET).await
}

async fn run_with_budget<S>(
    server: Server,
    signal: S,
    budget: Duration,
) -> Result<(), ShutdownError>
where
    S: Future<Output = io::Result<()>>,
{
    let handle = server.handle();
    tokio::pin!(server);
    info!(state = "serving", "server lifecycle");

    tokio::select! {
        outcome = &mut server => {
            info!(state = "stopped", "server lifecycle");
            return outcome.map_err(ShutdownError::from);
        }
        received = signal => {
            if let Err(err) = received {
                error!(error = %err, "failed to listen for shutdown signal; stopping");
                handle.stop(false).await;
                return Err(ShutdownError::Signal(err));
            }
        }
    }

    info!(state = "draining", budget_ms = budget.as_millis() as u64, "server lifecycle");
    let drain = async {
        handle.stop(true).await;
        server.await
    };
    match tokio::time::timeout(budget, drain).await {
        Ok(outcome) => {
            outcome?;
            info!(state = "stopped", "server lifecycle");
            Ok(())
        }
        Err(_) => {
            error!(budget_ms = budget.as_millis() as u64, "graceful shutdown timed out");
            Err(ShutdownError::DrainTimedOut { budget })
        }
    }
}
