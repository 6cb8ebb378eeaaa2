//! Process signals that start a graceful drain.

use std::future::Future;

/// The signal that ended the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT / ctrl-c.
    Interrupt,
    /// SIGTERM, as sent by orchestrators stopping a container.
    Terminate,
}

/// Install the shutdown handlers and return a future resolving with the
/// first signal received.
///
/// SIGTERM is registered before this returns, so a signal delivered any time
/// afterwards is caught. Must be called from within a tokio runtime.
pub fn listen() -> std::io::Result<impl Future<Output = ShutdownSignal> + Send + 'static> {
    #[cfg(unix)]
    let mut terminate =
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;

    Ok(async move {
        let interrupt = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async move {
            if terminate.recv().await.is_none() {
                std::future::pending::<()>().await;
            }
        };
        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        let signal = tokio::select! {
            () = interrupt => ShutdownSignal::Interrupt,
            () = terminate => ShutdownSignal::Terminate,
        };
        tracing::info!(?signal, "shutdown signal received");
        signal
    })
}
