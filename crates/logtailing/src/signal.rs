//! Signal-linked cancellation
//!
//! Links one session's cancellation scope to process interrupt signals. The
//! scope is the single source of truth the dispatch loop observes; cleanup
//! runs exactly once no matter which path (signal, explicit cancel, parent
//! cancellation) cancels first.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Cleanup closure slot, taken by whichever trigger path wins
type Cleanup = Arc<Mutex<Option<Box<dyn FnOnce() + Send>>>>;

/// Derive a cancellation scope linked to Ctrl+C / SIGTERM
///
/// Returns the scope and an idempotent cancel function. On the first
/// trigger, `on_cancel` runs once and the scope is cancelled; further
/// triggers have no effect. Cancelling `parent` cancels the scope too.
///
/// The listener task lives until it fires; for a session that ends the
/// process either way, that is acceptable.
pub fn with_interrupt_cancel<F>(
    parent: &CancellationToken,
    on_cancel: F,
) -> (CancellationToken, impl Fn() + Clone + Send)
where
    F: FnOnce() + Send + 'static,
{
    let scope = parent.child_token();
    let cleanup: Cleanup = Arc::new(Mutex::new(Some(Box::new(on_cancel))));

    let listener_scope = scope.clone();
    let listener_cleanup = Arc::clone(&cleanup);
    tokio::spawn(async move {
        tokio::select! {
            _ = interrupt() => {}
            _ = listener_scope.cancelled() => {}
        }
        run_cleanup(&listener_cleanup);
        listener_scope.cancel();
    });

    let cancel_scope = scope.clone();
    let cancel_fn = move || {
        run_cleanup(&cleanup);
        cancel_scope.cancel();
    };

    (scope, cancel_fn)
}

/// Wait for Ctrl+C or SIGTERM, whichever arrives first
async fn interrupt() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}

fn run_cleanup(cleanup: &Cleanup) {
    if let Some(f) = cleanup.lock().take() {
        f();
    }
}

#[cfg(test)]
#[path = "signal_test.rs"]
mod tests;
