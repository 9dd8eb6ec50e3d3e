//! Cancellable generation task handle.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Handle to an in-flight simulated generation.
///
/// The state machine never requires cancellation today (a generation
/// normally runs to completion), but the handle carries a cancel
/// operation so that swapping the simulated delay for a real
/// asynchronous backend call stays a body replacement, not a redesign.
#[derive(Debug)]
pub struct GenerationTask {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl GenerationTask {
    pub(crate) fn new(token: CancellationToken, handle: JoinHandle<()>) -> Self {
        Self { token, handle }
    }

    /// Requests cancellation. The task aborts the pending generation and
    /// returns the engine to idle without appending a reply.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the task has run to completion (or finished cancelling).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the task to settle.
    pub async fn join(self) {
        // A cancelled task still exits normally; a panic inside the task
        // is not propagated to the caller.
        let _ = self.handle.await;
    }
}
