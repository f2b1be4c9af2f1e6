//! Graceful shutdown handling.

/// Stops the status server task, if one was started, and waits for it.
pub async fn shutdown_gracefully(status_task: Option<tokio::task::JoinHandle<()>>) {
    if let Some(task) = status_task {
        task.abort();
        // Cancelled is the expected outcome
        let _ = task.await;
    }
}
