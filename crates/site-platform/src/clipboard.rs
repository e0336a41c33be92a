//! Best-effort system clipboard writes
//!
//! The clipboard is optional to the page: the command text stays visible
//! whether or not the copy succeeds, so every failure here (no display
//! server, denied permission, unsupported platform) is caught at this
//! boundary, logged, and dropped. Writes are fire-and-forget; a caller that
//! tears down while a write is pending simply abandons the task. Rapid
//! repeated copies are not serialized, the last write the OS observes wins.

use thiserror::Error;
use tokio::task::JoinHandle;

/// Errors from the underlying clipboard backend
///
/// These never cross the best-effort boundary; [`copy_best_effort`] and
/// [`spawn_copy`] consume them and log at `warn`.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard backend could be opened (headless environment, missing
    /// display server, unsupported platform)
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The backend was opened but the write itself failed
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),

    /// The blocking write task was cancelled or panicked before completing
    #[error("Clipboard task did not complete")]
    TaskFailed,
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Write `text` to the system clipboard
///
/// The OS clipboard API is blocking, so the write runs on the blocking
/// thread pool. A fresh backend handle is opened per write; there is no
/// shared clipboard state to lock or poison.
pub async fn write_text(text: String) -> Result<()> {
    tokio::task::spawn_blocking(move || write_text_blocking(&text))
        .await
        .map_err(|_| ClipboardError::TaskFailed)?
}

fn write_text_blocking(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
}

/// Write `text` to the system clipboard, swallowing any failure
///
/// Never returns an error: success is logged at `debug`, failure at `warn`,
/// and the caller proceeds either way. This is the boundary the rest of the
/// page composes against.
pub async fn copy_best_effort(text: String) {
    match write_text(text).await {
        Ok(()) => tracing::debug!("Copied text to clipboard"),
        Err(e) => tracing::warn!("Clipboard write failed (ignored): {}", e),
    }
}

/// Fire-and-forget copy: spawn [`copy_best_effort`] as a detached task
///
/// Must be called from within a tokio runtime. The returned handle may be
/// awaited or dropped; abandoning it abandons nothing but a log line, since
/// a failed write has no side effects to clean up.
pub fn spawn_copy(text: String) -> JoinHandle<()> {
    tokio::spawn(copy_best_effort(text))
}

// =============================================================================
// Tests
// =============================================================================
