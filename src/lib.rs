//! Lede landing site
//!
//! Workspace root tying the composition layer together:
//!
//! - [`site_ui`] - typed component model and page composition
//! - [`site_platform`] - best-effort system clipboard capability
//!
//! The rendering layer composes the page with
//! [`site_ui::page::LandingPage::compose`] and wires the install block's
//! copy button to [`copy_command`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use site_platform;
pub use site_ui;

use site_ui::components::RenderedCommand;
use tokio::task::JoinHandle;

/// Copy activation for a rendered command block
///
/// Spawns a detached, best-effort write of the block's copy payload to the
/// system clipboard. Failures are logged and swallowed inside the task; the
/// displayed command text remains the user's manual fallback. Must be called
/// from within a tokio runtime.
pub fn copy_command(command: &RenderedCommand) -> JoinHandle<()> {
    site_platform::spawn_copy(command.copy_payload.clone())
}
