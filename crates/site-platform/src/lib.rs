//! Platform capabilities for the Lede landing page
//!
//! This crate wraps the OS facilities the page touches. There is exactly
//! one: a best-effort asynchronous write to the system clipboard, used by
//! the install command block's copy button.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clipboard;

pub use clipboard::{copy_best_effort, spawn_copy, write_text, ClipboardError};
