//! Processing backends
//!
//! A backend turns a processing request into a [`ProcessResult`]. Only the
//! mock backend exists; it hands back the canned fixtures.

pub mod mock;

pub use mock::MockBackend;

use crate::models::ProcessResult;

pub trait ResultSource: Send + Sync {
    /// Name reported in log lines.
    fn name(&self) -> &str;

    fn produce(&self) -> ProcessResult;
}
