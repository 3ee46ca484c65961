//! Application state.
//!
//! Shared state for all request handlers.

use hoild_site::PageAssembler;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Route-level page assembly over the CMS source.
    pub(crate) assembler: PageAssembler,
    /// Application version, echoed in responses.
    pub(crate) version: String,
}
