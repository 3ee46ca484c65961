//! WordPress REST API access for the Hoild site engine.
//!
//! Provides the [`ContentSource`] trait abstracting CMS reads, the
//! [`WpClient`] HTTP implementation and (behind the `mock` feature) an
//! in-memory [`MockSource`] for tests.
//!
//! # Failure policy
//!
//! Reads come in two flavors:
//! - entity/media lookups return `Result<Option<_>, WpError>`; a missing
//!   entity and an HTTP error status both collapse to `Ok(None)` at the call
//!   site boundary, matching the "absent, not broken" contract,
//! - chrome reads (menu, header/footer options and widgets) are best-effort
//!   and return empty values on any failure, never an error.

mod client;
mod error;
#[cfg(feature = "mock")]
mod mock;
mod source;
mod types;

pub use client::WpClient;
pub use error::WpError;
#[cfg(feature = "mock")]
pub use mock::MockSource;
pub use source::ContentSource;
pub use types::{Entity, MediaObject, MenuItem, Rendered};
