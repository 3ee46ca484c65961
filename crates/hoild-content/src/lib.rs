//! Content model for the Hoild site engine.
//!
//! CMS entities carry a flexible-content "builder" field: an ordered list of
//! blocks, each tagged with a layout name that decides which section renders
//! it. This crate holds the types shared by the resolver, dispatcher and
//! assembler: [`ContentBlock`], [`BuilderKind`] and [`MediaFields`].

mod block;
mod media_fields;

pub use block::{BuilderKind, ContentBlock, blocks_from_value};
pub use media_fields::MediaFields;
