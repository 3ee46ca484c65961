//! The section-builder core: media resolution and section dispatch.
//!
//! Every page family runs the same two-stage pipeline over its CMS-authored
//! builder blocks:
//!
//! 1. [`MediaResolver`] walks the block tree and replaces numeric media
//!    references (under an allow-listed field name) with resolved URLs or
//!    media objects, fetched concurrently.
//! 2. [`dispatch`] maps each block's layout tag to a renderer through a
//!    closed [`DispatchTable`], preserving authoring order and computing
//!    grouping ordinals for consecutive image/content sections.
//!
//! The stages are parameterized (field allow-list, not-found default,
//! dispatch table) so each route is a thin configuration of one shared core
//! rather than its own copy.

mod dispatch;
mod resolve;
mod sequence;

pub use dispatch::{DispatchTable, GROUPING_TAG, SectionRenderer, dispatch};
pub use resolve::{MediaResolver, ResolveOptions, ResolvedShape};
pub use sequence::SectionInstruction;
