//! Page assembly for the Hoild site engine.
//!
//! Sits between the CMS access layer ([`hoild_wp`]) and the render layer:
//! each route fetches its entity, runs the shared resolver/dispatcher core
//! from [`hoild_builder`] with route-appropriate parameters, and hands back
//! either a document of render instructions or the not-found terminal.

mod assembler;
mod chrome;

pub use assembler::{PageAssembler, PageDocument, PostDocument};
pub use chrome::{MenuNode, SiteChrome, build_menu_tree, load_chrome};
