//! HTTP request handlers.

pub(crate) mod chrome;
pub(crate) mod pages;
pub(crate) mod posts;
