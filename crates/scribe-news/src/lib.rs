//! Scribe News Proxy
//!
//! Outbound search and image-fetch calls on behalf of the untrusted UI.
//! Every failure is classified into a [`NewsError`] variant; nothing in
//! this crate panics across the call boundary.

mod client;
mod error;

pub use client::{Article, ArticleSource, NewsClient};
pub use error::NewsError;

pub type Result<T> = std::result::Result<T, NewsError>;
