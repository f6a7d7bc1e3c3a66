//! Core domain entities.
//!
//! Entities are plain data structures without persistence concerns; the
//! storage row types live next to their repository implementations.
//!
//! - [`UrlRecord`] - A shortened URL with its click counter

pub mod url_record;

pub use url_record::UrlRecord;
