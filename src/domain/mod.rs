//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`codec`] - Reversible base62 mapping between identities and short codes
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Request Flow
//!
//! 1. `POST /shorten` calls [`repositories::UrlRepository::get_or_create`]
//! 2. The returned identity is turned into a code with [`codec::encode_id`]
//! 3. `GET /{code}` reverses it with [`codec::decode_id`]
//! 4. [`repositories::UrlRepository::resolve_and_touch`] bumps the click counter
//!    and returns the destination in one statement

pub mod codec;
pub mod entities;
pub mod repositories;
