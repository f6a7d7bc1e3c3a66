//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and optional decoration.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite repository implementations
//! - [`qr`] - QR code rendering for short links (optional capability)

pub mod persistence;
pub mod qr;
