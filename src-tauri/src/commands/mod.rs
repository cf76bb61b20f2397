//! Tauri IPC Commands
//!
//! The command bridge between the untrusted webview and the Rust host.
//! The catalog is fixed at compile time; every handler normalizes its
//! collaborator's failures into the operation family's outcome shape
//! and never lets a raw error object cross the boundary.

pub mod auth;
pub mod export;
pub mod news;
pub mod snapshots;
