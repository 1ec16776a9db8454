//! `songlink` - media source resolution for songbook pages.
//!
//! This crate turns the "media source" links attached to song records
//! (`YouTube`, `RuTube`, VK, Google Drive, Dropbox or plain files) into
//! structured player descriptors for a presentation layer to render.

// Re-export public modules for use in integration tests and as a library
pub mod config;
pub mod constants;
pub mod error;
pub mod player;
pub mod sources;
