//! Storage infrastructure: configuration and layout document persistence.
//!
//! This module provides a thin adapter between the application and the
//! file system:
//!
//! - **`config`** reads the TOML editor settings (log level, default grid
//!   size, widget id scheme), falling back to defaults when no file exists.
//! - **`document`** reads and writes dashboard layouts as JSON documents,
//!   validating them on the way in.
//!
//! Keeping storage concerns here, rather than scattered throughout the
//! application, means the file formats can change without touching the
//! editing logic.

pub mod config;
pub mod document;
