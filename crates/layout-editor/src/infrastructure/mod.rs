//! Infrastructure layer for the layout editor.
//!
//! Contains file-system adapters: the TOML configuration file and the JSON
//! layout documents the editor reads and writes.
//!
//! **Dependency rule**: this layer may depend on `application` and `layout_core`,
//! but MUST NOT be imported by the `application` layer or by `layout_core`.

pub mod storage;
