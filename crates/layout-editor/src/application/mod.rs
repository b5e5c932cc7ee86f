//! Application layer use cases for the headless layout editor.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure business rules, here the `layout-core` crate) and the infrastructure
//! (files, terminals, configuration).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain objects to fulfil a user goal (e.g., "apply this
//!   list of keystrokes to a dashboard").
//! - **Depend on abstractions** such as `WidgetIdSource` rather than a concrete
//!   id scheme, so tests can use predictable ids.
//! - **Contain no file system access**.  Scripts arrive as text and results
//!   leave as values.
//!
//! # Sub-modules
//!
//! - **`script`** – Parses an edit script (one keystroke or command per line)
//!   into a list of [`script::ScriptStep`]s.
//!
//! - **`replay`** – Runs steps against a layout one after another, counting
//!   the edits that were rejected and stopping at the first hard error.

pub mod replay;
pub mod script;
