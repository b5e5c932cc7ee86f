//! Sources of fresh widget instance ids.
//!
//! Creating a widget needs a new, unique id.  Which id scheme is right depends
//! on the caller: a dashboard stored on disk wants random ids, a scripted test
//! wants predictable ones.  The [`WidgetIdSource`] trait is passed explicitly
//! to the command dispatcher, so there is no process-wide id registry.

use uuid::Uuid;

use crate::domain::cell::WidgetInstanceId;
use crate::domain::layout::{LayoutEditorState, LayoutError};

/// Hands out widget instance ids for newly created widgets.
#[cfg_attr(test, mockall::automock)]
pub trait WidgetIdSource {
    /// Returns the next unused id.
    ///
    /// # Errors
    ///
    /// Implementations return [`LayoutError::InvalidWidgetId`] if they cannot
    /// produce a usable id.
    fn next_id(&mut self) -> Result<WidgetInstanceId, LayoutError>;
}

/// Random ids from UUID v4, in the 32-digit simple hex form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidWidgetIds;

impl WidgetIdSource for UuidWidgetIds {
    fn next_id(&mut self) -> Result<WidgetInstanceId, LayoutError> {
        WidgetInstanceId::new(Uuid::new_v4().simple().to_string())
    }
}

/// Predictable ids `prefix-1`, `prefix-2`, …
#[derive(Debug, Clone)]
pub struct SequentialWidgetIds {
    prefix: String,
    issued: u64,
}

impl SequentialWidgetIds {
    /// Creates a source whose first id is `{prefix}-1`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            issued: 0,
        }
    }

    /// Creates a source whose first id follows the highest `{prefix}-N`
    /// already placed in `state`.
    pub fn continuing(prefix: impl Into<String>, state: &LayoutEditorState) -> Self {
        let prefix = prefix.into();
        let issued = state
            .widget_ids()
            .into_iter()
            .filter_map(|id| sequence_number(&prefix, id.as_str()))
            .max()
            .unwrap_or(0);
        Self { prefix, issued }
    }

    /// Sequence number of the last id handed out (0 before the first).
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

impl WidgetIdSource for SequentialWidgetIds {
    fn next_id(&mut self) -> Result<WidgetInstanceId, LayoutError> {
        self.issued += 1;
        WidgetInstanceId::new(format!("{}-{}", self.prefix, self.issued))
    }
}

/// Parses `N` out of `{prefix}-N`.
fn sequence_number(prefix: &str, id: &str) -> Option<u64> {
    id.strip_prefix(prefix)?.strip_prefix('-')?.parse().ok()
}
