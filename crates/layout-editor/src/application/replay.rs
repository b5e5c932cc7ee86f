//! ReplayUseCase: runs a sequence of edit steps against a layout.
//!
//! Each [`ScriptStep`] is resolved into an [`EditorCommand`] (keystrokes go
//! through [`KeyMapper`] against the state *at that moment*, so `Alt+ArrowUp`
//! moves a widget only if the cursor is on one) and applied with
//! [`apply_command`].
//!
//! # Rejected edits vs. errors (for beginners)
//!
//! Interactive editing produces plenty of edits that simply do nothing:
//! pushing a widget into a wall, pressing `Delete` on an empty cell.  Those
//! are counted in [`ReplaySummary::unchanged`] and the replay carries on.
//!
//! A [`LayoutError`] is different: it means the step itself was invalid
//! (e.g. `grid 0 5`).  The replay stops there and reports which step failed.

use layout_core::{
    apply_command, EditorCommand, KeyMapper, LayoutEditorState, LayoutError, WidgetIdSource,
};
use thiserror::Error;
use tracing::{debug, info};

use super::script::ScriptStep;

/// Error type for replay.
#[derive(Debug, Error, PartialEq)]
pub enum ReplayError {
    /// Step `step` (1-based) failed with a structural layout error.
    #[error("step {step} ({action}) failed: {source}")]
    StepFailed {
        step: usize,
        action: String,
        #[source]
        source: LayoutError,
    },
}

/// Statistics about a finished replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Number of steps processed.
    pub steps: usize,
    /// Steps that left the state unchanged (rejected, no-op, or unbound keys).
    pub unchanged: usize,
}

impl ReplaySummary {
    /// Steps that changed the layout or the cursor.
    pub fn changed(&self) -> usize {
        self.steps - self.unchanged
    }
}

/// Resolves one step into a command; `None` for keys without a binding.
pub fn resolve_step(step: &ScriptStep, state: &LayoutEditorState) -> Option<EditorCommand> {
    match step {
        ScriptStep::Key(keystroke) => KeyMapper::translate(keystroke, state),
        ScriptStep::Command(command) => Some(command.clone()),
    }
}

/// Applies `steps` to `initial` in order.
///
/// # Errors
///
/// Returns [`ReplayError::StepFailed`] for the first step whose command
/// fails; no later steps are run.
pub fn replay(
    initial: LayoutEditorState,
    steps: &[ScriptStep],
    ids: &mut dyn WidgetIdSource,
) -> Result<(LayoutEditorState, ReplaySummary), ReplayError> {
    let mut state = initial;
    let mut summary = ReplaySummary::default();

    for (index, step) in steps.iter().enumerate() {
        let number = index + 1;
        summary.steps += 1;

        let Some(command) = resolve_step(step, &state) else {
            debug!(step = number, action = %step, "no command bound");
            summary.unchanged += 1;
            continue;
        };

        let next = apply_command(&state, &command, ids).map_err(|source| {
            ReplayError::StepFailed {
                step: number,
                action: step.to_string(),
                source,
            }
        })?;

        if next == state {
            debug!(step = number, command = %command, "step left the layout unchanged");
            summary.unchanged += 1;
        } else {
            debug!(step = number, command = %command, selection = %next.selection(), "step applied");
        }
        state = next;
    }

    info!(
        steps = summary.steps,
        unchanged = summary.unchanged,
        widgets = state.widget_ids().len(),
        "replay finished"
    );
    Ok((state, summary))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::script::parse_script;
    use layout_core::{Coordinate, SequentialWidgetIds};

    fn run(
        state: LayoutEditorState,
        script: &str,
    ) -> Result<(LayoutEditorState, ReplaySummary), ReplayError> {
        let steps = parse_script(script).unwrap();
        let mut ids = SequentialWidgetIds::new("w");
        replay(state, &steps, &mut ids)
    }

    #[test]
    fn test_replay_applies_steps_in_order() {
        // Arrange
        let state = LayoutEditorState::blank(3, 2).unwrap();

        // Act
        let (state, summary) = run(state, "Enter\nShift+Alt+KeyL\nAlt+KeyJ").unwrap();

        // Assert
        assert_eq!(state.to_string(), ". . .\nw-1 w-1 .");
        assert_eq!(summary, ReplaySummary { steps: 3, unchanged: 0 });
    }

    #[test]
    fn test_replay_counts_rejected_and_unbound_steps() {
        let state = LayoutEditorState::blank(2, 2).unwrap();

        // Delete on an empty cell has no binding; moving up leaves the grid;
        // the second Enter lands on an occupied cell.
        let (state, summary) = run(state, "Delete\nEnter\nAlt+ArrowUp\nEnter").unwrap();

        assert_eq!(state.to_string(), "w-1 .\n. .");
        assert_eq!(summary.steps, 4);
        assert_eq!(summary.unchanged, 3);
        assert_eq!(summary.changed(), 1);
    }

    #[test]
    fn test_keys_are_translated_against_the_current_state() {
        let state = LayoutEditorState::blank(2, 1).unwrap();

        // The first Alt+KeyL has no widget to move, so it moves the cursor.
        let (state, _) = run(state, "Alt+KeyL\nEnter\nAlt+KeyH").unwrap();

        assert_eq!(state.to_string(), "w-1 .");
        assert_eq!(state.selection(), Coordinate::ORIGIN);
    }

    #[test]
    fn test_replay_stops_at_first_layout_error() {
        let state = LayoutEditorState::blank(2, 2).unwrap();

        let error = run(state, "Enter\ngrid 0 2\nKeyJ").unwrap_err();

        assert_eq!(
            error,
            ReplayError::StepFailed {
                step: 2,
                action: "resize grid to 0x2".to_string(),
                source: LayoutError::InvalidGridSize { columns: 0, rows: 2 },
            }
        );
    }

    #[test]
    fn test_cursor_outside_grid_fails_widget_edits() {
        let state = LayoutEditorState::blank(2, 2).unwrap();
        let steps = [
            ScriptStep::Command(EditorCommand::Select(Coordinate::new(5, 5))),
            ScriptStep::Command(EditorCommand::DeleteSelected),
        ];
        let mut ids = SequentialWidgetIds::new("w");

        let error = replay(state, &steps, &mut ids).unwrap_err();

        assert!(matches!(
            error,
            ReplayError::StepFailed {
                step: 2,
                source: LayoutError::InvalidSelection(_),
                ..
            }
        ));
    }
}
