//! Edit script parsing.
//!
//! An edit script is a plain text file with one step per line:
//!
//! ```text
//! # build a 2x2 chart in the top-left corner
//! Enter
//! Shift+Alt+ArrowRight
//! key Shift+Alt+ArrowDown
//! select 3 0
//! create 3 0 1 2
//! grid 8 6
//! ```
//!
//! | Line                              | Meaning                              |
//! |-----------------------------------|--------------------------------------|
//! | blank, or starting with `#`       | ignored                              |
//! | `key <chord>`                     | a keystroke, e.g. `key Alt+KeyJ`     |
//! | `select <x> <y>`                  | put the cursor on a cell             |
//! | `grid <columns> <rows>`           | resize the grid                      |
//! | `create <x> <y> <width> <height>` | place a new widget                   |
//! | anything else                     | the whole line is a keystroke chord  |
//!
//! Parsing stops at the first malformed line; the error names its 1-based
//! line number.

use std::fmt;
use std::num::ParseIntError;

use layout_core::{Bounds, Coordinate, EditorCommand, Keystroke, KeystrokeError};
use thiserror::Error;

/// Error type for edit script parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScriptError {
    /// A keystroke chord could not be parsed.
    #[error("line {line}: {source}")]
    InvalidKey {
        line: usize,
        #[source]
        source: KeystrokeError,
    },

    /// A command had the wrong number of arguments.
    #[error("line {line}: `{directive}` expects {expected} arguments, found {found}")]
    WrongArgumentCount {
        line: usize,
        directive: &'static str,
        expected: usize,
        found: usize,
    },

    /// A command argument was not a valid number.
    #[error("line {line}: invalid number {value:?} ({source})")]
    InvalidNumber {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// One step of an edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    /// A key press, translated against the state current at replay time.
    Key(Keystroke),
    /// A command applied as is.
    Command(EditorCommand),
}

impl fmt::Display for ScriptStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptStep::Key(keystroke) => write!(f, "key {keystroke}"),
            ScriptStep::Command(command) => write!(f, "{command}"),
        }
    }
}

/// Parses a whole script.
///
/// # Errors
///
/// Returns the [`ScriptError`] of the first malformed line.
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| parse_line(index + 1, line).transpose())
        .collect()
}

/// Parses a keystroke chord given outside a script (e.g. on the command line).
///
/// `line` is used only for error reporting.
///
/// # Errors
///
/// Returns [`ScriptError::InvalidKey`] if the chord is malformed.
pub fn parse_key(line: usize, chord: &str) -> Result<ScriptStep, ScriptError> {
    chord
        .parse()
        .map(ScriptStep::Key)
        .map_err(|source| ScriptError::InvalidKey { line, source })
}

/// Parses one line; `Ok(None)` for blank and comment lines.
fn parse_line(line: usize, text: &str) -> Result<Option<ScriptStep>, ScriptError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let mut words = text.split_whitespace();
    let directive = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let step = match directive.to_ascii_lowercase().as_str() {
        "key" => {
            let chord = text[directive.len()..].trim();
            parse_key(line, chord)?
        }
        "select" => {
            let [x, y] = numbers::<i32, 2>(line, "select", &args)?;
            ScriptStep::Command(EditorCommand::Select(Coordinate::new(x, y)))
        }
        "grid" => {
            let [columns, rows] = numbers::<usize, 2>(line, "grid", &args)?;
            ScriptStep::Command(EditorCommand::ResizeGrid { columns, rows })
        }
        "create" => {
            if args.len() != 4 {
                return Err(ScriptError::WrongArgumentCount {
                    line,
                    directive: "create",
                    expected: 4,
                    found: args.len(),
                });
            }
            let [x, y] = numbers::<i32, 2>(line, "create", &args[..2])?;
            let [width, height] = numbers::<u32, 2>(line, "create", &args[2..])?;
            ScriptStep::Command(EditorCommand::CreateWidget(Bounds::new(x, y, width, height)))
        }
        _ => parse_key(line, text)?,
    };
    Ok(Some(step))
}

/// Parses exactly `N` numeric arguments.
fn numbers<T, const N: usize>(
    line: usize,
    directive: &'static str,
    args: &[&str],
) -> Result<[T; N], ScriptError>
where
    T: std::str::FromStr<Err = ParseIntError> + Copy + Default,
{
    if args.len() != N {
        return Err(ScriptError::WrongArgumentCount {
            line,
            directive,
            expected: N,
            found: args.len(),
        });
    }

    let mut parsed = [T::default(); N];
    for (slot, value) in parsed.iter_mut().zip(args) {
        *slot = value.parse().map_err(|source| ScriptError::InvalidNumber {
            line,
            value: (*value).to_string(),
            source,
        })?;
    }
    Ok(parsed)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
