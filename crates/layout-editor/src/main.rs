//! Dashboard layout editor: headless entry point.
//!
//! Loads a layout document (or starts from a blank grid), replays keystrokes
//! and edit-script commands against it, and writes the resulting document.
//!
//! # Usage
//!
//! ```text
//! layout-editor [OPTIONS]
//!
//! Options:
//!   --config <PATH>    TOML config file [default: platform config dir]
//!   --input <PATH>     Layout document to start from [default: blank grid]
//!   --script <PATH>    Edit script, one step per line
//!   --key <CHORD>      Extra keystroke, repeatable (run after the script)
//!   --output <PATH>    Where to write the result [default: stdout]
//!   --print            Also print the final grid as text (to stderr)
//!   --init-config      Write the effective config to the config path and exit
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable               | Description                                |
//! |------------------------|--------------------------------------------|
//! | `LAYOUT_EDITOR_CONFIG` | Config file path, same as `--config`       |
//! | `RUST_LOG`             | Log filter, overrides `[editor] log_level` |
//!
//! # Architecture overview
//!
//! ```text
//! main()
//!  └─ load_config()             -- TOML settings (infrastructure::storage)
//!  └─ load_document() / blank   -- starting layout
//!  └─ parse_script() + --key    -- steps (application::script)
//!  └─ replay()                  -- apply steps (application::replay)
//!  └─ save_document() / stdout  -- result
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use layout_core::LayoutEditorState;
use layout_editor::application::replay::replay;
use layout_editor::application::script::{parse_key, parse_script, ScriptStep};
use layout_editor::infrastructure::storage::config::{
    config_file_path, load_config, save_config, EditorConfig,
};
use layout_editor::infrastructure::storage::document::{
    load_document, render_document, save_document,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Headless dashboard layout editor.
///
/// The `#[derive(Parser)]` macro from `clap` generates the argument parser
/// automatically from the struct fields and their `#[arg(...)]` attributes.
#[derive(Debug, Parser)]
#[command(
    name = "layout-editor",
    about = "Replay keystrokes and edit scripts against a dashboard layout",
    version
)]
struct Cli {
    /// Path to the TOML configuration file.
    ///
    /// A missing file is not an error; built-in defaults are used instead.
    #[arg(long, env = "LAYOUT_EDITOR_CONFIG")]
    config: Option<PathBuf>,

    /// Layout document (JSON) to start from.
    ///
    /// Without it the editor starts from a blank grid sized by `[grid]`.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Edit script to replay, one keystroke or command per line.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Keystroke chord such as `Shift+Alt+ArrowRight`.  Repeatable; keys run
    /// after the script, in the order given.
    #[arg(long = "key", value_name = "CHORD")]
    keys: Vec<String>,

    /// Where to write the resulting layout document.  Defaults to stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also print the final grid as text to stderr.
    #[arg(long)]
    print: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    init_config: bool,
}

impl Cli {
    /// Returns `--config`, falling back to the platform config file.
    fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(|| config_file_path().ok())
    }

    /// Collects the script steps followed by the `--key` steps.
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be read or any step is malformed.
    fn collect_steps(&self) -> anyhow::Result<Vec<ScriptStep>> {
        let mut steps = match &self.script {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read script {}", path.display()))?;
                parse_script(&text)
                    .with_context(|| format!("invalid script {}", path.display()))?
            }
            None => Vec::new(),
        };

        for (index, chord) in self.keys.iter().enumerate() {
            let step = parse_key(index + 1, chord)
                .with_context(|| format!("invalid --key argument {chord:?}"))?;
            steps.push(step);
        }
        Ok(steps)
    }

    /// Loads the starting layout from `--input` or builds a blank grid.
    fn initial_state(&self, config: &EditorConfig) -> anyhow::Result<LayoutEditorState> {
        match &self.input {
            Some(path) => load_document(path)
                .with_context(|| format!("failed to load layout {}", path.display())),
            None => config
                .grid
                .blank_layout()
                .context("invalid [grid] size in configuration"),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Program entry point.
///
/// # What happens at startup
///
/// 1. CLI arguments are parsed with `clap` into a [`Cli`] struct.
/// 2. The TOML configuration is loaded (defaults when the file is missing).
/// 3. `tracing_subscriber` is initialised.  `RUST_LOG` wins; otherwise the
///    configured `log_level` is used.
/// 4. The steps are replayed and the resulting document is written.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config_path();
    let config = match &config_path {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EditorConfig::default(),
    };

    // ── Logging setup ─────────────────────────────────────────────────────────
    //
    // Logs go to stderr so stdout stays a clean JSON document.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(&config.editor.log_level))
        .init();

    if cli.init_config {
        let path = config_path.context("no --config given and no platform config directory")?;
        save_config(&config, &path)
            .with_context(|| format!("failed to write config {}", path.display()))?;
        info!(path = %path.display(), "wrote configuration");
        return Ok(());
    }

    run(&cli, &config)
}

/// Replays the requested steps and writes the result.
fn run(cli: &Cli, config: &EditorConfig) -> anyhow::Result<()> {
    let state = cli.initial_state(config)?;
    let steps = cli.collect_steps()?;
    let mut ids = config.ids.id_source(&state);

    info!(
        columns = state.width(),
        rows = state.height(),
        steps = steps.len(),
        "starting replay"
    );
    let (state, summary) = replay(state, &steps, ids.as_mut())?;
    if summary.unchanged > 0 {
        warn!(
            unchanged = summary.unchanged,
            steps = summary.steps,
            "some steps left the layout unchanged"
        );
    }

    match &cli.output {
        Some(path) => save_document(&state, path)
            .with_context(|| format!("failed to write layout {}", path.display()))?,
        None => println!("{}", render_document(&state)?),
    }

    if cli.print {
        eprintln!("{state}");
    }
    Ok(())
}

/// Builds the log filter: `RUST_LOG` if set and valid, else `level`, else `info`.
fn log_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
