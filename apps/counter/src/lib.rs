//! # Pressline Counter Library
//!
//! Core library for the Pressline order counter.
//! This is the main entry point that configures and runs a counter session.
//!
//! ## Module Organization
//! ```text
//! pressline_counter/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── counter.toml, PRESSLINE_* overrides, catalog file
//! ├── intake.rs       ◄─── Category / product / service prompts
//! ├── counter.rs      ◄─── Order loop: number, price, compose, save
//! └── error.rs        ◄─── AppError for everything that stops the counter
//! ```

pub mod config;
pub mod counter;
pub mod error;
pub mod intake;

use std::path::PathBuf;

use pressline_store::DocumentStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::CounterConfig;
pub use counter::{Counter, SessionSummary};
pub use error::{AppError, AppResult};

// =============================================================================
// Command Line
// =============================================================================

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// `--config <path>`: explicit counter.toml.
    pub config_path: Option<PathBuf>,
    /// `--help`: print usage and exit.
    pub help: bool,
}

impl CliArgs {
    /// Parses arguments, excluding the program name.
    pub fn parse<I>(args: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = args
                        .next()
                        .ok_or_else(|| AppError::Usage(format!("{} needs a path", arg)))?;
                    parsed.config_path = Some(PathBuf::from(path));
                }
                "--help" | "-h" => parsed.help = true,
                other => {
                    return Err(AppError::Usage(format!(
                        "Unknown argument: '{}'. Try --help",
                        other
                    )))
                }
            }
        }

        Ok(parsed)
    }
}

pub const USAGE: &str = "\
Pressline Counter

Usage: pressline-counter [OPTIONS]

Options:
  -c, --config <PATH>  Counter config file (default: platform config dir)
  -h, --help           Show this help message

Environment:
  PRESSLINE_OUTPUT_DIR      Directory for receipt and tags files
  PRESSLINE_RECEIPT_FILE    Receipt file name (default: receipt.txt)
  PRESSLINE_TAGS_FILE       Tags file name (default: tags.txt)
  PRESSLINE_CATALOG         Price list file (.json or .toml)
  PRESSLINE_STAGE_DELAY_MS  Pause between status messages
  RUST_LOG                  Log filter (default: info,pressline=debug)";

// =============================================================================
// Startup
// =============================================================================

/// Runs the counter on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Counter Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info, debug for pressline crates                         │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → counter.toml → PRESSLINE_* → validate                  │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • Built-in price list, or the configured .json / .toml file         │
/// │                                                                         │
/// │  4. Open Document Store ──────────────────────────────────────────────► │
/// │     • Creates the output directory if needed                            │
/// │                                                                         │
/// │  5. Run Session ──────────────────────────────────────────────────────► │
/// │     • Orders until SHUTDOWN or end of input                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(args: CliArgs) -> AppResult<SessionSummary> {
    init_tracing();

    info!("Starting Pressline Counter");

    let config = CounterConfig::load(args.config_path)?;
    let catalog = config.load_catalog()?;
    let store = DocumentStore::open(config.output.clone())?;

    info!(
        output_dir = %config.output.output_dir.display(),
        products = catalog.len(),
        "Counter ready"
    );

    let counter = Counter::new(catalog, store).stage_delay(config.counter.stage_delay());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    counter.run(&mut stdin.lock(), &mut stdout.lock())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=pressline=trace` - Show trace for pressline crates only
/// - Default: INFO, DEBUG for pressline crates
///
/// Logs go to stderr so they never interleave with the operator prompts
/// when stdout is redirected.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pressline=debug"));

    // A subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
