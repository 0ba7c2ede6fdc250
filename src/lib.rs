//! Spotify URI Converter CLI Library
//!
//! This library converts Spotify URI references (track/album/artist/local)
//! into human-readable "Artist - Title" lines via the Spotify Web API.
//! Remote identifiers are accumulated into batches of at most 50 and
//! resolved with one API request per batch; local URIs carry their
//! metadata inline and never touch the network.
//!
//! # Modules
//!
//! - `cli` - Command-line orchestration: input sources, progress, output
//! - `config` - Configuration management and environment variables
//! - `convert` - The converter session: classification, batching, formatting
//! - `error` - Typed error taxonomy with exit-code mapping
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and API response models
//! - `uri` - URI kinds, parsing and local-URI decoding
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spuricli::{cli, config};
//!
//! #[tokio::main]
//! async fn main() -> spuricli::Res<()> {
//!     config::load_env().await?;
//!     let options = cli::ConvertOptions { kind: None, csv: false, delay: 0 };
//!     cli::convert(Vec::new(), options, cli::HttpOptions::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod spotify;
pub mod types;
pub mod uri;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used for plumbing that does not need a typed error variant (environment
/// loading, startup glue). The conversion pipeline itself uses the typed
/// [`error::ConvertError`] so `main` can map failures to exit codes.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted line with a distinctive blue "o" indicator on
/// standard error, keeping standard output free for result lines.
///
/// # Arguments
///
/// The macro accepts the same arguments as `eprintln!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Requesting access token...");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted line with a yellow "!" indicator on standard error
/// for recoverable issues that do not require terminating the run, such
/// as a batch that matched nothing.
///
/// # Arguments
///
/// The macro accepts the same arguments as `eprintln!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// warning!("No tracks matched this batch of {} ids; skipping.", count);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
