//! # CLI Module
//!
//! The user-facing layer of the converter. There is exactly one command,
//! so this layer is small: it resolves the run configuration, opens the
//! input sources in order, drives the converter session line by line and
//! turns its flush steps into batch lookups.
//!
//! ## Data Flow
//!
//! ```text
//! CLI Layer (sources, progress, diagnostics)
//!     ↓
//! Converter Session (classification, batching, formatting)
//!     ↓
//! Spotify Integration Layer (token, batch lookups)
//!     ↓
//! Spotify Web API
//! ```
//!
//! ## Output Discipline
//!
//! Standard output carries formatted result lines only, in input order.
//! Everything else — the lookup spinner, empty-batch warnings, error
//! diagnostics — goes to standard error, so the command composes cleanly
//! in pipelines.
//!
//! ## Failure Behavior
//!
//! The first invalid URI, kind mismatch or failed request aborts the run;
//! errors propagate as values to `main`, which maps them to the process
//! exit code. An all-null batch response is the one non-fatal case: it
//! warns and contributes zero lines.

mod convert;

pub use convert::ConvertOptions;
pub use convert::HttpOptions;
pub use convert::convert;
