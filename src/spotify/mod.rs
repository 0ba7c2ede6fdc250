//! # Spotify Integration Module
//!
//! The HTTP boundary of the converter. Two concerns live here, one per
//! submodule:
//!
//! - [`auth`] - Bearer token acquisition: either a pass-through of
//!   `SPOTIFY_ACCESS_TOKEN` or a one-shot OAuth 2.0 client-credentials
//!   exchange. Fetched lazily, once per run.
//! - [`lookup`] - Batch lookups against the Web API's collection
//!   endpoints (`GET /tracks`, `GET /albums`, `GET /artists` with a
//!   comma-joined `?ids=` parameter), normalized to a common item shape.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token grant
//! - `GET /tracks?ids=` - up to 50 tracks per request
//! - `GET /albums?ids=` - up to 50 albums per request
//! - `GET /artists?ids=` - up to 50 artists per request
//!
//! ## Error Handling Philosophy
//!
//! No retries and no rate-limit backoff: every request either succeeds or
//! aborts the whole run. An API-reported error keeps its raw response
//! body attached so the caller can echo it for diagnosis. The only
//! courtesy towards rate limits is the caller's optional fixed pause
//! between batches.
//!
//! ## Thread Safety
//!
//! Designed for async single-threaded use: one shared `reqwest::Client`,
//! at most one outstanding request at a time, no shared mutable state.

pub mod auth;
pub mod lookup;
