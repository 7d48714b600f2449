//! Match Recorder Service
//!
//! Accepts match results over HTTP and keeps them in an append-only,
//! in-memory list for the lifetime of the process.
//!
//! # Routes
//!
//! ```text
//! OPTIONS /saveMatch  -> 204, CORS preflight headers
//! POST    /saveMatch  -> 200, {"ok": true, "stored": <body>, "count": n}
//! ```
//!
//! Payloads are schema-less JSON values; nothing about their shape is
//! checked. Every response carries `Access-Control-Allow-Origin: *`.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
pub mod store;

pub use config::Config;
pub use router::create_router;
pub use state::AppState;
pub use store::{MatchRecord, MatchStore};
