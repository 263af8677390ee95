//! Gradebook service library
//!
//! Manages college students and their per-subject grades (math, science,
//! history) over PostgreSQL, exposed through an HTTP API. The layering
//! follows the usual shape: `api` (routing and handlers) on top of
//! `services` (validation and orchestration) on top of `db` (repositories).

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;

pub use error::{Error, Result};
