//! # filmorate
//!
//! The Filmorate server: an HTTP API and CLI around the in-memory catalog in
//! `filmorate-core`.
//!
//! ## Modules
//!
//! - `api`: axum router, handlers, request types, rate limiting
//! - `cli`: clap commands (`server`, `check-seed`, `config`)
//! - `config`: layered `ServerConfig` (defaults, TOML, environment, flags)
//! - `seed`: JSON seed files applied through the catalog operations
//! - `error`: `AppError` for everything outside the catalog

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod seed;
