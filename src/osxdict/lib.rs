//! # osxdict
//!
//! A command-line front end to the dictionary lookup service that ships
//! with macOS. The binary is a thin client: everything between the
//! argument parser and stdout is library code, so the interesting logic
//! can be tested without the host service.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, prints usage and warnings              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command layer (commands/*.rs)                              │
//! │  - The list and lookup passes                               │
//! │  - Writes through a Renderer, never to stdout directly      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog.rs)                                       │
//! │  - One-time snapshot of the host's dictionaries             │
//! │  - Keyed by short name, immutable after construction        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Service layer (service/)                                   │
//! │  - Abstract DictionaryService trait                         │
//! │  - CoreServicesClient (macOS), InMemoryService (testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key principle: no I/O assumptions in core
//!
//! From the command layer inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<T>`, diagnostic data as values)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! Warnings (say, an unknown dictionary name) come back to the CLI layer
//! as data; only `main.rs` decides how they reach the terminal.
//!
//! ## Module overview
//!
//! - [`service`]: the host service trait and its implementations
//! - [`catalog`]: process-wide dictionary catalog
//! - [`envvar`]: `OSX_DICTIONARY` selection fallback
//! - [`plan`]: the per-invocation query plan and its normalization
//! - [`render`]: plain-text and JSON output
//! - [`commands`]: the two execution modes
//! - [`error`]: error types

pub mod catalog;
pub mod commands;
pub mod envvar;
pub mod error;
pub mod plan;
pub mod render;
pub mod service;
