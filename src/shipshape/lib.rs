//! # Shipshape Architecture
//!
//! Shipshape is a **UI-agnostic site-maintenance library**: the batch
//! patch engine, venues database editor, sitemap generator and image
//! conversion driver for the Wake & Wave cruise site, with a CLI client
//! on top.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ContentStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The One Rule That Matters
//!
//! Every [`patch::Patch`] is pure and idempotent: applying it twice
//! yields the same bytes as applying it once. The runner enforces this
//! through each patch's guard (`already_applied`) rather than trusting
//! the matcher, because several patches insert markup that would be
//! visibly duplicated on a second application.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`patch`]: The patch engine (guards, rules, apply modes)
//! - [`patches`]: The shipped patch catalog
//! - [`runner`]: Batch execution and write-if-changed
//! - [`select`]: File selection with exclusion fragments
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Run reports and outcomes
//! - [`venues`]: The ships/venues JSON database
//! - [`sitemap`]: sitemap.xml generation
//! - [`images`]: External image-conversion driver
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod images;
pub mod model;
pub mod patch;
pub mod patches;
pub mod runner;
pub mod select;
pub mod sitemap;
pub mod store;
pub mod venues;
