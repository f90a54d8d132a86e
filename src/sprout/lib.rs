//! # Sprout Architecture
//!
//! Sprout is a **UI-agnostic plant watering library** with a small CLI client on top.
//! The library owns the plant collection, derives watering status from elapsed time
//! and keeps a durable copy of the collection in a key-value store.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders plant cards, exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API + Commands (api.rs, commands/*.rs)                     │
//! │  - Resolves selectors (positions, names) to plant ids       │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Registry (registry.rs, status.rs, model.rs)                │
//! │  - Owns the in-memory collection, newest first              │
//! │  - Saves through the persistence hook after every mutation  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence + Storage (persistence.rs, store/)             │
//! │  - One JSON record under a fixed key                        │
//! │  - FileStore (production), MemStore / NoopStore (testing)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Persistence failures are logged through `tracing` and otherwise
//! swallowed: the in-memory collection stays authoritative for the session.
//!
//! ## Status Is Derived
//!
//! A plant only stores `last_watered` and `frequency`. Whether it is due, due
//! today or upcoming is recomputed on every read (see [`status`]), so the value
//! can never go stale after a reload on a different day.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade used by the CLI
//! - [`commands`]: One module per user-facing operation
//! - [`registry`]: The owning collection and its mutations
//! - [`status`]: Calendar-day status derivation
//! - [`model`]: `Plant` and `PlantId`
//! - [`persistence`]: Serializes the collection into the key-value store
//! - [`store`]: Key-value store abstraction and implementations
//! - [`index`]: Display positions and user plant selectors
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod persistence;
pub mod registry;
pub mod status;
pub mod store;
