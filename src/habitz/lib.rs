//! # Habitz Architecture
//!
//! Habitz is a **UI-agnostic habit-tracking library** with a CLI client on top.
//! All habits live in one JSON file; every invocation loads it, applies one
//! operation, and writes it back.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, formats output                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (strings → HabitRef / TrackedDate)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load → mutate Repository → save on success               │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - HabitStore trait, JSON codec                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`repository`]: Operations on the in-memory habit list
//! - [`reference`]: Index / short-name references
//! - [`streak`]: Streak statistics
//! - [`store`]: Storage abstraction, codec and implementations
//! - [`model`]: `Habit`, `Repository`, `TrackedDate`
//! - [`config`]: Configuration loading and data-file resolution
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod reference;
pub mod repository;
pub mod store;
pub mod streak;

#[cfg(test)]
mod test_utils;
