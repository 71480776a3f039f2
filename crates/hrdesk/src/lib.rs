//! # Hrdesk Architecture
//!
//! Hrdesk is a **UI-agnostic record store** for small HR applications that keep
//! all of their state in a local key-value namespace: employees, leave requests,
//! payroll rows, the logged-in user. It is a library first; the `hrdesk` binary is
//! just one client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Clients (hrdesk-cli, a web shell, tests)                   │
//! │  - Parse input, render CmdResult messages, own exit codes   │
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
//! │  - Ids and codes, import/export, session gate, clear-all    │
//! │  - No stdout/stderr, no prompts                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Store<B>: primary + `_backup` write protocol, collections│
//! │  - StorageBackend: MemBackend (tests), FsBackend (disk)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Ambient Storage
//!
//! Every operation receives the storage handle it works on. There is no global
//! namespace: two `Store` values never see each other's keys, which is what lets
//! each test run against its own fresh [`store::memory::InMemoryStore`].
//!
//! ## Single Writer
//!
//! Backends use `RefCell` interior mutability and mutations take `&mut self`, so a
//! store can't be shared across threads. Two processes pointing an `FsBackend` at
//! the same directory are not coordinated; the last wholesale write wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Backup protocol, typed collections, storage backends
//! - [`model`]: Record types (`Employee`, `SessionUser`) and the `Record` trait
//! - [`format`]: en-IN date and rupee formatting, working-day counts
//! - [`validate`]: Email, PAN and Aadhaar validators
//! - [`config`]: Layered configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod store;
pub mod validate;
