//! # Core Game Logic
//!
//! This module contains Vanhoc's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Game (session state) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • level table / ranks  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Question  │      │ Completion │
//!     │  Adapter   │      │  Provider  │      │   Store    │
//!     │ (ratatui)  │      │ (reqwest)  │      │  (file)    │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Game` struct — all session state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`level`]: The level sequence and its progression table
//! - [`rank`]: Rank thresholds and certificate text
//! - [`store`]: The persisted completion counter
//! - [`config`]: Settings file and resolution

pub mod action;
pub mod config;
pub mod level;
pub mod rank;
pub mod state;
pub mod store;
