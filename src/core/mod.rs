//! # Core Application Logic
//!
//! This module contains the converter's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (session)      │
//!                    │  • Action (key intents) │
//!                    │  • update() (reducer)   │
//!                    │  • View (text frame)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`convert`]: Temperature formulas and the `ConversionOption` enum
//! - [`state`]: The `App` struct and its `Screen` phases
//! - [`action`]: The `Action` enum and `update()`
//! - [`view`]: Plain-text rendering of the current screen
//! - [`config`]: Layered session settings

pub mod action;
pub mod config;
pub mod convert;
pub mod state;
pub mod view;
