//! # Core Engine
//!
//! The UI state machine. It knows nothing about terminals or HTTP.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (state)          │
//!                    │  • Message (events)     │
//!                    │  • update() (reducer)   │
//!                    │  • render() (view)      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │  Backend   │
//!             │  Adapter   │          │  Adapter   │
//!             │ (ratatui)  │          │  (reqwest) │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: the `App` struct — all engine state in one place
//! - [`menu`]: the fixed menu entries and their actions
//! - [`message`]: the `Message`/`Command` enums and the `update()` reducer
//! - [`view`]: the pure text projection of `App`
//! - [`config`]: layered configuration

pub mod config;
pub mod menu;
pub mod message;
pub mod state;
pub mod view;
