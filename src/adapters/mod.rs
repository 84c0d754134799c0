//! Adapter implementations for port traits
//!
//! This module contains the concrete implementations:
//!
//! - `solver` - Resolution solver behind [`SolverModule`](crate::core::ports::SolverModule)
//! - `terminal` - In-memory page elements used by the CLI
//! - `web` - DOM page elements and wasm exports (feature `web`)

pub mod solver;
pub mod terminal;
#[cfg(feature = "web")]
pub mod web;

pub use solver::ResolutionSolver;
pub use terminal::{PaneStyle, TerminalInput, TerminalPane};
