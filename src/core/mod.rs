//! Core domain logic for the resolution solver
//!
//! This module contains pure logic with no I/O dependencies.
//! The solver and the page are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Literal, Clause, Validity, ControllerState)
//! - `services/` - Parsing, resolution and the page controller
//! - `ports/` - Trait definitions for the solver and the page elements

pub mod models;
pub mod ports;
pub mod services;
