//! resolution-solver - Propositional resolution from the command line
//!
//! Validates formulas the way the page indicator does, resolves them the way
//! the calculate button does, and offers an interactive session driving the
//! same controller over terminal elements.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod commands;

/// Main entry point for the resolution-solver CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
