//! Subcommand implementations.

pub mod batch;
pub mod loan;
pub mod tax;
