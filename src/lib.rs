//! db-sqlsplit - Splits multi-statement SQL scripts and classifies each
//! statement's result shape.
//!
//! The core lives in [`script`]: [`script::process`] turns a script into an
//! ordered list of [`script::StatementInfo`] records.

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod script;
