//! Infrastructure adapters used by the command-line front end.

pub mod error;
pub mod files;
pub mod telemetry;
