/*
[INPUT]:  Public API exports for car-api-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod command;
pub mod config;

// Re-export main types for convenience
pub use command::{Command, CommandOutput, run};
pub use config::CliConfig;
