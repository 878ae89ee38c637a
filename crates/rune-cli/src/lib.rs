//! Command implementations behind the `runetool` binary.

pub mod commands;
