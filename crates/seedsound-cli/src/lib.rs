//! SeedSound CLI library.
//!
//! Command implementations for the `seedsound` binary. Each command takes
//! plain arguments and returns an exit code, so tests can drive them without
//! spawning a process.

pub mod commands;
pub mod logging;
