//! Ink & Atlas CLI application — literary-landmark search, provider
//! settings management and the darkroom photo filter.

pub use cmd::{Cli, Command};

pub mod cmd;
pub mod render;
