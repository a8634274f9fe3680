//! CLI argument definitions and command implementations.

pub mod add;
pub mod args;
pub mod generate;
pub mod init;
pub mod list;
pub mod process;
pub mod remove;
pub mod validate;

pub use args::{Cli, Commands};
