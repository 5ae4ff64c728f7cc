//! Command-line surface of the `primgen` binary.

pub mod args;

pub use args::{Cli, Commands, Roots};
