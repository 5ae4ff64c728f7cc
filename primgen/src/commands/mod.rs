//! Subcommand implementations.
//!
//! Each command writes its listing to the given writer so the binary can
//! pass stdout and tests can pass a buffer.

pub mod describe;
pub mod files;
pub mod generate;

pub use describe::describe;
pub use files::files;
pub use generate::generate;
