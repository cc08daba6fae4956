//! Command implementations.
//!
//! - [`list`] - Print the resolved entries
//! - [`check`] - Validate declarations and files on disk
//! - [`emit`] - Write the mapping for a bundler
//! - [`init`] - Write a starter manifest
//!
//! Each command exposes an `execute` function taking its parsed arguments.

pub mod check;
pub mod emit;
pub mod init;
pub mod list;
pub mod output;
pub mod source;

pub use check::execute as check_execute;
pub use emit::execute as emit_execute;
pub use init::execute as init_execute;
pub use list::execute as list_execute;
