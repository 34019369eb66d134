//! Command-line interface module.

mod args;
pub mod check;
mod common;
pub mod init;
pub mod query;
pub mod routes;

pub use args::{Cli, Commands, ProjectArgs, QueryArgs};
