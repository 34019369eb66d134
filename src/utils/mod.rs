//! Utility modules shared by commands.

pub mod path;
pub mod plural;
