//! Subcommand implementations
//!
//! Every command performs exactly one API call and prints the result.

pub mod base;
pub mod issues;
pub mod me;
pub mod repos;
pub mod user;
pub mod validators;

pub use base::{Command, CommandContext};
pub use issues::IssuesCommand;
pub use me::MeCommand;
pub use repos::ReposCommand;
pub use user::UserCommand;
