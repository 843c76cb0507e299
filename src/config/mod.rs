//! Configuration management module
//!
//! Configuration is resolved once, at process start, by the entry point:
//! [`load_env_file`] copies a dotenv file into the process environment and
//! [`ClientConfig::from_env`] reads the resulting variables. The client itself
//! never touches dotenv files.

pub mod client;
pub mod loader;

pub use client::ClientConfig;
pub use loader::load_env_file;
