//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Mistral AI chat completions over HTTPS (reqwest)
//! - An offline mock client for tests and demos

pub mod adapter;

pub use adapter::*;
