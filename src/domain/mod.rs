//! # Domain Layer
//!
//! Chat turns, the session transcript, and the credential.
//! This layer is independent of any HTTP client or terminal library.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
