//! # Application Layer
//!
//! The completion interface and the per-session chat use case.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
