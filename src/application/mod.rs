//! # Application Layer
//!
//! Use cases and the generator interface coordinating domain and connector
//! layers.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
