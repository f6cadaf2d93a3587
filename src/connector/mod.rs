//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Text generation (HuggingFace Inference API, mock for tests)
//! - HTTP API (axum router, controllers, dependency container)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::{Container, ContainerConfig};
