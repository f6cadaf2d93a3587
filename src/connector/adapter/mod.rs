mod hf_inference;
mod mock_generator;

pub use hf_inference::*;
pub use mock_generator::*;
