//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from the
//! file gateway and asset serving.

pub mod body;
pub mod mime;
pub mod query;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_413_response, build_500_response, build_file_response,
    build_options_response, cors_builder, fallback_response,
};
