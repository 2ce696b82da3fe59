//! Request handler module
//!
//! Request routing dispatch plus front-end asset serving. The file
//! gateway endpoints themselves live in `crate::api`.

pub mod assets;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
