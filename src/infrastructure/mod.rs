//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `http` - License service client (catalog + submission + generation)
//! - `fs` - Atomic local file writes

pub mod fs;
pub mod http;

// Re-export for convenience
pub use fs::write_atomic;
pub use http::{HttpLicenseApi, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
