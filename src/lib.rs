//! railgen - Responsible AI License generator
//!
//! railgen composes RAIL licenses from a catalog of use restrictions
//! published by the license service, tracks the user's choices, and submits
//! the resulting license so its text can be generated and downloaded.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{Download, FinishOutcome, LicenseSession, SessionError};
pub use config::Config;
pub use domain::entities::{Catalog, LicenseRequest, LicenseTerms};
pub use domain::services::{Preview, SelectionTracker};
pub use error::{RailError, RailResult};
