//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `LicenseSession` - Catalog load, submission on change, generated-text download
//! - `write_download` - Persist a generated license next to the user's artefact

pub mod download;
pub mod session;

pub use download::{download_file_name, write_download, Download};
pub use session::{FinishOutcome, LicenseSession, SessionError};
