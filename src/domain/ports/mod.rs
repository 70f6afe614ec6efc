//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod catalog_provider;
pub mod license_service;
mod service_error;

pub use catalog_provider::{CatalogProvider, RawCatalog};
pub use license_service::{LicenseReceipt, LicenseService};
pub use service_error::ServiceError;
