//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Catalog` - Domains, sources and restrictions published by the service
//! - `LicenseRequest` - The payload submitted to the license service

mod catalog;
mod license_request;

pub use catalog::{Catalog, CatalogError, Domain, Restriction, Source};
pub use license_request::{LicenseRequest, LicenseTerms};
