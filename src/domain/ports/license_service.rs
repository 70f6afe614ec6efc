//! License service port - submission and text generation.
//!
//! Abstracts the remote service so the session can be driven by an HTTP
//! client in production and an in-memory fake in tests.

use serde::{Deserialize, Serialize};

use super::ServiceError;
use crate::domain::entities::LicenseRequest;
use crate::domain::value_objects::{LicenseId, MediaType};

/// Identifier handed back for a stored license
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseReceipt {
    pub id: LicenseId,
}

pub trait LicenseService {
    /// Store a license; the returned id addresses it for generation.
    fn submit(&self, request: &LicenseRequest) -> Result<LicenseReceipt, ServiceError>;

    /// Address of the generated text, suitable for sharing
    fn generate_url(&self, id: &LicenseId, media: MediaType) -> String;

    /// Fetch the generated license text.
    fn generate(&self, id: &LicenseId, media: MediaType) -> Result<String, ServiceError>;
}
