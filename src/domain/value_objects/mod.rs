//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod ids;
mod license_type;
mod media_type;
mod specification;
mod validation;

pub use ids::{DomainId, LicenseId, RestrictionId, SourceId};
pub use license_type::{LicenseType, Permission};
pub use media_type::MediaType;
pub use specification::{artifact_code, Specification};
pub use validation::ValidationError;
