//! Catalog provider port - abstracts where restrictions, domains and sources come from.

use serde::{Deserialize, Serialize};

use super::ServiceError;
use crate::domain::entities::{Catalog, CatalogError, Domain, Restriction, Source};

/// Catalog lists exactly as the service publishes them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCatalog {
    pub restrictions: Vec<Restriction>,
    pub domains: Vec<Domain>,
    pub sources: Vec<Source>,
}

impl RawCatalog {
    /// Validate the lists and resolve the locked source by name.
    pub fn into_catalog(self, locked_source: &str) -> Result<Catalog, CatalogError> {
        Catalog::new(self.domains, self.sources, self.restrictions, locked_source)
    }
}

pub trait CatalogProvider {
    /// Probe the backend; `Ok` only when it answers 200.
    fn check_available(&self) -> Result<(), ServiceError>;

    fn fetch_catalog(&self) -> Result<RawCatalog, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{DomainId, RestrictionId, SourceId};

    /// Mock implementation for testing
    struct StaticCatalog {
        catalog: RawCatalog,
        up: bool,
    }

    impl CatalogProvider for StaticCatalog {
        fn check_available(&self) -> Result<(), ServiceError> {
            if self.up {
                Ok(())
            } else {
                Err(ServiceError::Unavailable { status: 503 })
            }
        }

        fn fetch_catalog(&self) -> Result<RawCatalog, ServiceError> {
            self.check_available()?;
            Ok(self.catalog.clone())
        }
    }

    fn raw() -> RawCatalog {
        RawCatalog {
            restrictions: vec![Restriction {
                id: RestrictionId(1),
                text: "No harm".to_string(),
                domain_id: DomainId(1),
                source_id: SourceId(5),
            }],
            domains: vec![Domain {
                id: DomainId(1),
                name: "General".to_string(),
            }],
            sources: vec![Source {
                id: SourceId(5),
                name: "RAIL Initiative".to_string(),
            }],
        }
    }

    #[test]
    fn provider_catalog_resolves_locked_source() {
        let provider = StaticCatalog {
            catalog: raw(),
            up: true,
        };
        let catalog = provider
            .fetch_catalog()
            .unwrap()
            .into_catalog("RAIL Initiative")
            .unwrap();
        assert_eq!(catalog.locked_source().id, SourceId(5));
    }

    #[test]
    fn unavailable_provider_fails_fetch() {
        let provider = StaticCatalog {
            catalog: raw(),
            up: false,
        };
        assert_eq!(
            provider.fetch_catalog(),
            Err(ServiceError::Unavailable { status: 503 })
        );
    }

    #[test]
    fn raw_catalog_parses_service_json() {
        let json = r#"{
            "restrictions": [{"id": 1, "text": "No harm", "domain_id": 1, "source_id": 5}],
            "domains": [{"id": 1, "name": "General"}],
            "sources": [{"id": 5, "name": "RAIL Initiative"}]
        }"#;
        let parsed: RawCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, raw());
    }
}
