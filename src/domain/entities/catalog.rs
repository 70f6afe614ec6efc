//! Catalog entity
//!
//! The read-only set of domains, sources and restrictions published by the
//! license service. Restrictions from the configured locked source are
//! mandatory; every other restriction is optional.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{DomainId, RestrictionId, SourceId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: DomainId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: SourceId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restriction {
    pub id: RestrictionId,
    pub text: String,
    pub domain_id: DomainId,
    pub source_id: SourceId,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error(
        "locked source '{name}' not found in catalog\n  → Fix: set [catalog] locked_source to one of: {available}"
    )]
    LockedSourceNotFound { name: String, available: String },

    #[error("restriction {restriction} references unknown domain {domain}")]
    UnknownDomain {
        restriction: RestrictionId,
        domain: DomainId,
    },

    #[error("restriction {restriction} references unknown source {source_id}")]
    UnknownSource {
        restriction: RestrictionId,
        source_id: SourceId,
    },

    #[error("restriction {id} appears more than once in catalog")]
    DuplicateRestriction { id: RestrictionId },
}

#[derive(Debug, Clone)]
pub struct Catalog {
    domains: Vec<Domain>,
    sources: Vec<Source>,
    restrictions: Vec<Restriction>,
    locked_source: SourceId,
    domain_index: HashMap<DomainId, usize>,
    source_index: HashMap<SourceId, usize>,
    restriction_index: HashMap<RestrictionId, usize>,
}

impl Catalog {
    /// Build a catalog, resolving `locked_source_name` to a source id.
    pub fn new(
        domains: Vec<Domain>,
        sources: Vec<Source>,
        restrictions: Vec<Restriction>,
        locked_source_name: &str,
    ) -> Result<Self, CatalogError> {
        let locked_source = sources
            .iter()
            .find(|s| s.name == locked_source_name)
            .map(|s| s.id)
            .ok_or_else(|| CatalogError::LockedSourceNotFound {
                name: locked_source_name.to_string(),
                available: sources
                    .iter()
                    .map(|s| format!("'{}'", s.name))
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;

        let domain_index: HashMap<_, _> =
            domains.iter().enumerate().map(|(i, d)| (d.id, i)).collect();
        let source_index: HashMap<_, _> =
            sources.iter().enumerate().map(|(i, s)| (s.id, i)).collect();

        let mut restriction_index = HashMap::with_capacity(restrictions.len());
        for (i, r) in restrictions.iter().enumerate() {
            if !domain_index.contains_key(&r.domain_id) {
                return Err(CatalogError::UnknownDomain {
                    restriction: r.id,
                    domain: r.domain_id,
                });
            }
            if !source_index.contains_key(&r.source_id) {
                return Err(CatalogError::UnknownSource {
                    restriction: r.id,
                    source_id: r.source_id,
                });
            }
            if restriction_index.insert(r.id, i).is_some() {
                return Err(CatalogError::DuplicateRestriction { id: r.id });
            }
        }

        Ok(Self {
            domains,
            sources,
            restrictions,
            locked_source,
            domain_index,
            source_index,
            restriction_index,
        })
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn restrictions(&self) -> &[Restriction] {
        &self.restrictions
    }

    pub fn domain(&self, id: DomainId) -> Option<&Domain> {
        self.domain_index.get(&id).map(|&i| &self.domains[i])
    }

    pub fn source(&self, id: SourceId) -> Option<&Source> {
        self.source_index.get(&id).map(|&i| &self.sources[i])
    }

    pub fn restriction(&self, id: RestrictionId) -> Option<&Restriction> {
        self.restriction_index
            .get(&id)
            .map(|&i| &self.restrictions[i])
    }

    pub fn locked_source(&self) -> &Source {
        // Resolved in `new`, so the lookup cannot miss.
        &self.sources[self.source_index[&self.locked_source]]
    }

    pub fn is_locked(&self, id: RestrictionId) -> bool {
        self.restriction(id)
            .is_some_and(|r| r.source_id == self.locked_source)
    }

    pub fn locked_restrictions(&self) -> impl Iterator<Item = &Restriction> + '_ {
        self.restrictions
            .iter()
            .filter(move |r| r.source_id == self.locked_source)
    }

    pub fn optional_restrictions(&self) -> impl Iterator<Item = &Restriction> + '_ {
        self.restrictions
            .iter()
            .filter(move |r| r.source_id != self.locked_source)
    }

    pub fn optional_in_domain(&self, domain: DomainId) -> impl Iterator<Item = &Restriction> + '_ {
        self.optional_restrictions()
            .filter(move |r| r.domain_id == domain)
    }

    /// Domains offering at least one optional restriction, in catalog order
    pub fn domains_with_optional(&self) -> Vec<&Domain> {
        let with_optional: HashSet<DomainId> =
            self.optional_restrictions().map(|r| r.domain_id).collect();
        self.domains
            .iter()
            .filter(|d| with_optional.contains(&d.id))
            .collect()
    }
}
