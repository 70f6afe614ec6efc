//! Selection state tracker
//!
//! Holds the user's in-progress license choices and derives the submission
//! payload from them. The tracker is the single source of truth: previews
//! and prompts are rendered from it and never read back.
//!
//! Invariant: `active_domains` always equals the set of domains with at
//! least one active restriction. Locked restrictions are active from the
//! start, so their domains are never removed.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Catalog, LicenseRequest, LicenseTerms};
use crate::domain::value_objects::{
    artifact_code, DomainId, LicenseType, Permission, RestrictionId, Specification,
    ValidationError,
};

/// Result of `toggle_restriction`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Restriction became active; `domain_added` when its domain is new
    Added { domain_added: bool },
    /// Restriction became inactive; `domain_removed` when its domain emptied
    Removed { domain_removed: bool },
    /// Restriction was already in the requested state
    Unchanged,
    /// Restriction cannot be toggled
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Mandatory restriction from the locked source
    Locked,
    /// Id not present in the catalog
    Unknown,
}

/// Result of `build_request`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Terms differ from the last build; submit this request
    Changed(LicenseRequest),
    /// Terms equal the last build; skip the redundant write
    Unchanged,
}

impl BuildOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, BuildOutcome::Changed(_))
    }
}

/// Comparable view of the selection state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionSnapshot {
    pub restriction_ids: BTreeSet<RestrictionId>,
    pub active_domains: Vec<DomainId>,
    pub specifications: Vec<Specification>,
    pub license_type: LicenseType,
    pub artefact_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SelectionTracker {
    catalog: Catalog,
    active_optional: BTreeSet<RestrictionId>,
    active_domains: Vec<DomainId>,
    domain_counts: HashMap<DomainId, usize>,
    specifications: Vec<Specification>,
    license_type: LicenseType,
    artefact_name: Option<String>,
    baseline: Option<LicenseTerms>,
}

impl SelectionTracker {
    /// Start a fresh selection over `catalog` with the default license type.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_license_type(catalog, LicenseType::default())
    }

    pub fn with_license_type(catalog: Catalog, license_type: LicenseType) -> Self {
        let mut active_domains = Vec::new();
        let mut domain_counts: HashMap<DomainId, usize> = HashMap::new();
        for r in catalog.locked_restrictions() {
            let count = domain_counts.entry(r.domain_id).or_insert(0);
            if *count == 0 {
                active_domains.push(r.domain_id);
            }
            *count += 1;
        }

        Self {
            catalog,
            active_optional: BTreeSet::new(),
            active_domains,
            domain_counts,
            specifications: Vec::new(),
            license_type,
            artefact_name: None,
            baseline: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Activate or deactivate an optional restriction.
    pub fn toggle_restriction(&mut self, id: RestrictionId, checked: bool) -> ToggleOutcome {
        let domain = match self.catalog.restriction(id) {
            Some(r) => r.domain_id,
            None => return ToggleOutcome::Ignored(IgnoreReason::Unknown),
        };
        if self.catalog.is_locked(id) {
            return ToggleOutcome::Ignored(IgnoreReason::Locked);
        }

        if checked {
            if !self.active_optional.insert(id) {
                return ToggleOutcome::Unchanged;
            }
            let count = self.domain_counts.entry(domain).or_insert(0);
            *count += 1;
            let domain_added = *count == 1;
            if domain_added {
                tracing::debug!(%domain, "domain added to selection");
                self.active_domains.push(domain);
            }
            ToggleOutcome::Added { domain_added }
        } else {
            if !self.active_optional.remove(&id) {
                return ToggleOutcome::Unchanged;
            }
            let mut domain_removed = false;
            if let Some(count) = self.domain_counts.get_mut(&domain) {
                *count -= 1;
                if *count == 0 {
                    self.domain_counts.remove(&domain);
                    self.active_domains.retain(|d| *d != domain);
                    domain_removed = true;
                    tracing::debug!(%domain, "domain removed from selection");
                }
            }
            ToggleOutcome::Removed { domain_removed }
        }
    }

    /// Set membership of `kind`; returns whether anything changed.
    pub fn toggle_specification(&mut self, kind: Specification, checked: bool) -> bool {
        let active = self.specifications.contains(&kind);
        match (checked, active) {
            (true, false) => {
                self.specifications.push(kind);
                true
            }
            (false, true) => {
                self.specifications.retain(|s| *s != kind);
                true
            }
            _ => false,
        }
    }

    /// Set a permission flag.
    ///
    /// Checking a permission selects the license type that grants it.
    /// Unchecking the permission of the active type falls back to `Rail`.
    pub fn set_permission(&mut self, permission: Permission, checked: bool) {
        if checked {
            self.license_type = permission.license_type();
        } else if self.license_type.grants(permission) {
            self.license_type = LicenseType::Rail;
        }
    }

    /// Exclusively select a license type; the last selection wins.
    pub fn select_license_type(&mut self, license_type: LicenseType) {
        self.license_type = license_type;
    }

    pub fn set_artefact_name(&mut self, name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::EmptyArtefactName);
        }
        self.artefact_name = Some(name.to_string());
        Ok(())
    }

    /// Check the selection is complete enough to advance to submission.
    pub fn readiness(&self) -> Result<(), ValidationError> {
        if !self.is_named() {
            return Err(ValidationError::EmptyArtefactName);
        }
        if self.specifications.is_empty() {
            return Err(ValidationError::NoSpecification);
        }
        Ok(())
    }

    pub fn is_named(&self) -> bool {
        self.artefact_name.is_some()
    }

    pub fn artefact_name(&self) -> Option<&str> {
        self.artefact_name.as_deref()
    }

    pub fn license_type(&self) -> LicenseType {
        self.license_type
    }

    pub fn permission(&self, permission: Permission) -> bool {
        self.license_type.grants(permission)
    }

    /// Active specifications in activation order
    pub fn specifications(&self) -> &[Specification] {
        &self.specifications
    }

    pub fn is_specified(&self, kind: Specification) -> bool {
        self.specifications.contains(&kind)
    }

    /// Domains with at least one active restriction, in activation order
    pub fn active_domains(&self) -> &[DomainId] {
        &self.active_domains
    }

    pub fn is_active(&self, id: RestrictionId) -> bool {
        self.catalog.is_locked(id) || self.active_optional.contains(&id)
    }

    /// Locked restriction ids together with the active optional ones
    pub fn active_restriction_ids(&self) -> BTreeSet<RestrictionId> {
        self.catalog
            .locked_restrictions()
            .map(|r| r.id)
            .chain(self.active_optional.iter().copied())
            .collect()
    }

    pub fn license_label(&self) -> String {
        let code = artifact_code(&self.specifications);
        if code.is_empty() {
            self.license_type.wire_name().to_string()
        } else {
            format!("{}-{}", self.license_type.wire_name(), code)
        }
    }

    /// Terms as they would be submitted right now
    pub fn terms(&self) -> LicenseTerms {
        LicenseTerms {
            name: self.artefact_name.clone(),
            license: self.license_type,
            artifact: artifact_code(&self.specifications),
            data: self.is_specified(Specification::Data),
            application: self.is_specified(Specification::Application),
            model: self.is_specified(Specification::Model),
            sourcecode: self.is_specified(Specification::SourceCode),
            derivatives: self.permission(Permission::Derivatives),
            research_only: self.permission(Permission::ResearchOnly),
            restriction_ids: self.active_restriction_ids(),
        }
    }

    /// Assemble a request, or report that nothing changed since the last one.
    pub fn build_request(&mut self, timestamp: DateTime<Utc>) -> BuildOutcome {
        let terms = self.terms();
        if self.baseline.as_ref() == Some(&terms) {
            tracing::debug!("license terms unchanged since last build");
            return BuildOutcome::Unchanged;
        }
        self.baseline = Some(terms.clone());
        BuildOutcome::Changed(LicenseRequest::new(terms, timestamp))
    }

    /// Reset change detection to `terms`, the last ones actually stored.
    ///
    /// `None` makes the next build `Changed` whatever the selection.
    pub fn restore_baseline(&mut self, terms: Option<LicenseTerms>) {
        self.baseline = terms;
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            restriction_ids: self.active_restriction_ids(),
            active_domains: self.active_domains.clone(),
            specifications: self.specifications.clone(),
            license_type: self.license_type,
            artefact_name: self.artefact_name.clone(),
        }
    }
}
