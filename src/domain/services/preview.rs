//! Preview render instructions
//!
//! Derives what the live preview and the image banner should show from the
//! current selection. Rendering itself lives in the UI layer.

use serde::Serialize;

use crate::domain::services::SelectionTracker;
use crate::domain::value_objects::{Permission, RestrictionId, Specification};

/// Source whose restrictions come with the RAIL banner logo
pub const RAIL_INITIATIVE: &str = "RAIL Initiative";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub title: String,
    /// Asset file shown in the banner, e.g. `Healthcare.png`
    pub asset: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRestriction {
    pub id: RestrictionId,
    pub text: String,
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewSection {
    pub domain: String,
    pub restrictions: Vec<PreviewRestriction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionLine {
    pub permission: Permission,
    pub granted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub title: Option<String>,
    pub license_label: String,
    pub specifications: Vec<Specification>,
    pub permissions: Vec<PermissionLine>,
    pub badges: Vec<Badge>,
    pub sections: Vec<PreviewSection>,
}

impl Preview {
    pub fn from_tracker(tracker: &SelectionTracker) -> Self {
        let catalog = tracker.catalog();

        let mut badges = Vec::new();
        let locked_source = catalog.locked_source();
        if locked_source.name == RAIL_INITIATIVE {
            badges.push(Badge {
                title: format!("{} Restrictions", locked_source.name),
                asset: "RAIL.png".to_string(),
            });
        }

        let mut sections = Vec::with_capacity(tracker.active_domains().len());
        for domain_id in tracker.active_domains() {
            let Some(domain) = catalog.domain(*domain_id) else {
                continue;
            };
            badges.push(Badge {
                title: format!("{} Restrictions", domain.name),
                asset: format!("{}.png", domain.name),
            });

            let locked = catalog
                .locked_restrictions()
                .filter(|r| r.domain_id == *domain_id);
            let optional = catalog
                .optional_in_domain(*domain_id)
                .filter(|r| tracker.is_active(r.id));
            let restrictions = locked
                .chain(optional)
                .map(|r| PreviewRestriction {
                    id: r.id,
                    text: r.text.clone(),
                    locked: catalog.is_locked(r.id),
                })
                .collect();

            sections.push(PreviewSection {
                domain: domain.name.clone(),
                restrictions,
            });
        }

        let permissions = Permission::ALL
            .iter()
            .map(|p| PermissionLine {
                permission: *p,
                granted: tracker.permission(*p),
            })
            .collect();

        Self {
            title: tracker.artefact_name().map(str::to_string),
            license_label: tracker.license_label(),
            specifications: tracker.specifications().to_vec(),
            permissions,
            badges,
            sections,
        }
    }

    /// Number of restrictions listed across all sections
    pub fn restriction_count(&self) -> usize {
        self.sections.iter().map(|s| s.restrictions.len()).sum()
    }
}
