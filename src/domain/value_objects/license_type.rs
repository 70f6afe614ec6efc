//! License type and permission value objects
//!
//! Each license type implies a fixed set of permissions. Toggling a
//! permission on therefore selects the license type linked to it, and
//! selecting a license type resets the permissions to what it implies.

use serde::{Deserialize, Serialize};

/// RAIL license family member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum)]
pub enum LicenseType {
    /// Open access, derivatives allowed
    #[default]
    #[serde(rename = "OpenRAIL", alias = "open-rail")]
    #[value(alias = "openrail")]
    OpenRail,
    /// Research use only
    #[serde(rename = "ResearchRAIL", alias = "research-rail")]
    #[value(alias = "researchrail")]
    ResearchRail,
    /// Restricted, no additional permissions
    #[serde(rename = "RAIL", alias = "rail")]
    Rail,
}

impl LicenseType {
    pub const ALL: [LicenseType; 3] = [
        LicenseType::OpenRail,
        LicenseType::ResearchRail,
        LicenseType::Rail,
    ];

    /// Name sent to the license service and used in labels
    pub fn wire_name(&self) -> &'static str {
        match self {
            LicenseType::OpenRail => "OpenRAIL",
            LicenseType::ResearchRail => "ResearchRAIL",
            LicenseType::Rail => "RAIL",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            LicenseType::OpenRail => "Open access; derivatives may be distributed",
            LicenseType::ResearchRail => "Use limited to research purposes",
            LicenseType::Rail => "No additional permissions beyond the restrictions",
        }
    }

    /// The permission this license type grants, if any
    pub fn linked_permission(&self) -> Option<Permission> {
        match self {
            LicenseType::OpenRail => Some(Permission::Derivatives),
            LicenseType::ResearchRail => Some(Permission::ResearchOnly),
            LicenseType::Rail => None,
        }
    }

    /// Whether this license type grants `permission`
    pub fn grants(&self, permission: Permission) -> bool {
        self.linked_permission() == Some(permission)
    }

    /// Parse a user-facing name (`openrail`, `OpenRAIL`, `open-rail`, ...)
    pub fn parse(value: &str) -> Option<Self> {
        let normalized: String = value
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "openrail" | "open" => Some(LicenseType::OpenRail),
            "researchrail" | "research" => Some(LicenseType::ResearchRail),
            "rail" => Some(LicenseType::Rail),
            _ => None,
        }
    }
}

impl std::fmt::Display for LicenseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Boolean license term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Permission {
    /// Distribution of derivatives is allowed
    Derivatives,
    /// Use is limited to research
    ResearchOnly,
}

impl Permission {
    pub const ALL: [Permission; 2] = [Permission::Derivatives, Permission::ResearchOnly];

    /// The license type that grants this permission
    pub fn license_type(&self) -> LicenseType {
        match self {
            Permission::Derivatives => LicenseType::OpenRail,
            Permission::ResearchOnly => LicenseType::ResearchRail,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Permission::Derivatives => "Derivatives",
            Permission::ResearchOnly => "Research only",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
