//! License request entity
//!
//! The payload submitted to the license service. `LicenseTerms` carries
//! everything the user chose and is compared by value to decide whether a
//! new submission is needed; the timestamp is stamped on at build time and
//! never takes part in that comparison.

use std::collections::BTreeSet;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::value_objects::{LicenseType, RestrictionId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseTerms {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub license: LicenseType,
    /// Specification codes in canonical order, e.g. `"AM"`
    pub artifact: String,
    pub data: bool,
    pub application: bool,
    pub model: bool,
    pub sourcecode: bool,
    pub derivatives: bool,
    #[serde(rename = "researchOnly")]
    pub research_only: bool,
    pub restriction_ids: BTreeSet<RestrictionId>,
}

impl LicenseTerms {
    /// `OpenRAIL-AM` style label, or the bare type when nothing is specified
    pub fn label(&self) -> String {
        if self.artifact.is_empty() {
            self.license.wire_name().to_string()
        } else {
            format!("{}-{}", self.license.wire_name(), self.artifact)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseRequest {
    #[serde(flatten)]
    pub terms: LicenseTerms,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl LicenseRequest {
    pub fn new(terms: LicenseTerms, timestamp: DateTime<Utc>) -> Self {
        Self { terms, timestamp }
    }
}

/// RFC 3339 with millisecond precision and a `Z` suffix
fn serialize_timestamp<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}
