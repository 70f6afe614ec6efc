//! License Session Use Case
//!
//! Drives one license composition from catalog load to download: owns the
//! selection tracker, decides when a submission is needed, and remembers
//! what was last stored by the service.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::download::{download_file_name, Download};
use crate::domain::entities::{Catalog, CatalogError, LicenseTerms};
use crate::domain::ports::{CatalogProvider, LicenseReceipt, LicenseService, ServiceError};
use crate::domain::services::{BuildOutcome, Preview, SelectionTracker};
use crate::domain::value_objects::{MediaType, ValidationError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("no license has been submitted yet")]
    NotSubmitted,
}

/// Result of `LicenseSession::finish`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishOutcome {
    /// Terms changed and were stored under a new id
    Submitted(LicenseReceipt),
    /// Terms equal the last submission; its receipt is reused
    Unchanged(LicenseReceipt),
}

impl FinishOutcome {
    pub fn receipt(&self) -> &LicenseReceipt {
        match self {
            FinishOutcome::Submitted(r) | FinishOutcome::Unchanged(r) => r,
        }
    }
}

#[derive(Debug, Clone)]
struct Submission {
    receipt: LicenseReceipt,
    terms: LicenseTerms,
}

pub struct LicenseSession<S: LicenseService> {
    tracker: SelectionTracker,
    service: S,
    submitted: Option<Submission>,
}

impl<S: LicenseService> LicenseSession<S> {
    pub fn new(catalog: Catalog, service: S) -> Self {
        Self {
            tracker: SelectionTracker::new(catalog),
            service,
            submitted: None,
        }
    }

    /// Fetch the catalog from `provider` and start a fresh selection.
    pub fn load<P>(provider: &P, locked_source: &str, service: S) -> Result<Self, SessionError>
    where
        P: CatalogProvider + ?Sized,
    {
        let catalog = provider.fetch_catalog()?.into_catalog(locked_source)?;
        tracing::info!(
            restrictions = catalog.restrictions().len(),
            locked = catalog.locked_restrictions().count(),
            "catalog loaded"
        );
        Ok(Self::new(catalog, service))
    }

    pub fn tracker(&self) -> &SelectionTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut SelectionTracker {
        &mut self.tracker
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn preview(&self) -> Preview {
        Preview::from_tracker(&self.tracker)
    }

    /// Submit the current terms unless they equal the last submission.
    ///
    /// Change detection compares against the last stored terms, never
    /// against a build that was declined or failed. On any failure the
    /// selections are left as they were.
    pub fn finish(&mut self, now: DateTime<Utc>) -> Result<FinishOutcome, SessionError> {
        self.tracker.readiness()?;
        let stored = self.submitted_terms().cloned();
        self.tracker.restore_baseline(stored);

        let request = match self.tracker.build_request(now) {
            BuildOutcome::Changed(request) => request,
            BuildOutcome::Unchanged => {
                return match &self.submitted {
                    Some(s) => Ok(FinishOutcome::Unchanged(s.receipt.clone())),
                    None => Err(SessionError::NotSubmitted),
                };
            }
        };

        match self.service.submit(&request) {
            Ok(receipt) => {
                tracing::info!(id = %receipt.id, label = %request.terms.label(), "license submitted");
                self.submitted = Some(Submission {
                    receipt: receipt.clone(),
                    terms: request.terms,
                });
                Ok(FinishOutcome::Submitted(receipt))
            }
            Err(err) => {
                let stored = self.submitted_terms().cloned();
                self.tracker.restore_baseline(stored);
                Err(err.into())
            }
        }
    }

    pub fn is_download_ready(&self) -> bool {
        self.submitted.is_some()
    }

    pub fn receipt(&self) -> Option<&LicenseReceipt> {
        self.submitted.as_ref().map(|s| &s.receipt)
    }

    /// Terms of the last successful submission
    pub fn submitted_terms(&self) -> Option<&LicenseTerms> {
        self.submitted.as_ref().map(|s| &s.terms)
    }

    pub fn download_url(&self, media: MediaType) -> Result<String, SessionError> {
        let submission = self.submitted.as_ref().ok_or(SessionError::NotSubmitted)?;
        Ok(self.service.generate_url(&submission.receipt.id, media))
    }

    /// Fetch the generated text of the last submission.
    pub fn download(&self, media: MediaType) -> Result<Download, SessionError> {
        let submission = self.submitted.as_ref().ok_or(SessionError::NotSubmitted)?;
        let id = &submission.receipt.id;
        let content = self.service.generate(id, media)?;

        Ok(Download {
            file_name: download_file_name(
                submission.terms.name.as_deref().unwrap_or_default(),
                &submission.terms.label(),
                media,
            ),
            url: self.service.generate_url(id, media),
            media,
            content,
        })
    }
}
