//! Non-interactive license composition

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;

use railgen::application::write_download;
use railgen::config::Config;
use railgen::domain::services::{IgnoreReason, ToggleOutcome};
use railgen::domain::value_objects::{
    LicenseType, MediaType, Permission, RestrictionId, Specification,
};
use railgen::presentation::create_license_session;
use railgen::{FinishOutcome, LicenseRequest, RailError, SelectionTracker};

use crate::ui::context::UiContext;
use crate::ui::views::receipt::{render_receipt, ReceiptView};

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub name: String,
    pub license: Option<LicenseType>,
    pub specs: Vec<Specification>,
    pub restrictions: Vec<u32>,
    pub no_derivatives: bool,
    pub research_only: bool,
    pub dry_run: bool,
    pub format: Option<MediaType>,
    pub output: Option<PathBuf>,
}

/// Apply command-line choices to a fresh selection.
///
/// The license type goes first so the permission flags can override it.
pub(crate) fn apply_options(tracker: &mut SelectionTracker, opts: &GenerateOptions) -> Result<()> {
    tracker.set_artefact_name(&opts.name)?;

    if let Some(license) = opts.license {
        tracker.select_license_type(license);
    }
    if opts.no_derivatives {
        tracker.set_permission(Permission::Derivatives, false);
    }
    if opts.research_only {
        tracker.set_permission(Permission::ResearchOnly, true);
    }

    for spec in &opts.specs {
        tracker.toggle_specification(*spec, true);
    }

    for &id in &opts.restrictions {
        match tracker.toggle_restriction(RestrictionId(id), true) {
            ToggleOutcome::Ignored(IgnoreReason::Unknown) => {
                return Err(RailError::InvalidValue {
                    field: "restriction",
                    value: id.to_string(),
                }
                .into());
            }
            ToggleOutcome::Ignored(IgnoreReason::Locked) => {
                tracing::info!(id, "restriction is mandatory and always included");
            }
            _ => {}
        }
    }
    Ok(())
}

pub fn cmd_generate(opts: GenerateOptions, config: &Config, ui: &UiContext) -> Result<()> {
    let mut session = create_license_session(config)?;
    apply_options(session.tracker_mut(), &opts)?;

    if opts.dry_run {
        session.tracker().readiness()?;
        let request = LicenseRequest::new(session.tracker().terms(), Utc::now());
        if ui.json {
            crate::ui::json::emit_event("request", &request)?;
        } else {
            eprint!(
                "{}",
                crate::ui::views::preview::render_preview(
                    &session.preview(),
                    ui.caps.width,
                    ui.color,
                    ui.unicode
                )
            );
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        return Ok(());
    }

    let outcome = session.finish(Utc::now())?;
    let media = opts.format.unwrap_or(config.license.media_type);
    let url = session.download_url(media)?;

    let written = match &opts.output {
        Some(dir) => {
            let download = session.download(media)?;
            let path = write_download(dir, &download)
                .with_context(|| format!("Failed to write license into {}", dir.display()))?;
            Some(path)
        }
        None => None,
    };

    let label = session.tracker().license_label();
    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "receipt",
            "id": outcome.receipt().id,
            "label": label,
            "submitted": matches!(outcome, FinishOutcome::Submitted(_)),
            "url": url,
            "path": written.as_ref().map(|p| p.display().to_string()),
        }))?;
    } else {
        let view = ReceiptView {
            receipt: outcome.receipt(),
            label: &label,
            submitted: matches!(outcome, FinishOutcome::Submitted(_)),
            url: &url,
            written: written.as_deref(),
        };
        print!("{}", render_receipt(&view, ui.color, ui.unicode));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use railgen::domain::entities::{Catalog, Domain, Restriction, Source};
    use railgen::domain::value_objects::{DomainId, SourceId};

    fn tracker() -> SelectionTracker {
        let catalog = Catalog::new(
            vec![Domain {
                id: DomainId(1),
                name: "General".to_string(),
            }],
            vec![
                Source {
                    id: SourceId(1),
                    name: "RAIL Initiative".to_string(),
                },
                Source {
                    id: SourceId(2),
                    name: "Community".to_string(),
                },
            ],
            vec![
                Restriction {
                    id: RestrictionId(1),
                    text: "No harm".to_string(),
                    domain_id: DomainId(1),
                    source_id: SourceId(1),
                },
                Restriction {
                    id: RestrictionId(7),
                    text: "No surveillance".to_string(),
                    domain_id: DomainId(1),
                    source_id: SourceId(2),
                },
            ],
            "RAIL Initiative",
        )
        .unwrap();
        SelectionTracker::new(catalog)
    }

    fn opts() -> GenerateOptions {
        GenerateOptions {
            name: "Foo".to_string(),
            specs: vec![Specification::Model],
            ..GenerateOptions::default()
        }
    }

    #[test]
    fn permission_flags_override_license() {
        let mut t = tracker();
        let o = GenerateOptions {
            license: Some(LicenseType::OpenRail),
            no_derivatives: true,
            ..opts()
        };
        apply_options(&mut t, &o).unwrap();
        assert_eq!(t.license_type(), LicenseType::Rail);
        assert_eq!(t.license_label(), "RAIL-M");
    }

    #[test]
    fn research_only_selects_research_rail() {
        let mut t = tracker();
        let o = GenerateOptions {
            research_only: true,
            ..opts()
        };
        apply_options(&mut t, &o).unwrap();
        assert_eq!(t.license_type(), LicenseType::ResearchRail);
    }

    #[test]
    fn optional_and_locked_restrictions_are_accepted() {
        let mut t = tracker();
        let o = GenerateOptions {
            restrictions: vec![7, 1],
            ..opts()
        };
        apply_options(&mut t, &o).unwrap();
        let ids: Vec<u32> = t.active_restriction_ids().iter().map(|r| r.get()).collect();
        assert_eq!(ids, vec![1, 7]);
    }

    #[test]
    fn unknown_restriction_is_rejected() {
        let mut t = tracker();
        let o = GenerateOptions {
            restrictions: vec![99],
            ..opts()
        };
        let err = apply_options(&mut t, &o).unwrap_err();
        assert!(err.to_string().contains("'99'"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut t = tracker();
        let o = GenerateOptions {
            name: "  ".to_string(),
            ..opts()
        };
        assert!(apply_options(&mut t, &o).is_err());
    }
}
