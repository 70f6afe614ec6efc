//! License wizard

use anyhow::{Context, Result};
use chrono::Utc;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use railgen::application::write_download;
use railgen::config::Config;
use railgen::domain::value_objects::{
    DomainId, LicenseType, MediaType, RestrictionId, Specification, ValidationError,
};
use railgen::presentation::HttpLicenseSession;
use railgen::{Catalog, FinishOutcome, SelectionTracker};

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;
use crate::ui::theme::RailTheme;
use crate::ui::views::interactive::{render_banner, render_step};
use crate::ui::views::preview::render_preview;
use crate::ui::views::receipt::{render_receipt, ReceiptView};

const STEPS: usize = 5;

pub(crate) const MEDIA_TYPES: [MediaType; 3] =
    [MediaType::Markdown, MediaType::Plain, MediaType::Html];

pub fn run_wizard(session: &mut HttpLicenseSession, config: &Config, ui: &UiContext) -> Result<()> {
    let theme = RailTheme::new(ui.unicode);
    print!("{}", render_banner(ui.color, ui.unicode));

    print!("{}", render_step(1, STEPS, "What are you licensing?", ui.color));
    let name: String = Input::with_theme(&theme)
        .with_prompt("Artefact name")
        .validate_with(|input: &String| -> Result<(), String> {
            if input.is_empty() {
                Err(ValidationError::EmptyArtefactName.to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    session.tracker_mut().set_artefact_name(&name)?;

    print!("{}", render_step(2, STEPS, "License type", ui.color));
    let current = session.tracker().license_type();
    let choice = Select::with_theme(&theme)
        .with_prompt("Which RAIL license?")
        .items(&license_type_items())
        .default(LicenseType::ALL.iter().position(|t| *t == current).unwrap_or(0))
        .interact()?;
    session
        .tracker_mut()
        .select_license_type(LicenseType::ALL[choice]);

    print!("{}", render_step(3, STEPS, "Artefact types", ui.color));
    loop {
        let defaults = specification_defaults(session.tracker());
        let picked = MultiSelect::with_theme(&theme)
            .with_prompt("Select everything the license covers")
            .items(&specification_items())
            .defaults(&defaults)
            .interact()?;
        apply_specifications(session.tracker_mut(), &picked);

        match session.tracker().readiness() {
            Err(ValidationError::NoSpecification) => {
                let mut notice = WarningBlock::new("Nothing selected");
                notice.add_line(ValidationError::NoSpecification.to_string());
                eprint!("{}", notice.render(ui.color, ui.unicode));
            }
            other => {
                other?;
                break;
            }
        }
    }

    print!("{}", render_step(4, STEPS, "Use restrictions", ui.color));
    let domains: Vec<(DomainId, String)> = session
        .tracker()
        .catalog()
        .domains_with_optional()
        .into_iter()
        .map(|d| (d.id, d.name.clone()))
        .collect();
    for (domain_id, domain_name) in domains {
        let options = restriction_options(session.tracker().catalog(), domain_id);
        let labels: Vec<&str> = options.iter().map(|(_, text)| text.as_str()).collect();
        let defaults: Vec<bool> = options
            .iter()
            .map(|(id, _)| session.tracker().is_active(*id))
            .collect();

        let picked = MultiSelect::with_theme(&theme)
            .with_prompt(format!("{domain_name} restrictions"))
            .items(&labels)
            .defaults(&defaults)
            .interact()?;
        apply_restrictions(session.tracker_mut(), &options, &picked);
    }

    print!("{}", render_step(5, STEPS, "Review", ui.color));
    print!(
        "{}",
        render_preview(&session.preview(), ui.caps.width, ui.color, ui.unicode)
    );

    let submit = Confirm::with_theme(&theme)
        .with_prompt("Submit this license?")
        .default(true)
        .interact()?;
    if !submit {
        println!("Nothing was submitted.");
        return Ok(());
    }

    let outcome = session.finish(Utc::now())?;
    let media = config.license.media_type;
    let url = session.download_url(media)?;
    let label = session.tracker().license_label();
    let view = ReceiptView {
        receipt: outcome.receipt(),
        label: &label,
        submitted: matches!(outcome, FinishOutcome::Submitted(_)),
        url: &url,
        written: None,
    };
    print!("{}", render_receipt(&view, ui.color, ui.unicode));

    let download = Confirm::with_theme(&theme)
        .with_prompt("Download the license text now?")
        .default(true)
        .interact()?;
    if !download {
        return Ok(());
    }

    let default_format = MEDIA_TYPES.iter().position(|m| *m == media).unwrap_or(0);
    let format = Select::with_theme(&theme)
        .with_prompt("Format")
        .items(&media_items())
        .default(default_format)
        .interact()?;
    let dir: String = Input::with_theme(&theme)
        .with_prompt("Save into directory")
        .default(".".to_string())
        .interact_text()?;

    let generated = session.download(MEDIA_TYPES[format])?;
    let path = write_download(std::path::Path::new(dir.trim()), &generated)
        .with_context(|| format!("Failed to write license into {}", dir.trim()))?;
    println!(
        "{} {}",
        crate::ui::primitives::icon::Icon::Download.colored(ui.color, ui.unicode),
        path.display()
    );
    Ok(())
}

pub(crate) fn license_type_items() -> Vec<String> {
    LicenseType::ALL
        .iter()
        .map(|t| format!("{:<13} {}", t.wire_name(), t.summary()))
        .collect()
}

pub(crate) fn specification_items() -> Vec<&'static str> {
    Specification::ALL.iter().map(|s| s.display_name()).collect()
}

pub(crate) fn specification_defaults(tracker: &SelectionTracker) -> Vec<bool> {
    Specification::ALL
        .iter()
        .map(|s| tracker.is_specified(*s))
        .collect()
}

/// Toggle every specification to match the picked indices.
pub(crate) fn apply_specifications(tracker: &mut SelectionTracker, picked: &[usize]) {
    for (i, spec) in Specification::ALL.iter().enumerate() {
        tracker.toggle_specification(*spec, picked.contains(&i));
    }
}

/// Optional restrictions offered for `domain`, in catalog order
pub(crate) fn restriction_options(catalog: &Catalog, domain: DomainId) -> Vec<(RestrictionId, String)> {
    catalog
        .optional_in_domain(domain)
        .map(|r| (r.id, r.text.clone()))
        .collect()
}

pub(crate) fn apply_restrictions(
    tracker: &mut SelectionTracker,
    options: &[(RestrictionId, String)],
    picked: &[usize],
) {
    for (i, (id, _)) in options.iter().enumerate() {
        tracker.toggle_restriction(*id, picked.contains(&i));
    }
}

pub(crate) fn media_items() -> Vec<String> {
    MEDIA_TYPES
        .iter()
        .map(|m| format!("{:<5} {}", m.extension(), m.mime()))
        .collect()
}
