use super::wizard::*;

use railgen::domain::entities::{Catalog, Domain, Restriction, Source};
use railgen::domain::value_objects::{DomainId, RestrictionId, SourceId, Specification};
use railgen::SelectionTracker;

fn catalog() -> Catalog {
    Catalog::new(
        vec![
            Domain {
                id: DomainId(1),
                name: "General".to_string(),
            },
            Domain {
                id: DomainId(2),
                name: "Healthcare".to_string(),
            },
        ],
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
                id: RestrictionId(5),
                text: "No diagnosis".to_string(),
                domain_id: DomainId(2),
                source_id: SourceId(2),
            },
            Restriction {
                id: RestrictionId(6),
                text: "No insurance scoring".to_string(),
                domain_id: DomainId(2),
                source_id: SourceId(2),
            },
        ],
        "RAIL Initiative",
    )
    .unwrap()
}

#[test]
fn specification_picks_replace_previous_selection() {
    let mut tracker = SelectionTracker::new(catalog());
    apply_specifications(&mut tracker, &[0, 2]);
    assert_eq!(
        tracker.specifications(),
        &[Specification::Data, Specification::Model]
    );

    apply_specifications(&mut tracker, &[2]);
    assert_eq!(tracker.specifications(), &[Specification::Model]);
    assert_eq!(
        specification_defaults(&tracker),
        vec![false, false, true, false]
    );
}

#[test]
fn restriction_options_skip_locked() {
    let catalog = catalog();
    let general = restriction_options(&catalog, DomainId(1));
    assert!(general.is_empty());

    let health = restriction_options(&catalog, DomainId(2));
    let ids: Vec<u32> = health.iter().map(|(id, _)| id.get()).collect();
    assert_eq!(ids, vec![5, 6]);
}

#[test]
fn deselecting_all_restrictions_drops_domain() {
    let mut tracker = SelectionTracker::new(catalog());
    let options = restriction_options(tracker.catalog(), DomainId(2));

    apply_restrictions(&mut tracker, &options, &[1]);
    assert_eq!(tracker.active_domains(), &[DomainId(1), DomainId(2)]);
    assert!(tracker.is_active(RestrictionId(6)));

    apply_restrictions(&mut tracker, &options, &[]);
    assert_eq!(tracker.active_domains(), &[DomainId(1)]);
}

#[test]
fn item_lists_cover_every_choice() {
    assert_eq!(license_type_items().len(), 3);
    assert!(license_type_items()[0].starts_with("OpenRAIL"));
    assert_eq!(specification_items(), vec!["Data", "Application", "Model", "Source Code"]);
    assert_eq!(media_items().len(), MEDIA_TYPES.len());
}
