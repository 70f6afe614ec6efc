//! Property tests for the selection tracker.

use std::collections::BTreeSet;

use proptest::prelude::*;

use railgen::domain::entities::{Catalog, Domain, Restriction, Source};
use railgen::domain::services::BuildOutcome;
use railgen::domain::value_objects::{
    DomainId, LicenseType, Permission, RestrictionId, SourceId, Specification,
};
use railgen::SelectionTracker;

/// Three domains, two sources; restrictions 1..=3 are locked, 10..=21 optional.
fn catalog() -> Catalog {
    let domains = (1..=3)
        .map(|i| Domain {
            id: DomainId(i),
            name: format!("Domain {i}"),
        })
        .collect();
    let sources = vec![
        Source {
            id: SourceId(1),
            name: "RAIL Initiative".to_string(),
        },
        Source {
            id: SourceId(2),
            name: "Community".to_string(),
        },
    ];
    let locked = (1..=3).map(|i| Restriction {
        id: RestrictionId(i),
        text: format!("Locked {i}"),
        domain_id: DomainId(1),
        source_id: SourceId(1),
    });
    let optional = (10..=21).map(|i| Restriction {
        id: RestrictionId(i),
        text: format!("Optional {i}"),
        domain_id: DomainId(1 + i % 3),
        source_id: SourceId(2),
    });
    Catalog::new(
        domains,
        sources,
        locked.chain(optional).collect(),
        "RAIL Initiative",
    )
    .unwrap()
}

/// `(restriction id, checked)` pairs, including locked and unknown ids
fn toggles() -> impl Strategy<Value = Vec<(u32, bool)>> {
    proptest::collection::vec((0u32..=25, any::<bool>()), 0..=40)
}

fn expected_domains(tracker: &SelectionTracker) -> BTreeSet<DomainId> {
    let catalog = tracker.catalog();
    tracker
        .active_restriction_ids()
        .into_iter()
        .filter_map(|id| catalog.restriction(id).map(|r| r.domain_id))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: active domains are exactly the domains of active restrictions, without duplicates.
    #[test]
    fn property_active_domains_track_active_restrictions(ops in toggles()) {
        let mut tracker = SelectionTracker::new(catalog());
        for (id, checked) in ops {
            tracker.toggle_restriction(RestrictionId(id), checked);

            let active: Vec<DomainId> = tracker.active_domains().to_vec();
            let unique: BTreeSet<DomainId> = active.iter().copied().collect();
            prop_assert_eq!(active.len(), unique.len());
            prop_assert_eq!(unique, expected_domains(&tracker));
        }
    }

    /// PROPERTY: locked restrictions stay active whatever is toggled.
    #[test]
    fn property_locked_restrictions_always_active(ops in toggles()) {
        let mut tracker = SelectionTracker::new(catalog());
        for (id, checked) in ops {
            tracker.toggle_restriction(RestrictionId(id), checked);
        }
        for id in 1..=3 {
            prop_assert!(tracker.is_active(RestrictionId(id)));
        }
        prop_assert!(tracker.active_domains().contains(&DomainId(1)));
    }

    /// PROPERTY: checking then unchecking a restriction restores the prior state.
    #[test]
    fn property_toggle_on_off_restores_state(ops in toggles(), id in 10u32..=21) {
        let mut tracker = SelectionTracker::new(catalog());
        for (other, checked) in ops {
            if other != id {
                tracker.toggle_restriction(RestrictionId(other), checked);
            }
        }
        tracker.toggle_restriction(RestrictionId(id), false);
        let before = tracker.snapshot();

        tracker.toggle_restriction(RestrictionId(id), true);
        tracker.toggle_restriction(RestrictionId(id), false);

        let after = tracker.snapshot();
        prop_assert_eq!(before.restriction_ids, after.restriction_ids);
        let before_domains: BTreeSet<_> = before.active_domains.into_iter().collect();
        let after_domains: BTreeSet<_> = after.active_domains.into_iter().collect();
        prop_assert_eq!(before_domains, after_domains);
    }

    /// PROPERTY: the license type always grants exactly the permissions reported.
    #[test]
    fn property_permissions_follow_license_type(
        ops in proptest::collection::vec((0usize..2, any::<bool>(), 0usize..3, any::<bool>()), 0..=20)
    ) {
        let mut tracker = SelectionTracker::new(catalog());
        for (perm, checked, license, select) in ops {
            if select {
                tracker.select_license_type(LicenseType::ALL[license]);
            } else {
                tracker.set_permission(Permission::ALL[perm], checked);
            }
            let granted: Vec<bool> = Permission::ALL.iter().map(|p| tracker.permission(*p)).collect();
            prop_assert!(granted.iter().filter(|g| **g).count() <= 1);
            prop_assert_eq!(
                tracker.terms().derivatives,
                tracker.license_type() == LicenseType::OpenRail
            );
        }
    }

    /// PROPERTY: building twice without changes never yields a second request.
    #[test]
    fn property_unchanged_terms_build_once(
        specs in proptest::collection::vec(0usize..4, 1..=4),
        ops in toggles(),
    ) {
        let mut tracker = SelectionTracker::new(catalog());
        tracker.set_artefact_name("Foo").unwrap();
        for s in specs {
            tracker.toggle_specification(Specification::ALL[s], true);
        }
        for (id, checked) in ops {
            tracker.toggle_restriction(RestrictionId(id), checked);
        }

        let now = chrono::Utc::now();
        prop_assert!(tracker.build_request(now).is_changed());
        prop_assert_eq!(tracker.build_request(now), BuildOutcome::Unchanged);
    }
}
