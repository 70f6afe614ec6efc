#![no_main]

use libfuzzer_sys::fuzz_target;
use railgen::domain::ports::RawCatalog;
use railgen::SelectionTracker;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = serde_json::from_slice::<RawCatalog>(data) else {
        return;
    };
    let Ok(catalog) = raw.into_catalog("RAIL Initiative") else {
        return;
    };

    // Any catalog that validates must be safe to select from
    let ids: Vec<_> = catalog.restrictions().iter().map(|r| r.id).collect();
    let mut tracker = SelectionTracker::new(catalog);
    for id in ids {
        tracker.toggle_restriction(id, true);
    }
    let _ = railgen::Preview::from_tracker(&tracker);
});
