use super::*;
use crate::i18n::translations;
use crate::mock::integrations_seed;
use crate::state::language::Language;

#[test]
fn active_flag_maps_to_badge_status() {
    let seed = integrations_seed();
    let active = seed.get("int-sap").unwrap();
    let inactive = seed.get("int-legacy").unwrap();
    assert_eq!(active_status(active), Status::Active);
    assert_eq!(active_status(inactive), Status::Inactive);
}

#[test]
fn columns_are_built_in_display_order() {
    Owner::new().with(|| {
        let store = RwSignal::new(IntegrationsState::seeded());
        let cols = columns(translations(Language::En), store);
        let keys: Vec<&str> = cols.iter().map(|c| c.key).collect();
        assert_eq!(keys, ["name", "provider", "type", "status", "updated", "actions"]);
        assert_eq!(cols[1].class, Some("data-table__cell--mono"));
        assert_eq!(cols[0].class, None);
    });
}
