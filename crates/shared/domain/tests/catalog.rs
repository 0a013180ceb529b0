use std::collections::HashSet;
use vesla_domain::catalog::{
    MODULE_CARD_FEATURES, MODULES, PRICING_PLANS, STATS, TESTIMONIALS, public_modules,
};

#[test]
fn public_modules_exclude_restricted_entries() {
    let public = public_modules();
    assert!(public.iter().all(|m| m.visibility.is_public()));
    assert!(public.iter().all(|m| m.id != "speed-sync"));

    let hidden = MODULES
        .iter()
        .find(|m| m.id == "speed-sync")
        .expect("restricted module is still catalogued");
    assert!(!hidden.visibility.is_public());
}

#[test]
fn public_modules_keep_catalogue_order() {
    let expected: Vec<&str> =
        MODULES.iter().filter(|m| m.visibility.is_public()).map(|m| m.id).collect();
    let actual: Vec<&str> = public_modules().iter().map(|m| m.id).collect();
    assert_eq!(actual, expected);
    assert_eq!(actual.len(), 10);
    assert_eq!(actual.first(), Some(&"rent-a-car"));
}

#[test]
fn public_filter_is_computed_once() {
    assert!(std::ptr::eq(public_modules(), public_modules()));
}

#[test]
fn module_ids_are_unique() {
    let ids: HashSet<&str> = MODULES.iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), MODULES.len());
}

#[test]
fn module_cards_show_three_features() {
    for module in MODULES {
        let shown = module.card_features();
        assert_eq!(shown.len(), module.features.len().min(MODULE_CARD_FEATURES));
        assert_eq!(shown, &module.features[..shown.len()]);
    }
}

#[test]
fn exactly_one_plan_is_popular() {
    let popular: Vec<&str> = PRICING_PLANS.iter().filter(|p| p.popular).map(|p| p.name).collect();
    assert_eq!(popular, ["Professional"]);
}

#[test]
fn stats_and_testimonials_are_populated() {
    let targets: Vec<u64> = STATS.iter().map(|s| s.value).collect();
    assert_eq!(targets, [10, 50, 99, 24]);
    assert_eq!(TESTIMONIALS.len(), 3);
}
