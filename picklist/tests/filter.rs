use std::cell::RefCell;
use std::rc::Rc;

use picklist::filter::{normalize_query, FieldFilter, FilterEngine};
use picklist::prelude::*;
use serde_json::{json, Value};

fn products() -> Vec<Value> {
    vec![
        json!({"code": "f230", "name": "Bamboo Watch", "category": "Accessories"}),
        json!({"code": "nvk1", "name": "Black Watch", "category": "Accessories"}),
        json!({"code": "zz21", "name": "Blue Band", "category": "Fitness"}),
        json!({"code": "244w", "name": "Blue T-Shirt", "category": null}),
    ]
}

fn names(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.field("name"))
        .collect()
}

fn filtered(config: PickListConfig) -> PickList<Value> {
    PickList::new(config).with_lists(products(), products())
}

#[test]
fn test_no_query_shows_everything() {
    let picklist = filtered(PickListConfig::new().filter_by("name"));
    assert_eq!(picklist.visible(ListRole::Source), products());
}

#[test]
fn test_contains_is_case_insensitive_and_trimmed() {
    let mut picklist = filtered(PickListConfig::new().filter_by("name"));
    picklist.change_filter(ListRole::Source, "  WATCH ", OriginalEvent::text());
    assert_eq!(
        names(&picklist.visible(ListRole::Source)),
        vec!["Bamboo Watch", "Black Watch"]
    );
}

#[test]
fn test_filter_is_idempotent_and_restorable() {
    let mut picklist = filtered(PickListConfig::new().filter_by("name"));
    picklist.change_filter(ListRole::Source, "blue", OriginalEvent::text());
    let first = picklist.visible(ListRole::Source);
    let second = picklist.visible(ListRole::Source);
    assert_eq!(first, second);
    assert_eq!(names(&first), vec!["Blue Band", "Blue T-Shirt"]);

    picklist.change_filter(ListRole::Source, "", OriginalEvent::text());
    assert_eq!(picklist.visible(ListRole::Source), products());
}

#[test]
fn test_roles_filter_independently() {
    let mut picklist = filtered(PickListConfig::new().filter_by("name"));
    picklist.change_filter(ListRole::Target, "band", OriginalEvent::text());
    assert_eq!(picklist.visible(ListRole::Source).len(), 4);
    assert_eq!(names(&picklist.visible(ListRole::Target)), vec!["Blue Band"]);
}

#[test]
fn test_filter_disabled_passes_everything_through() {
    let mut picklist = filtered(PickListConfig::new());
    picklist.change_filter(ListRole::Source, "watch", OriginalEvent::text());
    assert_eq!(picklist.filter_value(ListRole::Source), "watch");
    assert_eq!(picklist.visible(ListRole::Source), products());

    let mut blank = filtered(PickListConfig::new().filter_by(" , "));
    blank.change_filter(ListRole::Source, "watch", OriginalEvent::text());
    assert_eq!(blank.visible(ListRole::Source), products());
}

#[test]
fn test_any_field_may_match() {
    let mut picklist = filtered(PickListConfig::new().filter_by("name, category"));
    picklist.change_filter(ListRole::Source, "fitness", OriginalEvent::text());
    assert_eq!(names(&picklist.visible(ListRole::Source)), vec!["Blue Band"]);
}

#[test]
fn test_match_modes() {
    let engine = FieldFilter;
    let fields = vec!["name".to_string()];
    let list = products();
    let run = |query: &str, mode: MatchMode| {
        names(&engine.filter(&list, &fields, query, mode, None))
    };

    assert_eq!(run("bl", MatchMode::StartsWith), vec!["Black Watch", "Blue Band", "Blue T-Shirt"]);
    assert_eq!(run("watch", MatchMode::EndsWith), vec!["Bamboo Watch", "Black Watch"]);
    assert_eq!(run("blue band", MatchMode::Equals), vec!["Blue Band"]);
    assert_eq!(run("blue band", MatchMode::NotEquals).len(), 3);
    assert_eq!(run("blue", MatchMode::NotContains), vec!["Bamboo Watch", "Black Watch"]);
    assert_eq!(run("bbnd", MatchMode::Fuzzy), vec!["Blue Band"]);
}

#[test]
fn test_missing_field_matches_only_negated_modes() {
    let engine = FieldFilter;
    let fields = vec!["category".to_string()];
    let run = |query: &str, mode: MatchMode| {
        names(&engine.filter(&products(), &fields, query, mode, None))
    };

    // "Blue T-Shirt" has a null category.
    assert_eq!(
        run("fit", MatchMode::NotContains),
        vec!["Bamboo Watch", "Black Watch", "Blue T-Shirt"]
    );
    assert_eq!(
        run("fitness", MatchMode::NotEquals),
        vec!["Bamboo Watch", "Black Watch", "Blue T-Shirt"]
    );
    assert_eq!(run("fit", MatchMode::Contains), vec!["Blue Band"]);
    assert_eq!(run("fitness", MatchMode::Equals), vec!["Blue Band"]);
    assert_eq!(run("", MatchMode::StartsWith).len(), 4);

    let sparse = vec![
        json!({"name": "Yoga Mat"}),
        json!({"name": "Gaming Set", "category": "Electronics"}),
    ];
    let matched = engine.filter(&sparse, &fields, "fit", MatchMode::NotContains, None);
    assert_eq!(names(&matched), vec!["Yoga Mat", "Gaming Set"]);
}

#[test]
fn test_accents_are_ignored() {
    let cafes = vec![
        json!({"name": "Café Crème"}),
        json!({"name": "Cafeteria"}),
        json!({"name": "Tea House"}),
    ];
    let mut picklist =
        PickList::new(PickListConfig::new().filter_by("name")).with_lists(cafes, vec![]);

    picklist.change_filter(ListRole::Source, "cafe", OriginalEvent::text());
    assert_eq!(
        names(&picklist.visible(ListRole::Source)),
        vec!["Café Crème", "Cafeteria"]
    );

    picklist.change_filter(ListRole::Source, "CRÈME", OriginalEvent::text());
    assert_eq!(names(&picklist.visible(ListRole::Source)), vec!["Café Crème"]);
}

#[test]
fn test_locale_applies_to_query_and_fields() {
    let cities = vec![json!({"name": "IĞDIR"}), json!({"name": "İzmir"})];
    let mut picklist = PickList::new(PickListConfig::new().filter_by("name").filter_locale("tr"))
        .with_lists(cities, vec![]);

    picklist.change_filter(ListRole::Source, "Iğ", OriginalEvent::text());
    assert_eq!(names(&picklist.visible(ListRole::Source)), vec!["IĞDIR"]);

    picklist.change_filter(ListRole::Source, "İZ", OriginalEvent::text());
    assert_eq!(names(&picklist.visible(ListRole::Source)), vec!["İzmir"]);
}

#[test]
fn test_normalize_query_uses_locale() {
    assert_eq!(normalize_query(" TITLE ", Some("tr")), "tıtle");
    assert_eq!(normalize_query(" TITLE ", None), "title");
}

#[test]
fn test_controlled_filter_delegates() {
    let seen: Rc<RefCell<Vec<String>>> = Rc::default();
    let log = Rc::clone(&seen);
    let mut picklist = filtered(PickListConfig::new().filter_by("name"))
        .on_filter_change(ListRole::Source, move |event| {
            log.borrow_mut().push(event.value.clone());
        });

    picklist.change_filter(ListRole::Source, "watch", OriginalEvent::text());
    assert_eq!(*seen.borrow(), vec!["watch".to_string()]);
    assert_eq!(picklist.filter_value(ListRole::Source), "");
    assert_eq!(picklist.visible(ListRole::Source).len(), 4);

    picklist.set_filter_value(ListRole::Source, "watch");
    assert_eq!(picklist.visible(ListRole::Source).len(), 2);
}

#[test]
fn test_shows_filter_requires_fields() {
    let picklist = filtered(PickListConfig::new().show_filter(ListRole::Target, false));
    assert!(!picklist.shows_filter(ListRole::Source));

    let picklist = filtered(
        PickListConfig::new()
            .filter_by("name")
            .show_filter(ListRole::Target, false),
    );
    assert!(picklist.shows_filter(ListRole::Source));
    assert!(!picklist.shows_filter(ListRole::Target));
}

struct PrefixEngine;

impl FilterEngine<Value> for PrefixEngine {
    fn filter(
        &self,
        list: &[Value],
        _fields: &[String],
        query: &str,
        _mode: MatchMode,
        _locale: Option<&str>,
    ) -> Vec<Value> {
        list.iter()
            .filter(|item| item.field("code").is_some_and(|code| code.starts_with(query)))
            .cloned()
            .collect()
    }
}

#[test]
fn test_custom_engine() {
    let mut picklist =
        filtered(PickListConfig::new().filter_by("name")).with_filter_engine(PrefixEngine);
    picklist.change_filter(ListRole::Source, "NV", OriginalEvent::text());
    assert_eq!(names(&picklist.visible(ListRole::Source)), vec!["Black Watch"]);
}
