use std::cell::RefCell;
use std::rc::Rc;

use picklist::prelude::*;

type Log = Rc<RefCell<Vec<String>>>;

/// A pick list over `A`, `B`, `C` that records every notification.
fn recording(
    source: Vec<&'static str>,
    target: Vec<&'static str>,
) -> (PickList<&'static str>, Log) {
    let log: Log = Rc::default();
    let on_change = Rc::clone(&log);
    let to_target = Rc::clone(&log);
    let all_to_target = Rc::clone(&log);
    let to_source = Rc::clone(&log);
    let all_to_source = Rc::clone(&log);

    let picklist = PickList::new(PickListConfig::new().filter_by("name"))
        .with_lists(source, target)
        .on_change(move |event| {
            on_change
                .borrow_mut()
                .push(format!("change {:?} {:?}", event.source, event.target));
        })
        .on_move_to_target(move |event| {
            to_target.borrow_mut().push(format!("toTarget {:?}", event.value));
        })
        .on_move_all_to_target(move |event| {
            all_to_target
                .borrow_mut()
                .push(format!("allToTarget {:?}", event.value));
        })
        .on_move_to_source(move |event| {
            to_source.borrow_mut().push(format!("toSource {:?}", event.value));
        })
        .on_move_all_to_source(move |event| {
            all_to_source
                .borrow_mut()
                .push(format!("allToSource {:?}", event.value));
        });

    (picklist, log)
}

#[test]
fn test_to_target_sends_selection() {
    let (mut picklist, log) = recording(vec!["A", "B", "C"], vec![]);
    picklist.change_selection(ListRole::Source, vec!["B"], OriginalEvent::click());

    picklist.transfer(TransferDirection::ToTarget, OriginalEvent::click());

    assert_eq!(
        *log.borrow(),
        vec![
            r#"toTarget ["B"]"#.to_string(),
            r#"change ["A", "C"] ["B"]"#.to_string(),
        ]
    );
    assert!(picklist.selection(ListRole::Source).is_empty());
    assert!(picklist.selection(ListRole::Target).is_empty());
    // The caller's lists are untouched until it re-supplies them.
    assert_eq!(picklist.list(ListRole::Source), &["A", "B", "C"]);
}

#[test]
fn test_all_to_target_sends_full_list() {
    let (mut picklist, log) = recording(vec!["A", "B", "C"], vec![]);
    picklist.change_selection(ListRole::Source, vec!["B"], OriginalEvent::click());

    picklist.transfer(TransferDirection::AllToTarget, OriginalEvent::click());

    assert_eq!(
        *log.borrow(),
        vec![
            r#"allToTarget ["A", "B", "C"]"#.to_string(),
            r#"change [] ["A", "B", "C"]"#.to_string(),
        ]
    );
    assert!(picklist.selection(ListRole::Source).is_empty());
}

#[test]
fn test_to_source_and_all_to_source() {
    let (mut picklist, log) = recording(vec!["A"], vec!["X", "Y"]);
    picklist.change_selection(ListRole::Target, vec!["Y"], OriginalEvent::click());
    picklist.transfer(TransferDirection::ToSource, OriginalEvent::click());
    picklist.transfer(TransferDirection::AllToSource, OriginalEvent::click());

    assert_eq!(
        *log.borrow(),
        vec![
            r#"toSource ["Y"]"#.to_string(),
            r#"change ["A", "Y"] ["X"]"#.to_string(),
            r#"allToSource ["X", "Y"]"#.to_string(),
            r#"change ["A", "X", "Y"] []"#.to_string(),
        ]
    );
}

#[test]
fn test_all_moves_only_visible_items() {
    let (mut picklist, log) = recording(vec!["apple", "banana", "apricot"], vec![]);
    picklist.change_filter(ListRole::Source, "ap", OriginalEvent::text());

    picklist.transfer(TransferDirection::AllToTarget, OriginalEvent::click());

    assert_eq!(
        *log.borrow(),
        vec![
            r#"allToTarget ["apple", "banana", "apricot"]"#.to_string(),
            r#"change ["banana"] ["apple", "apricot"]"#.to_string(),
        ]
    );
}

#[test]
fn test_items_already_on_target_are_not_duplicated() {
    let (picklist, _) = recording(vec!["A", "B"], vec!["B"]);
    let plan = picklist.plan_transfer(TransferDirection::AllToTarget);
    assert_eq!(plan.source, vec!["B"]);
    assert_eq!(plan.target, vec!["B", "A"]);
}

#[test]
fn test_unknown_direction_is_ignored() {
    let (mut picklist, log) = recording(vec!["A", "B"], vec![]);
    picklist.change_selection(ListRole::Source, vec!["A"], OriginalEvent::click());
    picklist.change_filter(ListRole::Source, "a", OriginalEvent::text());

    assert!(!picklist.transfer_named("sideways", OriginalEvent::click()));

    assert!(log.borrow().is_empty());
    assert_eq!(picklist.selection(ListRole::Source), &["A"]);
    assert_eq!(picklist.filter_value(ListRole::Source), "a");
}

#[test]
fn test_named_transfer() {
    let (mut picklist, log) = recording(vec!["A"], vec![]);
    assert!(picklist.transfer_named("allToTarget", OriginalEvent::click()));
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn test_missing_directional_handler_still_resets_and_notifies() {
    let changes = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&changes);
    let mut picklist = PickList::new(PickListConfig::new())
        .with_lists(vec!["A", "B"], vec![])
        .on_change(move |_| *counter.borrow_mut() += 1);
    picklist.change_selection(ListRole::Source, vec!["A"], OriginalEvent::click());

    picklist.transfer(TransferDirection::ToTarget, OriginalEvent::click());

    assert_eq!(*changes.borrow(), 1);
    assert!(picklist.selection(ListRole::Source).is_empty());
}

#[test]
fn test_transfer_clears_controlled_selections_through_handlers() {
    let proposals: Rc<RefCell<Vec<(ListRole, usize)>>> = Rc::default();
    let source_log = Rc::clone(&proposals);
    let target_log = Rc::clone(&proposals);
    let mut picklist = PickList::new(PickListConfig::new())
        .with_lists(vec!["A", "B"], vec!["C"])
        .on_selection_change(ListRole::Source, move |event| {
            source_log.borrow_mut().push((ListRole::Source, event.value.len()));
        })
        .on_selection_change(ListRole::Target, move |event| {
            target_log.borrow_mut().push((ListRole::Target, event.value.len()));
        });
    picklist.set_selection(ListRole::Source, vec!["A"]);

    picklist.transfer(TransferDirection::ToTarget, OriginalEvent::click());

    assert_eq!(
        *proposals.borrow(),
        vec![(ListRole::Source, 0), (ListRole::Target, 0)]
    );
    // Controlled state is only changed by the caller.
    assert_eq!(picklist.selection(ListRole::Source), &["A"]);
}

#[test]
fn test_button_enablement() {
    let (mut picklist, _) = recording(vec!["A"], vec![]);
    assert!(!picklist.can_transfer(TransferDirection::ToTarget));
    assert!(picklist.can_transfer(TransferDirection::AllToTarget));
    assert!(!picklist.can_transfer(TransferDirection::AllToSource));

    picklist.change_selection(ListRole::Source, vec!["A"], OriginalEvent::click());
    assert!(picklist.can_transfer(TransferDirection::ToTarget));
    assert!(!picklist.can_transfer(TransferDirection::ToSource));

    picklist.change_filter(ListRole::Source, "zzz", OriginalEvent::text());
    assert!(!picklist.can_transfer(TransferDirection::AllToTarget));
}

#[test]
fn test_direction_names() {
    for direction in TransferDirection::ALL {
        assert_eq!(direction.as_str().parse::<TransferDirection>(), Ok(direction));
    }
    assert_eq!(
        "up".parse::<TransferDirection>(),
        Err(PickListError::UnknownTransferDirection("up".to_string()))
    );
}

#[test]
fn test_data_key_moves_the_list_record_not_the_selected_copy() {
    use serde_json::{json, Value};

    let moved: Rc<RefCell<Vec<Value>>> = Rc::default();
    let log = Rc::clone(&moved);
    let mut picklist = PickList::new(PickListConfig::new().data_key("id"))
        .with_lists(
            vec![json!({"id": 1, "n": "a"}), json!({"id": 2, "n": "b"})],
            vec![json!({"id": 3, "n": "c"})],
        )
        .on_move_to_target(move |event| log.borrow_mut().extend(event.value.iter().cloned()));

    let stale = json!({"id": 1, "n": "stale"});
    picklist.change_selection(ListRole::Source, vec![stale.clone()], OriginalEvent::click());
    assert!(picklist.is_selected(ListRole::Source, &json!({"id": 1, "n": "a"})));

    let plan = picklist.plan_transfer(TransferDirection::ToTarget);
    assert_eq!(plan.source, vec![json!({"id": 2, "n": "b"})]);
    assert_eq!(
        plan.target,
        vec![json!({"id": 3, "n": "c"}), json!({"id": 1, "n": "a"})]
    );

    picklist.transfer(TransferDirection::ToTarget, OriginalEvent::click());
    // The payload is the selection as the caller supplied it.
    assert_eq!(*moved.borrow(), vec![stale]);
}

#[test]
fn test_data_key_skips_records_already_on_target() {
    use serde_json::json;

    let picklist = PickList::new(PickListConfig::new().data_key("id")).with_lists(
        vec![json!({"id": 1, "n": "a"}), json!({"id": 2, "n": "b"})],
        vec![json!({"id": 1, "n": "renamed"})],
    );

    let plan = picklist.plan_transfer(TransferDirection::AllToTarget);
    assert_eq!(plan.source, vec![json!({"id": 1, "n": "a"})]);
    assert_eq!(
        plan.target,
        vec![json!({"id": 1, "n": "renamed"}), json!({"id": 2, "n": "b"})]
    );
}
