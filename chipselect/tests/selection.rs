use chipselect::selection::{remove_option, toggle_option};
use chipselect::SelectionMirror;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// toggle_option
// =============================================================================

#[test]
fn test_toggle_appends_missing_option_once() {
    let current = strings(&["Apple", "Cherry"]);
    assert_eq!(
        toggle_option(&current, "Banana"),
        strings(&["Apple", "Cherry", "Banana"])
    );
}

#[test]
fn test_toggle_on_empty_selection() {
    assert_eq!(toggle_option(&[], "Banana"), strings(&["Banana"]));
}

#[test]
fn test_toggle_removes_present_option_keeping_order() {
    let current = strings(&["Apple", "Banana", "Cherry", "Date"]);
    assert_eq!(
        toggle_option(&current, "Banana"),
        strings(&["Apple", "Cherry", "Date"])
    );
}

#[test]
fn test_toggle_removes_every_occurrence() {
    let current = strings(&["Apple", "Banana", "Apple", "Cherry"]);
    assert_eq!(toggle_option(&current, "Apple"), strings(&["Banana", "Cherry"]));
}

#[test]
fn test_toggle_does_not_modify_input() {
    let current = strings(&["Apple"]);
    let _ = toggle_option(&current, "Banana");
    assert_eq!(current, strings(&["Apple"]));
}

#[test]
fn test_toggle_twice_restores_sequence_when_appended_last() {
    let current = strings(&["Apple", "Cherry"]);
    let once = toggle_option(&current, "Banana");
    assert_eq!(toggle_option(&once, "Banana"), current);
}

#[test]
fn test_toggle_is_case_sensitive() {
    let current = strings(&["apple"]);
    assert_eq!(toggle_option(&current, "Apple"), strings(&["apple", "Apple"]));
}

// =============================================================================
// remove_option
// =============================================================================

#[test]
fn test_remove_present_option() {
    let current = strings(&["Apple", "Banana", "Cherry"]);
    assert_eq!(remove_option(&current, "Banana"), strings(&["Apple", "Cherry"]));
}

#[test]
fn test_remove_missing_option_is_unchanged_copy() {
    let current = strings(&["Apple", "Cherry"]);
    assert_eq!(remove_option(&current, "Banana"), current);
}

#[test]
fn test_remove_is_idempotent() {
    let current = strings(&["Apple", "Banana", "Cherry", "Banana"]);
    let once = remove_option(&current, "Banana");
    let twice = remove_option(&once, "Banana");
    assert_eq!(once, twice);
    assert_eq!(twice, strings(&["Apple", "Cherry"]));
}

#[test]
fn test_remove_last_option_leaves_empty() {
    assert!(remove_option(&strings(&["Apple"]), "Apple").is_empty());
}

// =============================================================================
// SelectionMirror
// =============================================================================

#[test]
fn test_mirror_starts_with_initial_values() {
    let mirror = SelectionMirror::new(strings(&["Apple"]));
    assert_eq!(mirror.values(), strings(&["Apple"]).as_slice());
    assert_eq!(mirror.len(), 1);
    assert!(mirror.contains("Apple"));
    assert!(!mirror.contains("Banana"));
}

#[test]
fn test_mirror_sync_replaces_wholesale() {
    let mut mirror = SelectionMirror::new(strings(&["Apple", "Banana"]));
    assert!(mirror.sync(&strings(&["Cherry"])));
    assert_eq!(mirror.values(), strings(&["Cherry"]).as_slice());
    assert!(!mirror.contains("Apple"));
}

#[test]
fn test_mirror_sync_identical_reports_unchanged() {
    let mut mirror = SelectionMirror::new(strings(&["Apple", "Banana"]));
    assert!(!mirror.sync(&strings(&["Apple", "Banana"])));
}

#[test]
fn test_mirror_sync_order_matters() {
    let mut mirror = SelectionMirror::new(strings(&["Apple", "Banana"]));
    assert!(mirror.sync(&strings(&["Banana", "Apple"])));
    assert_eq!(mirror.values(), strings(&["Banana", "Apple"]).as_slice());
}

#[test]
fn test_mirror_sync_to_empty() {
    let mut mirror = SelectionMirror::new(strings(&["Apple"]));
    assert!(mirror.sync(&[]));
    assert!(mirror.is_empty());
}
