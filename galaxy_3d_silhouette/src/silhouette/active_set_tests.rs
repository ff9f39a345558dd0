use super::*;
use crate::error::Error;
use serial_test::serial;

fn sorted_ids(set: &ActiveSet) -> Vec<u32> {
    let mut ids = set.ids().to_vec();
    ids.sort_unstable();
    ids
}

// ============================================================================
// Add / remove
// ============================================================================

#[test]
fn test_new_is_empty() {
    let set = ActiveSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert!(ActiveSet::default().is_empty());
}

#[test]
fn test_add_and_remove() {
    let mut set = ActiveSet::with_capacity(4);
    set.add(3);
    set.add(7);
    set.add(1);
    assert_eq!(set.len(), 3);

    set.remove(7).unwrap();
    assert_eq!(sorted_ids(&set), vec![1, 3]);

    set.remove(3).unwrap();
    set.remove(1).unwrap();
    assert!(set.is_empty());
}

#[test]
fn test_remove_swaps_last_into_hole() {
    let mut set = ActiveSet::new();
    set.add(10);
    set.add(20);
    set.add(30);

    set.remove(10).unwrap();
    assert_eq!(set.ids(), &[30, 20]);
}

#[test]
fn test_remove_takes_only_one_duplicate() {
    let mut set = ActiveSet::new();
    set.add(5);
    set.add(5);

    set.remove(5).unwrap();
    assert_eq!(set.ids(), &[5]);
    set.remove(5).unwrap();
    assert!(set.is_empty());
}

#[test]
fn test_clear() {
    let mut set = ActiveSet::new();
    set.add(1);
    set.add(2);
    set.clear();
    assert!(set.is_empty());
}

// ============================================================================
// Invariant violation
// ============================================================================

#[test]
#[serial]
fn test_remove_missing_is_invariant_violation() {
    let mut set = ActiveSet::new();
    set.add(1);

    let result = set.remove(2);
    assert!(matches!(result, Err(Error::InvariantViolation(msg)) if msg.contains("occluder 2")));
    // Set is left untouched
    assert_eq!(set.ids(), &[1]);
}

#[test]
#[serial]
fn test_remove_from_empty_is_invariant_violation() {
    let mut set = ActiveSet::new();
    assert!(matches!(set.remove(0), Err(Error::InvariantViolation(_))));
}
