// Host-side tests for show-more batching.

use folio_core::{trigger_visible, RevealConfig, RevealPlanner};

/// Run one activation to completion and return the new hidden count.
fn activate(planner: &mut RevealPlanner, hidden: usize) -> usize {
    let batch = planner.plan(hidden);
    for _ in &batch.steps {
        planner.item_revealed();
    }
    hidden - batch.len()
}

#[test]
fn seven_hidden_items_take_three_activations() {
    let mut planner = RevealPlanner::new(RevealConfig::default());
    let mut hidden = 7;

    hidden = activate(&mut planner, hidden);
    assert_eq!(hidden, 4);
    assert!(trigger_visible(hidden));

    hidden = activate(&mut planner, hidden);
    assert_eq!(hidden, 1);
    assert!(trigger_visible(hidden));

    hidden = activate(&mut planner, hidden);
    assert_eq!(hidden, 0);
    assert!(!trigger_visible(hidden));
}

#[test]
fn batch_is_min_of_three_and_hidden_count() {
    for hidden in 0..10 {
        let mut planner = RevealPlanner::new(RevealConfig::default());
        assert_eq!(planner.plan(hidden).len(), hidden.min(3));
    }
}

#[test]
fn steps_are_staggered_and_settle_after_last_item() {
    let mut planner = RevealPlanner::new(RevealConfig::default());
    let batch = planner.plan(5);
    let delays: Vec<i32> = batch.steps.iter().map(|s| s.delay_ms).collect();
    assert_eq!(delays, vec![0, 100, 200]);
    assert_eq!(batch.settle_ms, 500);
}

#[test]
fn overlapping_activation_skips_in_flight_items() {
    let mut planner = RevealPlanner::new(RevealConfig::default());
    let first = planner.plan(4);
    assert_eq!(first.len(), 3);
    // second click before any timeout fired: all four still carry `.hidden`
    let second = planner.plan(4);
    assert_eq!(second.len(), 1);
    assert_eq!(second.steps[0].hidden_index, 3);
    let third = planner.plan(4);
    assert!(third.is_empty());
    assert_eq!(planner.in_flight(), 4);
}

#[test]
fn repeated_activation_with_nothing_hidden_is_harmless() {
    let mut planner = RevealPlanner::new(RevealConfig::default());
    for _ in 0..3 {
        let batch = planner.plan(0);
        assert!(batch.is_empty());
        planner.item_revealed();
    }
    assert_eq!(planner.in_flight(), 0);
}
