use crate::*;

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

fn layout(capacity: usize) -> GridLayout {
    GridLayout::new(GridOptions::new(capacity)).expect("capacity >= 1")
}

#[test]
fn partition_preserves_order_and_capacities() {
    let mut g = layout(2);
    let items = ["a", "b", "c", "d", "e"];

    let mut groups: Vec<(usize, Vec<&str>)> = Vec::new();
    g.update_contents(&items, |grp| groups.push((grp.index, grp.items.to_vec())));

    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0], (0, vec!["a", "b"]));
    assert_eq!(groups[1], (1, vec!["c", "d"]));
    assert_eq!(groups[2], (2, vec!["e"]));
    assert_eq!(g.data_count(), 5);
    assert_eq!(g.group_count(), 3);
}

#[test]
fn concatenating_groups_reproduces_input() {
    let mut g = layout(3);
    let items: Vec<u32> = (0..10).collect();

    let mut flat = Vec::new();
    let mut lens = Vec::new();
    g.update_contents(&items, |grp| {
        flat.extend_from_slice(grp.items);
        lens.push(grp.len());
    });

    assert_eq!(flat, items);
    // Every group is full except the last, which is partial but non-empty.
    assert_eq!(lens, vec![3, 3, 3, 1]);
}

#[test]
fn empty_input_yields_no_groups() {
    let mut g = layout(3);
    let items: [u32; 0] = [];

    let mut emitted = 0usize;
    g.update_contents(&items, |_| emitted += 1);

    assert_eq!(emitted, 0);
    assert_eq!(g.data_count(), 0);
    assert_eq!(g.group_count(), 0);
    assert!(g.is_empty());
}

#[test]
fn exact_multiple_fills_every_group() {
    let mut g = layout(3);
    let items: Vec<u32> = (0..6).collect();

    let mut lens = Vec::new();
    g.update_contents(&items, |grp| lens.push(grp.len()));

    assert_eq!(lens, vec![3, 3]);
    assert_eq!(g.group_count(), 2);
}

#[test]
fn group_of_is_floor_division() {
    let g = layout(2);
    assert_eq!(g.group_of(0), 0);
    assert_eq!(g.group_of(1), 0);
    assert_eq!(g.group_of(4), 2);
    assert_eq!(g.slot_of(4), 0);
    assert_eq!(g.position_of(5), CellPosition { group: 2, slot: 1 });
}

#[test]
fn mapping_ignores_data_count() {
    let mut g = layout(4);
    g.update_count(10);
    assert_eq!(g.group_count(), 3);
    // Out-of-range item indexes map to out-of-range group indexes unchecked.
    assert_eq!(g.group_of(100), 25);
}

#[test]
fn first_item_and_group_len() {
    let mut g = layout(4);
    g.update_count(10);
    assert_eq!(g.first_item_of_group(0), 0);
    assert_eq!(g.first_item_of_group(2), 8);
    assert_eq!(g.group_len(0), 4);
    assert_eq!(g.group_len(1), 4);
    assert_eq!(g.group_len(2), 2);
    assert_eq!(g.group_len(3), 0);
}

#[test]
fn zero_capacity_fails_fast() {
    assert_eq!(
        GridOptions::new(0).validate(),
        Err(ConfigError::GroupCapacity { capacity: 0 })
    );
    let err = GridLayout::new(GridOptions::new(0)).unwrap_err();
    assert_eq!(err, ConfigError::GroupCapacity { capacity: 0 });
}

#[test]
fn set_group_capacity_recomputes_group_count() {
    let mut g = layout(4);
    g.update_count(10);
    assert_eq!(g.group_count(), 3);

    g.set_group_capacity(5).expect("capacity >= 1");
    assert_eq!(g.group_count(), 2);

    // A zero capacity is rejected and leaves the current capacity in place.
    let err = g.set_group_capacity(0).unwrap_err();
    assert_eq!(err, ConfigError::GroupCapacity { capacity: 0 });
    assert_eq!(g.group_capacity(), 5);
    assert_eq!(g.group_count(), 2);
}

#[test]
fn update_contents_repartitions_after_capacity_change() {
    let mut g = layout(2);
    let items: Vec<u32> = (0..5).collect();

    let mut lens = Vec::new();
    g.update_contents(&items, |grp| lens.push(grp.len()));
    assert_eq!(lens, vec![2, 2, 1]);

    g.set_group_capacity(3).expect("capacity >= 1");
    lens.clear();
    g.update_contents(&items, |grp| lens.push(grp.len()));
    assert_eq!(lens, vec![3, 2]);
}

#[test]
fn on_change_reports_new_data_count() {
    let seen = Arc::new(AtomicUsize::new(usize::MAX));
    let seen_in_cb = Arc::clone(&seen);
    let mut g = GridLayout::new(GridOptions::new(2).with_on_change(Some(
        move |g: &GridLayout| seen_in_cb.store(g.data_count(), Ordering::Relaxed),
    )))
    .expect("capacity >= 1");

    g.update_contents(&[1, 2, 3], |_| {});
    assert_eq!(seen.load(Ordering::Relaxed), 3);
}

#[test]
fn setters_notify_and_skip_no_ops() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_in_cb = Arc::clone(&calls);
    let mut g = GridLayout::new(GridOptions::new(2).with_on_change(Some(
        move |_: &GridLayout| {
            calls_in_cb.fetch_add(1, Ordering::Relaxed);
        },
    )))
    .expect("capacity >= 1");

    g.set_cell_size(10);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    g.set_cell_size(10);
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    g.set_axis(Axis::Horizontal);
    assert_eq!(calls.load(Ordering::Relaxed), 2);
    g.set_axis(Axis::Horizontal);
    assert_eq!(calls.load(Ordering::Relaxed), 2);

    g.update_count(0); // already 0
    assert_eq!(calls.load(Ordering::Relaxed), 2);
    g.update_count(4);
    assert_eq!(calls.load(Ordering::Relaxed), 3);
}

#[test]
fn context_snapshot_tracks_state() {
    let mut g = GridLayout::new(
        GridOptions::new(3)
            .with_axis(Axis::Horizontal)
            .with_start_axis_spacing(4)
            .with_cell_size(32),
    )
    .expect("capacity >= 1");
    g.update_count(7);

    assert_eq!(
        g.context(),
        GroupContext {
            axis: Axis::Horizontal,
            group_capacity: 3,
            group_count: 3,
            start_axis_spacing: 4,
            cell_size: 32,
        }
    );
}

#[test]
fn alignment_is_clamped() {
    assert_eq!(Alignment::new(1.5).fraction(), 1.0);
    assert_eq!(Alignment::new(-0.25).fraction(), 0.0);
    assert_eq!(Alignment::new(0.3).fraction(), 0.3);
    assert_eq!(Alignment::default(), Alignment::CENTER);
}

#[test]
fn collect_groups_leaves_data_count_alone() {
    let g = layout(2);
    let items = [1, 2, 3];

    let mut out = Vec::new();
    g.collect_groups(&items, &mut out);

    assert_eq!(out.len(), 2);
    assert_eq!(
        out[0],
        Group {
            index: 0,
            items: &[1, 2]
        }
    );
    assert_eq!(
        out[1],
        Group {
            index: 1,
            items: &[3]
        }
    );
    assert_eq!(g.data_count(), 0);
}
