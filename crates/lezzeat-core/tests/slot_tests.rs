use lezzeat_core::{generate_slots, SlotError, SlotWindow, TimeOfDay};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn tod(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

#[test]
fn canteen_window_labels() {
    let labels: Vec<String> = generate_slots(&SlotWindow::default())
        .into_iter()
        .map(|slot| slot.label)
        .collect();

    assert_eq!(labels.len(), 26);
    assert_eq!(
        &labels[..6],
        ["9:30 AM", "9:45 AM", "10:00 AM", "10:15 AM", "10:30 AM", "10:45 AM"]
    );
    assert!(labels.contains(&"12:00 PM".to_string()));
    assert!(labels.contains(&"12:15 PM".to_string()));
    assert_eq!(labels.last().map(String::as_str), Some("3:45 PM"));
}

#[test]
fn end_not_on_grid_is_not_emitted() {
    let window = SlotWindow::new(tod("09:30"), tod("10:10"), 15).unwrap();
    let labels: Vec<_> = window.iter().map(|s| s.label).collect();
    assert_eq!(labels, ["9:30 AM", "9:45 AM", "10:00 AM"]);
    assert_eq!(window.len(), 3);
}

#[test]
fn single_slot_window() {
    let window = SlotWindow::new(tod("11:00"), tod("11:00"), 30).unwrap();
    let slots = generate_slots(&window);
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].label(), "11:00 AM");
}

#[test]
fn bad_windows() {
    assert_eq!(
        SlotWindow::new(tod("10:00"), tod("10:00"), 0),
        Err(SlotError::ZeroStep)
    );
    assert!(matches!(
        SlotWindow::new(tod("16:00"), tod("15:45"), 15),
        Err(SlotError::InvertedWindow { .. })
    ));
}

#[test]
fn generation_is_repeatable() {
    let window = SlotWindow::default();
    assert_eq!(generate_slots(&window), generate_slots(&window));
}

fn window_strategy() -> impl Strategy<Value = SlotWindow> {
    (0u32..1440)
        .prop_flat_map(|start| (Just(start), start..1440, 1u32..180))
        .prop_map(|(start, end, step)| {
            SlotWindow::new(
                TimeOfDay::from_minutes(start).unwrap(),
                TimeOfDay::from_minutes(end).unwrap(),
                step,
            )
            .unwrap()
        })
}

proptest! {
    #[test]
    fn prop_slots_strictly_increase(window in window_strategy()) {
        let slots = generate_slots(&window);
        prop_assert!(slots.windows(2).all(|pair| pair[0].time < pair[1].time));
    }

    #[test]
    fn prop_slots_stay_on_grid(window in window_strategy()) {
        let start = window.start().minutes();
        for slot in generate_slots(&window) {
            let t = slot.time.minutes();
            prop_assert!(t >= start && t <= window.end().minutes());
            prop_assert_eq!((t - start) % window.step_minutes(), 0);
        }
    }

    #[test]
    fn prop_count_matches_len(window in window_strategy()) {
        let slots = generate_slots(&window);
        prop_assert_eq!(slots.len(), window.len());
        prop_assert_eq!(slots.first().map(|s| s.time), Some(window.start()));
    }

    #[test]
    fn prop_labels_are_unique(window in window_strategy()) {
        let mut labels: Vec<_> = generate_slots(&window).into_iter().map(|s| s.label).collect();
        let before = labels.len();
        labels.sort();
        labels.dedup();
        prop_assert_eq!(labels.len(), before);
    }
}
