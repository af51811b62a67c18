// SPDX-License-Identifier: MPL-2.0
use maintech_ui::overlay::{
    BackdropId, Change, ClickTarget, Coordinator, OverlayEvent, OverlayKey, OverlayKind, Region,
    ToggleId, Transition, SCROLL_LOCKED_CLASS,
};
use proptest::prelude::*;
use std::collections::HashMap;

const REGIONS: [(OverlayKind, &str, Option<&str>, Option<&str>); 9] = [
    (OverlayKind::Modal, "confirm", Some("modal-backdrop"), Some("btn-confirm")),
    (OverlayKind::Modal, "details", Some("modal-backdrop"), Some("btn-details")),
    (OverlayKind::Offcanvas, "filters", Some("filters-backdrop"), Some("btn-filters")),
    (OverlayKind::Offcanvas, "cart", Some("cart-backdrop"), Some("btn-cart")),
    (OverlayKind::Dropdown, "actions", None, Some("btn-actions")),
    (OverlayKind::Dropdown, "user", None, Some("btn-user")),
    (OverlayKind::Popover, "help", None, Some("btn-help")),
    (OverlayKind::Popover, "info", None, Some("btn-info")),
    (OverlayKind::Tooltip, "tip", None, None),
];

const BACKDROPS: [&str; 4] = ["modal-backdrop", "filters-backdrop", "cart-backdrop", "unbound"];
const TOGGLES: [&str; 8] = [
    "btn-confirm",
    "btn-details",
    "btn-filters",
    "btn-cart",
    "btn-actions",
    "btn-user",
    "btn-help",
    "btn-info",
];

#[derive(Debug, Clone)]
enum Op {
    Open(usize),
    Close(usize),
    Toggle(usize),
    CloseAll,
    Escape,
    Backdrop(usize),
    ToggleClick(usize),
    Outside,
    Inside(usize),
    HoverStart,
    HoverEnd,
}

fn coordinator() -> Coordinator {
    let mut coordinator = Coordinator::new();
    for (kind, key, backdrop, toggle) in REGIONS {
        let mut region = Region::new(kind, key);
        if let Some(backdrop) = backdrop {
            region = region.with_backdrop(backdrop);
        }
        if let Some(toggle) = toggle {
            region = region.with_toggle(toggle);
        }
        assert!(coordinator.register(region));
    }
    coordinator
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..REGIONS.len()).prop_map(Op::Open),
        (0..REGIONS.len()).prop_map(Op::Close),
        (0..REGIONS.len()).prop_map(Op::Toggle),
        Just(Op::CloseAll),
        Just(Op::Escape),
        (0..BACKDROPS.len()).prop_map(Op::Backdrop),
        (0..TOGGLES.len()).prop_map(Op::ToggleClick),
        Just(Op::Outside),
        (0..REGIONS.len()).prop_map(Op::Inside),
        Just(Op::HoverStart),
        Just(Op::HoverEnd),
    ]
}

fn apply(coordinator: &mut Coordinator, op: &Op) -> Vec<Transition> {
    let region = |idx: usize| (REGIONS[idx].0, REGIONS[idx].1);
    match *op {
        Op::Open(idx) => {
            let (kind, key) = region(idx);
            coordinator.open(kind, key)
        }
        Op::Close(idx) => {
            let (kind, key) = region(idx);
            coordinator.close(kind, key)
        }
        Op::Toggle(idx) => {
            let (kind, key) = region(idx);
            coordinator.toggle(kind, key)
        }
        Op::CloseAll => coordinator.close_all(None),
        Op::Escape => coordinator.dispatch(&OverlayEvent::Escape),
        Op::Backdrop(idx) => {
            coordinator.dispatch(&OverlayEvent::BackdropClicked(BackdropId::new(BACKDROPS[idx])))
        }
        Op::ToggleClick(idx) => {
            coordinator.dispatch(&OverlayEvent::ToggleClicked(ToggleId::new(TOGGLES[idx])))
        }
        Op::Outside => coordinator.dispatch(&OverlayEvent::Click(ClickTarget::Outside)),
        Op::Inside(idx) => coordinator.dispatch(&OverlayEvent::Click(ClickTarget::Inside(
            OverlayKey::new(REGIONS[idx].1),
        ))),
        Op::HoverStart => coordinator.dispatch(&OverlayEvent::HoverStart(OverlayKey::new("tip"))),
        Op::HoverEnd => coordinator.dispatch(&OverlayEvent::HoverEnd(OverlayKey::new("tip"))),
    }
}

fn snapshot(coordinator: &Coordinator) -> HashMap<&'static str, bool> {
    REGIONS
        .iter()
        .map(|&(_, key, _, _)| (key, coordinator.is_open(key)))
        .collect()
}

fn check_invariants(coordinator: &Coordinator) -> Result<(), TestCaseError> {
    let blocking = REGIONS
        .iter()
        .filter(|(kind, key, _, _)| kind.locks_scroll() && coordinator.is_open(key))
        .count();

    prop_assert_eq!(coordinator.scroll_lock().holders(), blocking);
    prop_assert_eq!(coordinator.is_scroll_locked(), blocking > 0);
    prop_assert_eq!(
        coordinator.body_classes().contains(&SCROLL_LOCKED_CLASS),
        blocking > 0
    );
    prop_assert!(coordinator.open_keys(OverlayKind::Dropdown).count() <= 1);
    prop_assert!(coordinator.open_keys(OverlayKind::Popover).count() <= 1);

    for backdrop in BACKDROPS {
        let bound_open = REGIONS
            .iter()
            .any(|(_, key, b, _)| *b == Some(backdrop) && coordinator.is_open(key));
        prop_assert_eq!(coordinator.is_backdrop_visible(backdrop), bound_open);
    }
    Ok(())
}

proptest! {
    #[test]
    fn invariants_hold_after_every_operation(ops in prop::collection::vec(op(), 1..60)) {
        let mut coordinator = coordinator();
        for op in &ops {
            apply(&mut coordinator, op);
            check_invariants(&coordinator)?;
        }
    }

    #[test]
    fn transitions_describe_exactly_the_state_changes(ops in prop::collection::vec(op(), 1..40)) {
        let mut coordinator = coordinator();
        for op in &ops {
            let before = snapshot(&coordinator);
            let transitions = apply(&mut coordinator, op);
            let after = snapshot(&coordinator);

            let changed: Vec<&str> = REGIONS
                .iter()
                .map(|&(_, key, _, _)| key)
                .filter(|key| before[key] != after[key])
                .collect();
            prop_assert_eq!(transitions.len(), changed.len());

            for transition in &transitions {
                let key = transition.key.as_str();
                prop_assert!(changed.contains(&key));
                let expected = if after[key] { Change::Opened } else { Change::Closed };
                prop_assert_eq!(transition.change, expected);
            }
        }
    }

    #[test]
    fn escape_leaves_no_modal_open(ops in prop::collection::vec(op(), 0..30)) {
        let mut coordinator = coordinator();
        for op in &ops {
            apply(&mut coordinator, op);
        }
        let offcanvas_before: Vec<OverlayKey> =
            coordinator.open_keys(OverlayKind::Offcanvas).cloned().collect();

        coordinator.dispatch(&OverlayEvent::Escape);

        prop_assert!(!coordinator.has_open(OverlayKind::Modal));
        let offcanvas_after: Vec<OverlayKey> =
            coordinator.open_keys(OverlayKind::Offcanvas).cloned().collect();
        prop_assert_eq!(offcanvas_before, offcanvas_after);
    }

    #[test]
    fn outside_click_closes_every_floating_panel(ops in prop::collection::vec(op(), 0..30)) {
        let mut coordinator = coordinator();
        for op in &ops {
            apply(&mut coordinator, op);
        }
        let modals_before = coordinator.open_keys(OverlayKind::Modal).count();

        coordinator.dispatch(&OverlayEvent::Click(ClickTarget::Outside));

        prop_assert!(!coordinator.has_open(OverlayKind::Dropdown));
        prop_assert!(!coordinator.has_open(OverlayKind::Popover));
        prop_assert_eq!(coordinator.open_keys(OverlayKind::Modal).count(), modals_before);
    }
}

#[test]
fn shared_backdrop_click_closes_both_modals_and_unlocks() {
    let mut coordinator = coordinator();
    coordinator.open(OverlayKind::Modal, "confirm");
    coordinator.open(OverlayKind::Modal, "details");
    assert_eq!(coordinator.scroll_lock().holders(), 2);

    let transitions =
        coordinator.dispatch(&OverlayEvent::BackdropClicked(BackdropId::new("modal-backdrop")));

    assert_eq!(transitions.len(), 2);
    assert!(!coordinator.is_scroll_locked());
}

#[test]
fn modal_then_offcanvas_keeps_lock_until_both_close() {
    let mut coordinator = coordinator();
    coordinator.open(OverlayKind::Modal, "confirm");
    coordinator.open(OverlayKind::Offcanvas, "filters");

    coordinator.close(OverlayKind::Modal, "confirm");
    assert!(coordinator.is_scroll_locked());

    coordinator.close(OverlayKind::Offcanvas, "filters");
    assert!(!coordinator.is_scroll_locked());
}

#[test]
fn inside_click_keeps_that_panel_open() {
    let mut coordinator = coordinator();
    coordinator.dispatch(&OverlayEvent::ToggleClicked(ToggleId::new("btn-actions")));
    coordinator.dispatch(&OverlayEvent::Click(ClickTarget::Inside(OverlayKey::new("actions"))));
    assert!(coordinator.is_open("actions"));
}
