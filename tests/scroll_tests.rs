// Host-side tests for the scroll transition table and controller.
// The main crate is wasm-only, so these drive nav-core through ClassSet.

use nav_core::{
    transition, ClassList, ClassSet, NavClasses, NavDisplayState, ScrollDirection,
    ScrollNavController, FIXED_CLASS, VISIBLE_CLASS,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NAV_HEIGHT: f64 = 150.0;

fn controller() -> ScrollNavController {
    ScrollNavController::new(NAV_HEIGHT, NavClasses::default())
}

fn state_of(nav: &ClassSet) -> NavDisplayState {
    NavDisplayState::read(nav, &NavClasses::default())
}

const FIXED: NavDisplayState = NavDisplayState {
    is_fixed: true,
    is_visible: false,
};
const REVEALED: NavDisplayState = NavDisplayState {
    is_fixed: true,
    is_visible: true,
};

#[test]
fn classify_direction() {
    assert_eq!(ScrollDirection::classify(100.0, 50.0), ScrollDirection::Up);
    assert_eq!(ScrollDirection::classify(50.0, 100.0), ScrollDirection::Down);
    // No movement counts as scrolling down
    assert_eq!(ScrollDirection::classify(10.0, 10.0), ScrollDirection::Down);
}

#[test]
fn controller_starts_at_top() {
    let c = controller();
    assert_eq!(c.previous_offset(), 0.0);
    assert_eq!(c.threshold(), NAV_HEIGHT);
    assert_eq!(c.classes(), &NavClasses::default());
}

#[test]
fn scrolling_down_past_nav_height_pins_bar() {
    let mut c = controller();
    let mut nav = ClassSet::new();
    for offset in [0.0, 50.0, 100.0] {
        assert_eq!(c.on_scroll(offset, &mut nav), ScrollDirection::Down);
        assert_eq!(state_of(&nav), NavDisplayState::DEFAULT);
    }
    assert_eq!(c.on_scroll(200.0, &mut nav), ScrollDirection::Down);
    assert_eq!(state_of(&nav), FIXED);
    assert_eq!(c.previous_offset(), 200.0);
}

#[test]
fn scroll_up_reveals_then_top_resets() {
    let mut c = controller();
    let mut nav = ClassSet::new();
    for offset in [0.0, 50.0, 100.0, 200.0] {
        c.on_scroll(offset, &mut nav);
    }

    assert_eq!(c.on_scroll(150.0, &mut nav), ScrollDirection::Up);
    assert_eq!(state_of(&nav), REVEALED);

    assert_eq!(c.on_scroll(0.0, &mut nav), ScrollDirection::Up);
    assert_eq!(state_of(&nav), NavDisplayState::DEFAULT);
    assert!(nav.is_empty());
}

#[test]
fn offset_exactly_at_nav_height_does_not_pin() {
    let mut c = controller();
    let mut nav = ClassSet::new();
    c.on_scroll(NAV_HEIGHT, &mut nav);
    assert_eq!(state_of(&nav), NavDisplayState::DEFAULT);
    c.on_scroll(NAV_HEIGHT + 1.0, &mut nav);
    assert_eq!(state_of(&nav), FIXED);
}

#[test]
fn unchanged_offset_is_down_and_hides() {
    let mut c = controller();
    let mut nav = ClassSet::new();
    c.on_scroll(10.0, &mut nav);
    assert_eq!(c.on_scroll(10.0, &mut nav), ScrollDirection::Down);
    assert_eq!(state_of(&nav), NavDisplayState::DEFAULT);

    // Same tie-break while revealed: the bar slides away but stays pinned
    let mut nav: ClassSet = [FIXED_CLASS, VISIBLE_CLASS].into_iter().collect();
    let mut c = controller();
    c.on_scroll(300.0, &mut nav);
    assert_eq!(c.on_scroll(300.0, &mut nav), ScrollDirection::Down);
    assert_eq!(state_of(&nav), FIXED);
}

#[test]
fn scroll_up_while_not_pinned_stays_hidden() {
    let mut c = controller();
    let mut nav = ClassSet::new();
    c.on_scroll(100.0, &mut nav);
    assert_eq!(c.on_scroll(60.0, &mut nav), ScrollDirection::Up);
    assert_eq!(state_of(&nav), NavDisplayState::DEFAULT);
}

#[test]
fn transition_table() {
    let h = NAV_HEIGHT;
    // Up, above the top, pinned: reveal
    assert_eq!(transition(FIXED, 300.0, 250.0, h).0, REVEALED);
    assert_eq!(transition(REVEALED, 300.0, 250.0, h).0, REVEALED);
    // Up to the top clears everything, whatever the prior state
    assert_eq!(transition(REVEALED, 300.0, 0.0, h).0, NavDisplayState::DEFAULT);
    assert_eq!(transition(FIXED, 300.0, 0.0, h).0, NavDisplayState::DEFAULT);
    // Up while flowing with the page: clear
    assert_eq!(
        transition(NavDisplayState::DEFAULT, 300.0, 250.0, h).0,
        NavDisplayState::DEFAULT
    );
    // Down below the threshold: nothing pinned
    assert_eq!(
        transition(NavDisplayState::DEFAULT, 0.0, 100.0, h).0,
        NavDisplayState::DEFAULT
    );
    // Down past the threshold: pin
    assert_eq!(transition(NavDisplayState::DEFAULT, 100.0, 200.0, h).0, FIXED);
    // Down while revealed: hide, keep pinned even below the threshold
    assert_eq!(transition(REVEALED, 50.0, 60.0, h).0, FIXED);
}

#[test]
fn external_class_edits_are_respected() {
    let mut c = controller();
    let mut nav = ClassSet::new();
    c.on_scroll(400.0, &mut nav);
    assert_eq!(state_of(&nav), FIXED);

    // Something else unpinned the bar; scrolling up must not reveal it
    nav.remove(&[FIXED_CLASS]);
    c.on_scroll(350.0, &mut nav);
    assert_eq!(state_of(&nav), NavDisplayState::DEFAULT);
}

#[test]
fn unrelated_classes_are_untouched() {
    let mut c = controller();
    let mut nav: ClassSet = ["navbar", "navbar-expand-lg"].into_iter().collect();
    for offset in [0.0, 400.0, 300.0, 0.0] {
        c.on_scroll(offset, &mut nav);
        assert!(nav.contains("navbar"));
        assert!(nav.contains("navbar-expand-lg"));
    }
    assert_eq!(nav.len(), 2);
}

#[test]
fn custom_class_names() {
    let classes = NavClasses {
        fixed: "pinned".to_string(),
        visible: "shown".to_string(),
    };
    let mut c = ScrollNavController::new(NAV_HEIGHT, classes);
    let mut nav = ClassSet::new();
    c.on_scroll(400.0, &mut nav);
    c.on_scroll(300.0, &mut nav);
    assert_eq!(nav.iter().collect::<Vec<_>>(), vec!["pinned", "shown"]);
    assert!(!nav.contains(FIXED_CLASS));
}

#[test]
fn visible_implies_fixed_for_random_sequences() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let mut c = controller();
        let mut nav = ClassSet::new();
        let mut offset = 0.0_f64;
        c.on_scroll(offset, &mut nav);
        for _ in 0..64 {
            offset = match rng.gen_range(0..6) {
                0 => 0.0,
                1 => offset,
                2 => NAV_HEIGHT,
                _ => (offset + rng.gen_range(-120.0..120.0)).max(0.0),
            };
            c.on_scroll(offset, &mut nav);
            let s = state_of(&nav);
            assert!(
                !s.is_visible || s.is_fixed,
                "visible without fixed at offset {offset}"
            );
        }
    }
}

#[test]
fn stray_visible_class_is_cleared() {
    // Up while unpinned clears a visible class left without fixed
    let mut c = controller();
    let mut nav: ClassSet = [VISIBLE_CLASS].into_iter().collect();
    c.on_scroll(100.0, &mut nav);
    assert_eq!(state_of(&nav), NavDisplayState::DEFAULT);
    nav.add(&[VISIBLE_CLASS]);
    assert_eq!(c.on_scroll(50.0, &mut nav), ScrollDirection::Up);
    assert_eq!(state_of(&nav), NavDisplayState::DEFAULT);

    // Down past the nav height pins and drops the visible class
    let mut c = controller();
    let mut nav: ClassSet = [VISIBLE_CLASS].into_iter().collect();
    assert_eq!(c.on_scroll(200.0, &mut nav), ScrollDirection::Down);
    assert_eq!(state_of(&nav), FIXED);
}
