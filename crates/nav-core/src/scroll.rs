use crate::class_list::ClassList;
use crate::config::NavClasses;
use crate::constants::TOP_OFFSET;
use crate::state::NavDisplayState;

/// Direction inferred from two consecutive scroll offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    /// Also covers an unchanged offset.
    Down,
}

impl ScrollDirection {
    #[inline]
    pub fn classify(previous: f64, current: f64) -> Self {
        if current < previous {
            ScrollDirection::Up
        } else {
            ScrollDirection::Down
        }
    }
}

/// Apply one scroll event to the display state.
///
/// `threshold` is the navigation bar height: the bar only gets pinned once the
/// page has scrolled further than the bar is tall.
pub fn transition(
    state: NavDisplayState,
    previous: f64,
    current: f64,
    threshold: f64,
) -> (NavDisplayState, ScrollDirection) {
    let direction = ScrollDirection::classify(previous, current);
    let next = match direction {
        ScrollDirection::Up if current > TOP_OFFSET && state.is_fixed => NavDisplayState {
            is_fixed: true,
            is_visible: true,
        },
        ScrollDirection::Up => {
            log::debug!("[nav] scrolled up to {current}, unpinning");
            NavDisplayState::DEFAULT
        }
        ScrollDirection::Down => NavDisplayState {
            is_fixed: state.is_fixed || current > threshold,
            is_visible: false,
        },
    };
    (next, direction)
}

/// Tracks the last scroll offset and keeps the navigation classes in sync.
#[derive(Clone, Debug)]
pub struct ScrollNavController {
    previous_offset: f64,
    threshold: f64,
    classes: NavClasses,
}

impl ScrollNavController {
    pub fn new(threshold: f64, classes: NavClasses) -> Self {
        Self {
            previous_offset: TOP_OFFSET,
            threshold,
            classes,
        }
    }

    pub fn previous_offset(&self) -> f64 {
        self.previous_offset
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn classes(&self) -> &NavClasses {
        &self.classes
    }

    /// Handle one scroll event at offset `current`.
    pub fn on_scroll(&mut self, current: f64, nav: &mut impl ClassList) -> ScrollDirection {
        let state = NavDisplayState::read(&*nav, &self.classes);
        let (next, direction) = transition(state, self.previous_offset, current, self.threshold);
        if next != state {
            log::debug!(
                "[nav] {:?} {} -> {}: fixed={} visible={}",
                direction,
                self.previous_offset,
                current,
                next.is_fixed,
                next.is_visible
            );
        }
        next.write(nav, &self.classes);
        self.previous_offset = current;
        direction
    }
}
