//! Display state of the navigation bar.
//!
//! The state has no storage of its own: it lives as class membership on the
//! navigation element and is read back before every transition.

use crate::class_list::ClassList;
use crate::config::NavClasses;

/// The two display flags carried by the navigation element.
///
/// `is_visible` only has meaning while `is_fixed` is set: a bar flowing with
/// the page content is always shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavDisplayState {
    pub is_fixed: bool,
    pub is_visible: bool,
}

impl NavDisplayState {
    /// Both classes absent; the state of a freshly loaded page.
    pub const DEFAULT: Self = Self {
        is_fixed: false,
        is_visible: false,
    };

    pub fn read(list: &impl ClassList, classes: &NavClasses) -> Self {
        Self {
            is_fixed: list.contains(&classes.fixed),
            is_visible: list.contains(&classes.visible),
        }
    }

    /// Bring `list` in line with `self`, issuing one `add` and one `remove`
    /// at most.
    pub fn write(&self, list: &mut impl ClassList, classes: &NavClasses) {
        let mut add: Vec<&str> = Vec::with_capacity(2);
        let mut remove: Vec<&str> = Vec::with_capacity(2);
        for (on, class) in [
            (self.is_visible, classes.visible.as_str()),
            (self.is_fixed, classes.fixed.as_str()),
        ] {
            if on {
                add.push(class);
            } else {
                remove.push(class);
            }
        }
        if !remove.is_empty() {
            list.remove(&remove);
        }
        if !add.is_empty() {
            list.add(&add);
        }
    }
}
