//! Seam between the navigation logic and an element's class membership.
//!
//! The browser front-end implements [`ClassList`] over a `DOMTokenList`; host
//! code and tests use the in-memory [`ClassSet`].

use std::collections::BTreeSet;

/// Minimal view of an element's `classList`.
pub trait ClassList {
    fn contains(&self, class: &str) -> bool;
    /// Add every class in `classes`; already-present classes are left alone.
    fn add(&mut self, classes: &[&str]);
    /// Remove every class in `classes`; absent classes are ignored.
    fn remove(&mut self, classes: &[&str]);
}

/// Ordered in-memory class list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassSet {
    classes: BTreeSet<String>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for ClassSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            classes: iter.into_iter().map(str::to_string).collect(),
        }
    }
}

impl ClassList for ClassSet {
    fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn add(&mut self, classes: &[&str]) {
        for class in classes {
            self.classes.insert((*class).to_string());
        }
    }

    fn remove(&mut self, classes: &[&str]) {
        for class in classes {
            self.classes.remove(*class);
        }
    }
}
