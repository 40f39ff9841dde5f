use crate::constants::{DEFAULT_NAV_ID, FIXED_CLASS, VISIBLE_CLASS};
use crate::error::NavError;

/// Names of the two classes that encode the navigation display state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavClasses {
    pub fixed: String,
    pub visible: String,
}

impl Default for NavClasses {
    fn default() -> Self {
        Self {
            fixed: FIXED_CLASS.to_string(),
            visible: VISIBLE_CLASS.to_string(),
        }
    }
}

/// Where the controller mounts and which classes it toggles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavConfig {
    pub nav_id: String,
    pub classes: NavClasses,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            nav_id: DEFAULT_NAV_ID.to_string(),
            classes: NavClasses::default(),
        }
    }
}

impl NavConfig {
    pub fn with_nav_id(mut self, nav_id: impl Into<String>) -> Self {
        self.nav_id = nav_id.into();
        self
    }

    pub fn with_classes(mut self, fixed: impl Into<String>, visible: impl Into<String>) -> Self {
        self.classes = NavClasses {
            fixed: fixed.into(),
            visible: visible.into(),
        };
        self
    }

    /// Reject values a `DOMTokenList` or `getElementById` would not accept.
    pub fn validate(&self) -> Result<(), NavError> {
        if self.nav_id.trim().is_empty() {
            return Err(NavError::InvalidConfig("nav id is empty".into()));
        }
        for (label, class) in [
            ("fixed", &self.classes.fixed),
            ("visible", &self.classes.visible),
        ] {
            if class.is_empty() {
                return Err(NavError::InvalidConfig(format!("{label} class is empty")));
            }
            if class.chars().any(char::is_whitespace) {
                return Err(NavError::InvalidConfig(format!(
                    "{label} class {class:?} contains whitespace"
                )));
            }
        }
        if self.classes.fixed == self.classes.visible {
            return Err(NavError::InvalidConfig(format!(
                "fixed and visible classes are both {:?}",
                self.classes.fixed
            )));
        }
        Ok(())
    }
}
