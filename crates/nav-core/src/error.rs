use thiserror::Error;

/// Failures surfaced while wiring the navigation controller into a page.
///
/// All of these are integration errors detected at startup; once mounted, the
/// scroll transitions themselves cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("no window")]
    MissingWindow,
    #[error("no document")]
    MissingDocument,
    #[error("document has no body")]
    MissingBody,
    #[error("missing #{0}")]
    MissingNavElement(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("dom call failed: {0}")]
    Dom(String),
}
