use thiserror::Error;

/// A value that cannot be viewed as a container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected an array, found {found}")]
pub struct NotAContainer {
    /// Kind of the rejected value (`"int"`, `"string"`, ...).
    pub found: &'static str,
}
