use arraywrap_values::NotAContainer;
use ecow::EcoString;
use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by wrapper construction, builtin resolution and aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("invalid input: expected {expected}, found {found}")]
    #[diagnostic(code(arraywrap::invalid_input))]
    InvalidInput {
        expected: &'static str,
        found: EcoString,
    },

    #[error("invalid callback `{name}`: {reason}")]
    #[diagnostic(
        code(arraywrap::invalid_callback),
        help("pass a closure, or the name of a supported builtin")
    )]
    InvalidCallback { name: EcoString, reason: &'static str },

    #[error("cannot compute {operation} of an empty array")]
    #[diagnostic(code(arraywrap::empty_aggregate))]
    EmptyAggregate { operation: &'static str },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

impl From<NotAContainer> for Error {
    fn from(err: NotAContainer) -> Self {
        Error::InvalidInput {
            expected: "an array",
            found: EcoString::from(err.found),
        }
    }
}
