use thiserror::Error;

/// Errors surfaced by [`OptParser::parse`](crate::OptParser::parse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// One or more flag-shaped tokens matched no registered option.
    ///
    /// Names are already dash-stripped and listed in the order they
    /// appeared in the argument vector.
    #[error("unknown option: {}", .0.join(", "))]
    UnknownOptions(Vec<String>),
}
