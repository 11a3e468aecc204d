use std::fmt::{Display, Formatter};

/// Error type for expression construction and table operations.
///
/// All errors are raised synchronously at the point of misuse.
/// Every operation is atomic: on error, no node or column is left
/// half-created.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The requested connective token is not registered.
    UnknownOperation(String),
    /// Malformed builder call (e.g. a primitive built from a non-token operand).
    InvalidArguments(String),
    /// Supplied values or shapes do not match the expected nesting.
    ShapeMismatch { expected: String, supplied: String },
    /// Operation is illegal in the node's current state (e.g. rebinding a composite).
    InvalidState(String),
    /// A variable name was declared more than once.
    DuplicateVariable(String),
    /// A shape references a variable that the table does not declare.
    UnknownVariable(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownOperation(token) => write!(f, "unknown operation {:?}", token),
            Error::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
            Error::ShapeMismatch { expected, supplied } => {
                write!(f, "shape mismatch: expected {}, got {}", expected, supplied)
            }
            Error::InvalidState(msg) => write!(f, "invalid state: {}", msg),
            Error::DuplicateVariable(name) => write!(f, "duplicate variable {:?}", name),
            Error::UnknownVariable(name) => write!(f, "unknown variable {:?}", name),
        }
    }
}

impl std::error::Error for Error {}
