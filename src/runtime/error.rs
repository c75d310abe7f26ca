use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

pub type Result<T> = std::result::Result<T, ScriptError>;

/// Any error that can occur while evaluating a token against the interpreter.
///
/// Errors are never fatal to the session.  The REPL reports them and keeps
/// reading; the interpreter aborts the rest of the current line or the
/// in-progress definition and returns to normal execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptError {
    /// A pop was attempted on an empty value stack.
    StackUnderflow,

    /// Either operand of `/` or `mod` was zero.
    DivisionByZero,

    /// A token was neither a valid integer nor a known dictionary entry.
    UnknownWord,

    /// A numeric literal was used where a definition name was expected.
    InvalidWord,
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ScriptError::StackUnderflow => write!(f, "stack underflow"),
            ScriptError::DivisionByZero => write!(f, "division by 0"),
            ScriptError::UnknownWord => write!(f, "unknown word"),
            ScriptError::InvalidWord => write!(f, "invalid word"),
        }
    }
}

impl Error for ScriptError {}
