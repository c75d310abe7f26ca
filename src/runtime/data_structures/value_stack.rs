use crate::runtime::error::{self, ScriptError};
use std::fmt::{self, Display, Formatter};

/// The data stack of integer values managed by the interpreter.
///
/// Values are kept in push order, so the last element of the underlying
/// vector is the top of the stack.  There is no capacity bound beyond
/// available memory, and no concurrent access.
#[derive(Clone, Default)]
pub struct ValueStack {
    values: Vec<i64>,
}

impl ValueStack {
    /// Create a new empty value stack.
    pub fn new() -> ValueStack {
        ValueStack { values: Vec::new() }
    }

    /// Push a value onto the top of the stack.  This can not fail.
    pub fn push(&mut self, value: i64) {
        self.values.push(value);
    }

    /// Pop the top value off of the stack.  If the stack is empty a stack
    /// underflow error is returned.
    pub fn pop(&mut self) -> error::Result<i64> {
        self.values.pop().ok_or(ScriptError::StackUnderflow)
    }

    /// How many values are currently on the stack?
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Is the stack empty?
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate the stack values from the bottom up.
    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.values.iter()
    }
}

/// Pretty print the stack for the repl's `.s` word.  Values are listed from
/// the top of the stack down, with the first and last values marked.  An
/// empty stack prints nothing.
impl Display for ValueStack {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let top = self.values.len().wrapping_sub(1);

        for (index, value) in self.values.iter().enumerate().rev() {
            let marker = if index == top {
                "<-- TOP     (last in)"
            } else if index == 0 {
                "<-- BOTTOM (first in)"
            } else {
                ""
            };

            writeln!(f, "{}{:>24}", value, marker)?;
        }

        Ok(())
    }
}
