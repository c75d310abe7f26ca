/// The built-in word library, installed when an interpreter is created.
pub mod built_ins;

/// The data structures used by the interpreter.
pub mod data_structures;

/// The errors that can occur while evaluating tokens.
pub mod error;

/// The interpreter itself and its token evaluation state machine.
pub mod interpreter;
