/// The name to word lookup table used by the interpreter.
pub mod dictionary;

/// The interpreter's data stack of integer values.
pub mod value_stack;

/// The word abstraction, number literals and defined words.
pub mod word;
