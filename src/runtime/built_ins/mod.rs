use crate::runtime::interpreter::Interpreter;

/// Words for simple integer arithmetic.
pub mod arithmetic_words;

/// Words for comparisons and truth-value logic.
pub mod logic_words;

/// Introspection words for use within the repl.
pub mod repl_words;

/// Words for shuffling values on the data stack.
pub mod stack_words;

/// Register the whole built-in word library with the interpreter.
///
/// Derived words bind to the words already installed when they are
/// registered, so the categories are wired in dependency order.
pub fn register_built_in_words(interpreter: &mut Interpreter) {
    stack_words::register_stack_words(interpreter);
    arithmetic_words::register_arithmetic_words(interpreter);
    logic_words::register_logic_words(interpreter);
    repl_words::register_repl_words(interpreter);
}
