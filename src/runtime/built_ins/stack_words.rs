use crate::runtime::{error, interpreter::Interpreter};

/// Duplicate the top value on the data stack.
///
/// Signature: `a -- a a`
fn word_dup(interpreter: &mut Interpreter, inputs: &[i64]) -> error::Result<()> {
    interpreter.push(inputs[0]);
    interpreter.push(inputs[0]);

    Ok(())
}

/// Swap the top 2 values on the data stack.
///
/// Signature: `a b -- b a`
fn word_swap(interpreter: &mut Interpreter, a: i64, b: i64) -> error::Result<()> {
    interpreter.push(b);
    interpreter.push(a);

    Ok(())
}

/// Copy the second value over the top one.
///
/// Signature: `a b -- a b a`
fn word_over(interpreter: &mut Interpreter, a: i64, b: i64) -> error::Result<()> {
    interpreter.push(a);
    interpreter.push(b);
    interpreter.push(a);

    Ok(())
}

/// Rotate the top 3 values on the stack.
///
/// Signature: `a b c -- b c a`
fn word_rot(interpreter: &mut Interpreter, inputs: &[i64]) -> error::Result<()> {
    interpreter.push(inputs[1]);
    interpreter.push(inputs[2]);
    interpreter.push(inputs[0]);

    Ok(())
}

/// Drop the top value on the data stack.  In verbose mode the discarded
/// value is printed.
///
/// Signature: `a -- `
fn word_drop(interpreter: &mut Interpreter, inputs: &[i64]) -> error::Result<()> {
    if interpreter.verbose() {
        println!("{}", inputs[0]);
    }

    Ok(())
}

/// Register the stack shuffling words with the interpreter.
pub fn register_stack_words(interpreter: &mut Interpreter) {
    interpreter.add_primitive("dup", "duplicate topmost value", 1, word_dup);
    interpreter.add_binary("swap", "swap two topmost values", word_swap);
    interpreter.add_binary("over", "copies second item to top", word_over);
    interpreter.add_primitive("rot", "a b c -- b c a", 3, word_rot);
    interpreter.add_primitive("drop", "discard the topmost value", 1, word_drop);

    interpreter.add_derived("2dup", "a b -- a b a b", "over over");
    interpreter.add_derived("-rot", "a b c -- c a b", "rot rot");

    // Alias kept for familiarity with the traditional dialect.
    interpreter.add_derived(".", "discard the topmost value", "drop");
}
