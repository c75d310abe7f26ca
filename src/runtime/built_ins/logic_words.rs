use crate::runtime::{error, interpreter::Interpreter};

fn bool_to_value(flag: bool) -> i64 {
    if flag { 1 } else { 0 }
}

fn value_to_bool(value: i64) -> bool {
    value != 0
}

/// Is the second value less than the top one?
///
/// Signature: `a b -- a<b`
fn word_less_than(interpreter: &mut Interpreter, a: i64, b: i64) -> error::Result<()> {
    interpreter.push(bool_to_value(a < b));
    Ok(())
}

/// Are the top two values equal?
///
/// Signature: `a b -- a=b`
fn word_equal(interpreter: &mut Interpreter, a: i64, b: i64) -> error::Result<()> {
    interpreter.push(bool_to_value(a == b));
    Ok(())
}

/// Logical conjunction of the top two values.
///
/// Signature: `a b -- a&&b`
fn word_and(interpreter: &mut Interpreter, a: i64, b: i64) -> error::Result<()> {
    interpreter.push(bool_to_value(value_to_bool(a) && value_to_bool(b)));
    Ok(())
}

/// Logical disjunction of the top two values.
///
/// Signature: `a b -- a||b`
fn word_or(interpreter: &mut Interpreter, a: i64, b: i64) -> error::Result<()> {
    interpreter.push(bool_to_value(value_to_bool(a) || value_to_bool(b)));
    Ok(())
}

/// Logical negation of the top value.  Pushes 1 for 0 and 0 for anything
/// else; this is a truth-value invert, not a bitwise one.
///
/// Signature: `a -- !a`
fn word_invert(interpreter: &mut Interpreter, inputs: &[i64]) -> error::Result<()> {
    interpreter.push(bool_to_value(inputs[0] == 0));
    Ok(())
}

/// Register the comparison and logic words with the interpreter.  The
/// derived words here resolve their parts at registration time, so the
/// stack shuffling words must already be installed.
pub fn register_logic_words(interpreter: &mut Interpreter) {
    interpreter.add_binary("<", "less than", word_less_than);
    interpreter.add_binary("=", "equality", word_equal);
    interpreter.add_binary("and", "conjunction", word_and);
    interpreter.add_binary("or", "disjunction", word_or);
    interpreter.add_primitive("invert", "negate", 1, word_invert);

    interpreter.add_derived("true", "true value", "1");
    interpreter.add_derived("false", "false value", "0");
    interpreter.add_derived("=0", "is n == 0", "0 =");
    interpreter.add_derived("<=", "less than equal", "2dup < -rot = or");
    interpreter.add_derived("<>", "not equal", "= invert");
    interpreter.add_derived(">", "greater than", "<= invert");
    interpreter.add_derived(">=", "greater equal than", "< invert");
}
