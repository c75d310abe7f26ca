use crate::runtime::{
    error,
    interpreter::{Interpreter, State},
};

/// Show all known words with their descriptions, column aligned.
fn word_show_words(interpreter: &mut Interpreter, _inputs: &[i64]) -> error::Result<()> {
    print!("{}", interpreter.dictionary());
    Ok(())
}

/// Toggle verbose mode.  When verbose, `drop` and `.` print the value they
/// discard.
fn word_toggle_verbose(interpreter: &mut Interpreter, _inputs: &[i64]) -> error::Result<()> {
    interpreter.set_verbose(!interpreter.verbose());

    if interpreter.verbose() {
        println!("Enabled verbose mode.");
    } else {
        println!("Disabled verbose mode.");
    }

    Ok(())
}

/// Show the stack contents from the top down.
fn word_show_stack(interpreter: &mut Interpreter, _inputs: &[i64]) -> error::Result<()> {
    print!("{}", interpreter.stack());
    Ok(())
}

/// Stop accepting input.  The repl exits when it sees the halt state.
fn word_bye(interpreter: &mut Interpreter, _inputs: &[i64]) -> error::Result<()> {
    interpreter.set_state(State::Halt);
    Ok(())
}

/// Register the repl introspection words with the interpreter.
pub fn register_repl_words(interpreter: &mut Interpreter) {
    interpreter.add_primitive(".w", "show all known words", 0, word_show_words);
    interpreter.add_primitive(".v", "toggle verbose", 0, word_toggle_verbose);
    interpreter.add_primitive(".s", "show the stack contents", 0, word_show_stack);
    interpreter.add_primitive("bye", "exit the interpreter", 0, word_bye);
}
