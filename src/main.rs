use fifth::runtime::interpreter::{Interpreter, State};
use rustyline::{DefaultEditor, error::ReadlineError};
use std::{env::args, fs::read_to_string};

/// Feed one line of source to the interpreter, one token at a time.  An
/// error is printed and skips the rest of the line; the session stays alive.
fn eval_line(interpreter: &mut Interpreter, line: &str) {
    for token in line.split_whitespace() {
        if let Err(err) = interpreter.eval_word(token) {
            println!("{}", err);
            break;
        }
    }
}

/// Run a script file, stopping early if the script executes `bye`.
fn run_script(interpreter: &mut Interpreter, path: &str) -> rustyline::Result<()> {
    let source = read_to_string(path)?;

    for line in source.lines() {
        if interpreter.state() == State::Halt {
            break;
        }

        eval_line(interpreter, line);
    }

    Ok(())
}

/// Run the interactive repl until the user executes `bye` or closes the
/// input.
fn run_repl(interpreter: &mut Interpreter) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;

    while interpreter.state() != State::Halt {
        match editor.readline(interpreter.prompt()) {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                eval_line(interpreter, &line);
            }

            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,

            Err(err) => return Err(err),
        }
    }

    Ok(())
}

fn main() -> rustyline::Result<()> {
    let mut interpreter = Interpreter::new();

    // The interactive session starts out verbose so `.` shows what it
    // discards.
    interpreter.set_verbose(true);

    match args().nth(1) {
        Some(path) => run_script(&mut interpreter, &path),
        None => run_repl(&mut interpreter),
    }
}
