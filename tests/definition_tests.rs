// Tests for the definition state machine, the dictionary lifecycle, and
// error propagation policy.

use fifth::runtime::error::{Result, ScriptError};
use fifth::runtime::interpreter::{Interpreter, State};

fn eval(interpreter: &mut Interpreter, source: &str) -> Result<()> {
    for token in source.split_whitespace() {
        interpreter.eval_word(token)?;
    }

    Ok(())
}

fn stack_of(interpreter: &Interpreter) -> Vec<i64> {
    interpreter.stack().iter().copied().collect()
}

#[test]
fn prompt_tracks_the_state_machine() {
    let mut interpreter = Interpreter::new();

    assert_eq!(interpreter.prompt(), "ok ");

    interpreter.eval_word(":").unwrap();
    assert_eq!(interpreter.prompt(), "...");

    interpreter.eval_word("inc").unwrap();
    assert_eq!(interpreter.prompt(), "...");

    interpreter.eval_word("(").unwrap();
    assert_eq!(interpreter.prompt(), "(..");

    interpreter.eval_word(")").unwrap();
    assert_eq!(interpreter.prompt(), "...");

    eval(&mut interpreter, "1 + ;").unwrap();
    assert_eq!(interpreter.prompt(), "ok ");

    interpreter.eval_word("bye").unwrap();
    assert_eq!(interpreter.prompt(), "");
}

#[test]
fn committed_definition_appears_in_the_word_listing() {
    let mut interpreter = Interpreter::new();

    eval(&mut interpreter, ": square dup * ;").unwrap();

    let listing = format!("{}", interpreter.dictionary());
    assert!(listing.lines().any(|line| line.starts_with("square")));
}

#[test]
fn description_is_captured_verbatim() {
    let mut interpreter = Interpreter::new();

    eval(&mut interpreter, ": inc ( adds one ) 1 + ;").unwrap();

    let word = interpreter.dictionary().try_get("inc").unwrap();
    assert_eq!(word.description, "adds one");

    eval(&mut interpreter, "4 inc").unwrap();
    assert_eq!(stack_of(&interpreter), vec![5]);
}

#[test]
fn description_may_be_split_across_groups() {
    let mut interpreter = Interpreter::new();

    eval(&mut interpreter, ": twice ( doubles ) 2 ( a number ) * ;").unwrap();

    let word = interpreter.dictionary().try_get("twice").unwrap();
    assert_eq!(word.description, "doubles a number");

    eval(&mut interpreter, "21 twice").unwrap();
    assert_eq!(stack_of(&interpreter), vec![42]);
}

#[test]
fn numeric_name_fails_and_installs_nothing() {
    let mut interpreter = Interpreter::new();
    let words_before = interpreter.dictionary().len();

    assert_eq!(eval(&mut interpreter, ": 5"), Err(ScriptError::InvalidWord));

    assert_eq!(interpreter.state(), State::Continue);
    assert_eq!(interpreter.dictionary().len(), words_before);

    // The session is still alive.
    eval(&mut interpreter, "2 3 +").unwrap();
    assert_eq!(stack_of(&interpreter), vec![5]);
}

#[test]
fn unknown_word_in_body_aborts_the_definition() {
    let mut interpreter = Interpreter::new();

    assert_eq!(
        eval(&mut interpreter, ": broken nonsense"),
        Err(ScriptError::UnknownWord)
    );

    assert_eq!(interpreter.state(), State::Continue);
    assert!(interpreter.dictionary().try_get("broken").is_none());

    // The same name can be defined cleanly afterwards.
    eval(&mut interpreter, ": broken 1 ; broken").unwrap();
    assert_eq!(stack_of(&interpreter), vec![1]);
}

#[test]
fn redefinition_silently_replaces_the_old_binding() {
    let mut interpreter = Interpreter::new();

    eval(&mut interpreter, ": greet 1 ; : greet 2 ; greet").unwrap();
    assert_eq!(stack_of(&interpreter), vec![2]);
}

#[test]
fn definitions_bind_words_at_definition_time() {
    let mut interpreter = Interpreter::new();

    eval(&mut interpreter, ": base 1 ; : derived base base + ;").unwrap();

    // Redefining base afterwards must not change derived, which bound to
    // the original body when it was compiled.
    eval(&mut interpreter, ": base 100 ; derived base").unwrap();
    assert_eq!(stack_of(&interpreter), vec![2, 100]);
}

#[test]
fn execution_error_in_a_defined_word_short_circuits() {
    let mut interpreter = Interpreter::new();

    eval(&mut interpreter, ": risky / 7 ;").unwrap();

    // The division fails, so the trailing push never runs.
    assert_eq!(
        eval(&mut interpreter, "6 0 risky"),
        Err(ScriptError::DivisionByZero)
    );
    assert_eq!(stack_of(&interpreter), Vec::<i64>::new());

    // A clean invocation runs the whole body.
    eval(&mut interpreter, "6 2 risky").unwrap();
    assert_eq!(stack_of(&interpreter), vec![3, 7]);
}

#[test]
fn execution_error_leaves_the_machine_in_continue() {
    let mut interpreter = Interpreter::new();

    assert_eq!(
        interpreter.eval_word("drop"),
        Err(ScriptError::StackUnderflow)
    );

    assert_eq!(interpreter.state(), State::Continue);

    eval(&mut interpreter, "2 3 +").unwrap();
    assert_eq!(stack_of(&interpreter), vec![5]);
}

#[test]
fn bye_halts_and_later_tokens_are_ignored() {
    let mut interpreter = Interpreter::new();

    interpreter.eval_word("bye").unwrap();
    assert_eq!(interpreter.state(), State::Halt);

    // Tokens after the halt are no-ops, even unknown ones.
    interpreter.eval_word("42").unwrap();
    interpreter.eval_word("nonsense").unwrap();

    assert_eq!(interpreter.state(), State::Halt);
    assert!(interpreter.stack().is_empty());
}

#[test]
fn pause_consumes_exactly_one_token() {
    let mut interpreter = Interpreter::new();

    interpreter.set_state(State::Pause);
    assert_eq!(interpreter.prompt(), "???");

    // The skipped token is never resolved, so even garbage is accepted.
    interpreter.eval_word("nonsense").unwrap();

    assert_eq!(interpreter.state(), State::Continue);
    assert!(interpreter.stack().is_empty());

    eval(&mut interpreter, "1 2 +").unwrap();
    assert_eq!(stack_of(&interpreter), vec![3]);
}

#[test]
fn definition_names_fold_case() {
    let mut interpreter = Interpreter::new();

    eval(&mut interpreter, ": Square dup * ; 5 square 3 SQUARE").unwrap();
    assert_eq!(stack_of(&interpreter), vec![25, 9]);
}

#[test]
fn redefining_a_built_in_shadows_it() {
    let mut interpreter = Interpreter::new();

    eval(&mut interpreter, ": + - ; 5 2 +").unwrap();
    assert_eq!(stack_of(&interpreter), vec![3]);
}
