use crate::runtime::{
    built_ins,
    data_structures::{
        dictionary::Dictionary,
        value_stack::ValueStack,
        word::{DefinedWord, Word, WordFunction},
    },
    error::{self, ScriptError},
};
use std::rc::Rc;

/// The state of the interpreter's token evaluation machine.  Exactly one
/// state is active at a time, and it decides how the next token is treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Terminal state.  All further tokens are ignored.
    Halt,

    /// Normal execution.  Tokens are resolved and executed immediately.
    /// This is the initial state.
    Continue,

    /// Skip exactly one token, whatever it is, then resume normal execution.
    /// Reserved, no built-in word reaches this state.
    Pause,

    /// A `:` was just read.  The next token names the new word.
    ReadName,

    /// Tokens are being accumulated into the body of a definition.
    ReadBody,

    /// Inside a `( ... )` span within a definition body.  Tokens are
    /// collected into the word's description.
    ReadDescription,
}

/// The core interpreter for the language.
///
/// Holds the whole session: the value stack, the word dictionary, the
/// evaluation state, and the scratch word a definition is assembled in.
/// All built-in words are installed on construction, before any input is
/// read.  Strictly single-threaded; each token is fully processed before
/// the next one is looked at.
pub struct Interpreter {
    /// The data stack used by the interpreter.
    stack: ValueStack,

    /// The dictionary of words known by the interpreter.
    dictionary: Dictionary,

    /// The current state of the token evaluation machine.
    state: State,

    /// When set, `drop` and `.` print the value they discard.
    verbose: bool,

    /// The word under construction while a definition is read.  Only
    /// populated between `:` and the matching `;`, and transiently while
    /// derived built-in words are composed at startup.
    scratch: Option<DefinedWord>,
}

impl Interpreter {
    /// Create a new interpreter with the full built-in word library
    /// installed.
    pub fn new() -> Interpreter {
        let mut interpreter = Interpreter {
            stack: ValueStack::new(),
            dictionary: Dictionary::new(),
            state: State::Continue,
            verbose: false,
            scratch: None,
        };

        built_ins::register_built_in_words(&mut interpreter);

        interpreter
    }

    /// The interpreter's data stack.
    pub fn stack(&self) -> &ValueStack {
        &self.stack
    }

    /// The current word dictionary of words known to the interpreter.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The current state of the evaluation machine.
    pub fn state(&self) -> State {
        self.state
    }

    /// Force the evaluation machine into a given state.
    pub fn set_state(&mut self, state: State) {
        self.state = state;
    }

    /// Is verbose mode enabled?
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Enable or disable verbose mode.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Push a value onto the data stack.
    pub fn push(&mut self, value: i64) {
        self.stack.push(value);
    }

    /// Pop the top value off of the data stack.  Fails with a stack
    /// underflow error if the stack is empty.
    pub fn pop(&mut self) -> error::Result<i64> {
        self.stack.pop()
    }

    /// The prompt the repl should display before reading the next line,
    /// reflecting the current state of the evaluation machine.
    pub fn prompt(&self) -> &'static str {
        match self.state {
            State::Continue => "ok ",
            State::ReadBody | State::ReadName => "...",
            State::ReadDescription => "(..",
            State::Halt => "",
            State::Pause => "???",
        }
    }

    /// Evaluate one whitespace-delimited token against the current state.
    ///
    /// In `Continue` the token is resolved and executed immediately; an
    /// error leaves the state untouched so the session stays alive.  Inside
    /// a definition the token is chained onto the scratch word instead of
    /// being executed; a resolution failure aborts the definition and drops
    /// back to `Continue` without installing anything.
    pub fn eval_word(&mut self, token: &str) -> error::Result<()> {
        match self.state {
            State::Halt => Ok(()),

            State::Pause => {
                self.state = State::Continue;
                Ok(())
            }

            State::ReadName => {
                // A definition can not be named a number.
                if token.parse::<i64>().is_ok() {
                    self.state = State::Continue;
                    return Err(ScriptError::InvalidWord);
                }

                let scratch = self.scratch_mut();
                scratch.name = token.to_string();
                scratch.description.clear();

                self.state = State::ReadBody;
                Ok(())
            }

            State::ReadBody => match token {
                "(" => {
                    self.state = State::ReadDescription;
                    Ok(())
                }

                ";" => {
                    self.state = State::Continue;

                    let word = self.scratch.take().unwrap_or_else(DefinedWord::empty);
                    self.dictionary.insert(word);

                    Ok(())
                }

                _ => match self.parse_word(token) {
                    Ok(word) => {
                        // Not executed now.  Execution is deferred until the
                        // defined word is invoked.
                        self.chain(word);
                        Ok(())
                    }

                    Err(err) => {
                        self.state = State::Continue;
                        Err(err)
                    }
                },
            },

            State::ReadDescription => {
                if token == ")" {
                    self.state = State::ReadBody;
                } else {
                    let scratch = self.scratch_mut();

                    if !scratch.description.is_empty() {
                        scratch.description.push(' ');
                    }

                    scratch.description.push_str(token);
                }

                Ok(())
            }

            State::Continue => {
                if token == ":" {
                    self.state = State::ReadName;
                    self.scratch = Some(DefinedWord::empty());
                    Ok(())
                } else {
                    let function = self.parse_word(token)?.function();
                    function(self)
                }
            }
        }
    }

    /// Resolve a token to a word.  An integer parse is attempted first, so
    /// numbers always take priority over dictionary names.  Unresolvable
    /// tokens fail with an unknown word error.
    pub fn parse_word(&self, token: &str) -> error::Result<Word> {
        if let Ok(number) = token.parse::<i64>() {
            return Ok(Word::Number(number));
        }

        match self.dictionary.try_get(token) {
            Some(word) => Ok(Word::Defined(word.clone())),
            None => Err(ScriptError::UnknownWord),
        }
    }

    /// Chain a word onto the end of the scratch word's body.
    ///
    /// The new body runs the old body first and short-circuits on failure
    /// before running the chained word.  The scratch's name and description
    /// are untouched.
    pub fn chain(&mut self, next: Word) {
        let second = next.function();
        let scratch = self.scratch_mut();
        let first = scratch.body.clone();

        scratch.body = Rc::new(move |interpreter| {
            first(interpreter)?;
            second(interpreter)
        });
    }

    /// Install a word into the dictionary.  An existing word of the same
    /// name is silently shadowed.
    pub fn define_word(&mut self, name: &str, description: &str, body: WordFunction) {
        self.dictionary.insert(DefinedWord::new(
            name.to_string(),
            description.to_string(),
            body,
        ));
    }

    /// Install a primitive word that takes a fixed number of stack operands.
    ///
    /// The operands are popped before the function runs and are handed over
    /// in left to right order: for `a b OP` the function sees `[a, b]`.
    pub fn add_primitive<F>(&mut self, name: &str, description: &str, inputs: usize, function: F)
    where
        F: Fn(&mut Interpreter, &[i64]) -> error::Result<()> + 'static,
    {
        let body: WordFunction = Rc::new(move |interpreter| {
            let mut values = vec![0; inputs];

            for index in 0..inputs {
                values[inputs - 1 - index] = interpreter.pop()?;
            }

            function(interpreter, &values)
        });

        self.define_word(name, description, body);
    }

    /// Install a primitive word that takes exactly two operands.
    pub fn add_binary<F>(&mut self, name: &str, description: &str, function: F)
    where
        F: Fn(&mut Interpreter, i64, i64) -> error::Result<()> + 'static,
    {
        self.add_primitive(name, description, 2, move |interpreter, inputs| {
            function(interpreter, inputs[0], inputs[1])
        });
    }

    /// Install a word whose body is compiled from a source string of
    /// existing words, through the same resolution and chaining path user
    /// definitions take.
    ///
    /// The referenced words are resolved now, so later redefinitions do not
    /// affect the derived word.  A token that fails to resolve is a
    /// registration bug and panics.
    pub fn add_derived(&mut self, name: &str, description: &str, source: &str) {
        let saved = self.scratch.take();

        self.scratch = Some(DefinedWord::new(
            name.to_string(),
            description.to_string(),
            Rc::new(|_| Ok(())),
        ));

        for token in source.split_whitespace() {
            match self.parse_word(token) {
                Ok(word) => self.chain(word),
                Err(err) => panic!("Derived word {:?} references {:?}: {}.", name, token, err),
            }
        }

        let word = self.scratch.take().unwrap_or_else(DefinedWord::empty);
        self.scratch = saved;

        self.dictionary.insert(word);
    }

    /// The scratch word, created on demand with an empty no-op body.
    fn scratch_mut(&mut self) -> &mut DefinedWord {
        self.scratch.get_or_insert_with(DefinedWord::empty)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
