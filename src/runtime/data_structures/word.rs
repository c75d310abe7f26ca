use crate::runtime::{error, interpreter::Interpreter};
use std::rc::Rc;

/// The executable body of a word.  Can be a Rust function, a lambda, or a
/// chain of other word bodies composed together.
pub type WordFunction = Rc<dyn Fn(&mut Interpreter) -> error::Result<()>>;

/// A named word as stored in the dictionary, or as being assembled in the
/// interpreter's scratch area while a definition is read.
///
/// Built-in and user-defined words share this representation.  The name keeps
/// the spelling it was defined with; the dictionary folds case when it stores
/// and looks up the word.
#[derive(Clone)]
pub struct DefinedWord {
    /// The name of the word as it was written.
    pub name: String,

    /// A short human readable description, shown by the `.w` listing.
    /// Possibly empty.
    pub description: String,

    /// The executable body of the word.
    pub body: WordFunction,
}

impl DefinedWord {
    /// Create a new word from its parts.
    pub fn new(name: String, description: String, body: WordFunction) -> DefinedWord {
        DefinedWord {
            name,
            description,
            body,
        }
    }

    /// Create a nameless word with a no-op body.  Definitions start out like
    /// this and grow by chaining.
    pub fn empty() -> DefinedWord {
        DefinedWord {
            name: String::new(),
            description: String::new(),
            body: Rc::new(|_| Ok(())),
        }
    }
}

/// A resolved token, ready to execute or to chain into a definition.
///
/// Exactly two variants exist.  Number words are ephemeral, created whenever
/// a token parses as an integer, and are never stored in the dictionary.
#[derive(Clone)]
pub enum Word {
    /// A literal integer.  Executing it pushes the value.
    Number(i64),

    /// A word found in the dictionary.
    Defined(DefinedWord),
}

impl Word {
    /// The executable body of the word.  For a number word this is a
    /// function that pushes the literal.
    pub fn function(&self) -> WordFunction {
        match self {
            Word::Number(number) => {
                let number = *number;
                Rc::new(move |interpreter| {
                    interpreter.push(number);
                    Ok(())
                })
            }

            Word::Defined(word) => word.body.clone(),
        }
    }
}
