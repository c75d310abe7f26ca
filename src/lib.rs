//! A tiny interactive Forth-like interpreter.
//!
//! The language works on whitespace-delimited tokens and a stack of signed
//! integers.  Tokens either parse as numbers, which are pushed, or name
//! words in a dictionary, which are executed.  New words are compiled with
//! the traditional colon syntax:
//!
//! ```text
//! : square ( multiplies a number by itself ) dup * ;
//! 5 square .
//! ```
//!
//! Definitions are compiled at define time by composing the bodies of the
//! words they reference, so a word keeps the behavior its parts had when it
//! was defined, even if those parts are redefined later.
//!
//! ## Example
//!
//! ```
//! use fifth::runtime::interpreter::Interpreter;
//!
//! let mut interpreter = Interpreter::new();
//!
//! for token in "2 3 +".split_whitespace() {
//!     interpreter.eval_word(token).unwrap();
//! }
//!
//! assert_eq!(interpreter.stack().len(), 1);
//! ```

/// Module for the runtime and the data structures used by the interpreter.
/// As well as the interpreter itself.
pub mod runtime;
