use crate::runtime::data_structures::word::DefinedWord;
use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
};

/// The dictionary of words known by the interpreter.
///
/// Keys are the uppercase folded word names, so lookups are case-insensitive.
/// Inserting a word under a name that already exists silently shadows the
/// previous binding.  Already compiled definitions keep the body they
/// resolved at definition time, so shadowing never rewrites history.
#[derive(Clone, Default)]
pub struct Dictionary {
    words: HashMap<String, DefinedWord>,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Dictionary {
        Dictionary {
            words: HashMap::new(),
        }
    }

    /// Insert a word into the dictionary under its case-folded name.
    pub fn insert(&mut self, word: DefinedWord) {
        let _ = self.words.insert(word.name.to_uppercase(), word);
    }

    /// Try to get a word by name, folding case.
    pub fn try_get(&self, name: &str) -> Option<&DefinedWord> {
        self.words.get(&name.to_uppercase())
    }

    /// How many words are defined?
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Is the dictionary empty?
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Pretty print the dictionary for the repl's `.w` word.  Words are listed
/// in sorted order with their names column aligned against the longest name,
/// followed by their descriptions.
impl Display for Dictionary {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let max_size = self
            .words
            .values()
            .map(|word| word.name.len())
            .max()
            .unwrap_or(0);

        let mut keys: Vec<&String> = self.words.keys().collect();
        keys.sort();

        for key in keys {
            let word = &self.words[key];
            writeln!(f, "{:width$}{}", word.name, word.description, width = max_size + 8)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn word(name: &str, description: &str) -> DefinedWord {
        DefinedWord::new(
            name.to_string(),
            description.to_string(),
            Rc::new(|_| Ok(())),
        )
    }

    #[test]
    fn lookup_folds_case() {
        let mut dictionary = Dictionary::new();

        dictionary.insert(word("dup", "duplicate topmost value"));

        assert!(dictionary.try_get("dup").is_some());
        assert!(dictionary.try_get("DUP").is_some());
        assert!(dictionary.try_get("Dup").is_some());
        assert!(dictionary.try_get("swap").is_none());

        // The stored word keeps its original spelling.
        assert_eq!(dictionary.try_get("DUP").unwrap().name, "dup");
    }

    #[test]
    fn insert_shadows_silently() {
        let mut dictionary = Dictionary::new();

        dictionary.insert(word("greet", "old"));
        dictionary.insert(word("GREET", "new"));

        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.try_get("greet").unwrap().description, "new");
    }

    #[test]
    fn listing_is_sorted_and_column_aligned() {
        let mut dictionary = Dictionary::new();

        dictionary.insert(word("swap", "swap two topmost values"));
        dictionary.insert(word("+", "add two numbers"));

        let listing = format!("{}", dictionary);
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('+'));
        assert!(lines[1].starts_with("swap"));

        // Longest name is "swap", so every description starts at column 12.
        assert_eq!(&lines[0][12..], "add two numbers");
        assert_eq!(&lines[1][12..], "swap two topmost values");
    }
}
