use core::fmt;

use super::{
    error::{Error, RegisterError},
    input::is_numeral,
    inter::Interpreter,
    ops,
};

/// The callable half of a [`Word`].
///
/// Operations only run after the interpreter has checked the word's arity,
/// so an operation may rely on `inputs` values being present and on room
/// for `outputs - inputs` new ones.
pub trait WordOperation {
    fn invoke(&self, intr: &mut Interpreter) -> Result<(), Error>;
}

impl<F> WordOperation for F
where
    F: Fn(&mut Interpreter) -> Result<(), Error>,
{
    fn invoke(&self, intr: &mut Interpreter) -> Result<(), Error> {
        self(intr)
    }
}

pub struct Word {
    name: String,
    inputs: usize,
    outputs: usize,
    op: Box<dyn WordOperation>,
}

impl Word {
    pub fn new(
        name: impl Into<String>,
        inputs: usize,
        outputs: usize,
        op: impl WordOperation + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            inputs,
            outputs,
            op: Box::new(op),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inputs(&self) -> usize {
        self.inputs
    }

    pub fn outputs(&self) -> usize {
        self.outputs
    }

    /// How many values the word adds to the stack, at most.
    pub fn growth(&self) -> usize {
        self.outputs.saturating_sub(self.inputs)
    }

    pub(crate) fn invoke(&self, intr: &mut Interpreter) -> Result<(), Error> {
        self.op.invoke(intr)
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Word")
            .field("name", &self.name)
            .field("inputs", &self.inputs)
            .field("outputs", &self.outputs)
            .finish_non_exhaustive()
    }
}

/// Word names must not be confused with numerals or split by the tokenizer.
fn valid_word_name(name: &str) -> bool {
    !name.is_empty() && !is_numeral(name) && !name.bytes().any(|b| b.is_ascii_whitespace())
}

/// Append-only, ordered word list. Lookup is linear and the earliest
/// registration of a name wins.
#[derive(Debug, Default)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        let mut dict = Self::new();

        // Arithmetic
        dict.insert(Word::new("+", 2, 1, ops::add));
        dict.insert(Word::new("-", 2, 1, ops::subtract));
        dict.insert(Word::new("*", 2, 1, ops::mul));
        dict.insert(Word::new("/", 2, 1, ops::div));
        dict.insert(Word::new("mod", 2, 1, ops::modulus));

        // Stack manipulation
        dict.insert(Word::new("drop", 1, 0, ops::drop));
        dict.insert(Word::new("dup", 1, 2, ops::dup));
        dict.insert(Word::new("swap", 2, 2, ops::swap));
        dict.insert(Word::new("over", 2, 3, ops::over));
        dict.insert(Word::new("nip", 2, 1, ops::nip));
        dict.insert(Word::new("rot", 3, 3, ops::rot));

        // Quotations
        dict.insert(Word::new("[", 0, 1, ops::quote));
        dict.insert(Word::new("do", 1, 0, ops::invoke));

        // Console
        dict.insert(Word::new("out", 1, 0, ops::out));
        dict.insert(Word::new(".", 1, 0, ops::out));
        dict.insert(Word::new("bye", 0, 0, ops::bye));

        dict
    }

    pub fn register(&mut self, word: Word) -> Result<(), RegisterError> {
        if !valid_word_name(word.name()) {
            return Err(RegisterError::InvalidName(word.name));
        }
        self.insert(word);
        Ok(())
    }

    fn insert(&mut self, word: Word) {
        self.words.push(word);
    }

    pub fn find(&self, name: &str) -> Option<&Word> {
        self.words.iter().find(|word| word.name == name)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nop(_: &mut Interpreter) -> Result<(), Error> {
        Ok(())
    }

    #[test]
    fn test_find() {
        let dict = Dictionary::with_builtins();
        let dup = dict.find("dup").expect("dup is a builtin");
        assert_eq!((dup.inputs(), dup.outputs()), (1, 2));
        assert_eq!(dup.growth(), 1);
        assert!(dict.find("DUP").is_none());
        assert!(dict.find("du").is_none());
        assert!(dict.find("dupe").is_none());
    }

    #[test]
    fn test_lookup_is_stable() {
        let dict = Dictionary::with_builtins();
        let first = dict.find("swap").map(|w| w as *const Word);
        let second = dict.find("swap").map(|w| w as *const Word);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_first_registration_wins() -> anyhow::Result<()> {
        let mut dict = Dictionary::new();
        dict.register(Word::new("twin", 0, 0, nop))?;
        dict.register(Word::new("twin", 2, 1, nop))?;
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.find("twin").map(Word::inputs), Some(0));
        Ok(())
    }

    #[test]
    fn test_invalid_names() {
        let mut dict = Dictionary::new();
        for name in ["", "1up", "two words", "tab\tbed"] {
            assert_eq!(
                dict.register(Word::new(name, 0, 0, nop)),
                Err(RegisterError::InvalidName(name.to_string()))
            );
        }
        assert!(dict.is_empty());
    }

    #[test]
    fn test_builtin_names_are_valid() {
        let dict = Dictionary::with_builtins();
        assert!(dict.iter().all(|word| valid_word_name(word.name())));
    }
}
