use std::{
    io::{self, Write},
    mem,
    rc::Rc,
};

use super::{
    config::Config,
    dict::{Dictionary, Word},
    error::Error,
    input::{is_numeral, next_word, parse_number, Span},
    quote::QuoteStore,
    source::Source,
    stack::Stack,
};

/// Scan position of one (possibly nested) interpretation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Frame {
    start: usize,
    cursor: usize,
    end: usize,
}

impl Frame {
    fn over(span: Span) -> Self {
        Self {
            start: span.start,
            cursor: span.start,
            end: span.end(),
        }
    }
}

enum Resolved<'d> {
    Word(&'d Word),
    Number(i32),
    Unknown(String),
}

/// All state of one running engine. Word operations receive it mutably
/// and may re-enter it through [`Interpreter::run_span`].
pub struct Interpreter {
    stack: Stack,
    dictionary: Rc<Dictionary>,
    source: Source,
    quotes: QuoteStore,
    frame: Frame,
    nesting: usize,
    halted: bool,
    pending_reset: bool,
    config: Config,
    output: Box<dyn Write>,
}

impl Interpreter {
    pub fn new(dictionary: Dictionary, config: Config) -> Self {
        Self {
            stack: Stack::new(config.stack_capacity),
            dictionary: Rc::new(dictionary),
            source: Source::new(),
            quotes: QuoteStore::new(),
            frame: Frame::default(),
            nesting: 0,
            halted: false,
            pending_reset: false,
            config,
            output: Box::new(io::stdout()),
        }
    }

    /// Sends what `out` prints somewhere other than stdout.
    pub fn with_output(mut self, output: impl Write + 'static) -> Self {
        self.output = Box::new(output);
        self
    }

    /// Interprets `script` against the current stack.
    ///
    /// The script is kept in the interpreter's source arena, so quotations
    /// captured from it can still be invoked by later runs. Stops at the
    /// first error; whatever the words before it did to the stack stays.
    pub fn run(&mut self, script: &str) -> Result<(), Error> {
        self.halted = false;
        let span = self.source.append(script);
        cs_debug!("run: {} bytes", span.len);
        self.run_span(span)
    }

    /// Interprets a span of the source arena on the shared stack.
    ///
    /// The caller's scan position is restored afterwards, whatever the
    /// outcome.
    pub fn run_span(&mut self, span: Span) -> Result<(), Error> {
        if self.nesting > self.config.max_nesting {
            return Err(Error::NestingTooDeep(self.config.max_nesting));
        }
        let caller = mem::replace(&mut self.frame, Frame::over(span));
        self.nesting += 1;
        let res = self.eval_frame();
        self.nesting -= 1;
        self.frame = caller;
        if self.nesting == 0 && self.pending_reset {
            self.clear();
        }
        res
    }

    fn eval_frame(&mut self) -> Result<(), Error> {
        while !self.halted {
            let token = next_word(&self.source.text()[..self.frame.end], self.frame.cursor);
            if token.is_empty() {
                self.frame.cursor = self.frame.end;
                break;
            }

            let dictionary = Rc::clone(&self.dictionary);
            let resolved = {
                let name = self.source.slice(token);
                match dictionary.find(name) {
                    Some(word) => Resolved::Word(word),
                    None if is_numeral(name) => Resolved::Number(parse_number(name)),
                    None => Resolved::Unknown(name.to_string()),
                }
            };

            // words that read raw source (like `[`) start right after their token
            self.frame.cursor = token.end();

            match resolved {
                Resolved::Word(word) => self.dispatch(word)?,
                Resolved::Number(val) => {
                    cs_trace!("push {}", val);
                    self.stack.push(val)?;
                }
                Resolved::Unknown(name) => return Err(Error::UnknownWord(name)),
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, word: &Word) -> Result<(), Error> {
        if word.inputs() > self.stack.depth() {
            return Err(Error::StackUnderflow);
        }
        if word.growth() > self.stack.room() {
            return Err(Error::StackOverflow);
        }
        cs_trace!("{} {:?}", word.name(), self.stack.as_slice());
        word.invoke(self)
    }

    pub fn push(&mut self, val: i32) -> Result<(), Error> {
        self.stack.push(val)
    }

    pub fn pop(&mut self) -> Result<i32, Error> {
        self.stack.pop()
    }

    pub fn peek(&self, n: usize) -> Result<i32, Error> {
        self.stack.peek(n)
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Bottom first.
    pub fn stack(&self) -> &[i32] {
        self.stack.as_slice()
    }

    /// Current scan position in the source arena.
    pub fn cursor(&self) -> usize {
        self.frame.cursor
    }

    /// Moves the scan position within the active span. Positions outside
    /// it are clamped, and a position inside a multi-byte character moves
    /// forward to the next character.
    pub fn set_cursor(&mut self, cursor: usize) {
        let text = self.source.text();
        let mut cursor = cursor.clamp(self.frame.start, self.frame.end);
        while !text.is_char_boundary(cursor) {
            cursor += 1;
        }
        self.frame.cursor = cursor;
    }

    /// Unscanned text of the active span.
    pub fn frame_rest(&self) -> &str {
        &self.source.text()[self.frame.cursor..self.frame.end]
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn quotes(&self) -> &QuoteStore {
        &self.quotes
    }

    pub fn quotes_mut(&mut self) -> &mut QuoteStore {
        &mut self.quotes
    }

    /// Body text of a captured quotation.
    pub fn quote_text(&self, handle: i32) -> Option<&str> {
        self.quotes.get(handle).map(|body| self.source.slice(body))
    }

    pub fn output(&mut self) -> &mut dyn Write {
        &mut *self.output
    }

    /// Stops the current run, including every enclosing quotation.
    pub fn halt(&mut self) {
        self.halted = true;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Empties the stack and releases all source text and quotations.
    ///
    /// Called from a word operation, this halts the run and the reset
    /// happens once the outermost frame has returned.
    pub fn reset(&mut self) {
        if self.nesting > 0 {
            cs_debug!("reset deferred to end of run");
            self.pending_reset = true;
            self.halt();
            return;
        }
        self.clear();
    }

    fn clear(&mut self) {
        self.stack.reset();
        self.quotes.clear();
        self.source.clear();
        self.frame = Frame::default();
        self.halted = false;
        self.pending_reset = false;
    }
}
