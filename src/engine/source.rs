use super::input::Span;

/// Owns every script buffer fed to one interpreter.
///
/// Quotations point into this arena by offset, so they stay valid for as
/// long as the arena is not cleared.
#[derive(Debug, Default, Clone)]
pub struct Source {
    text: String,
}

impl Source {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies `script` into the arena and returns its span.
    pub fn append(&mut self, script: &str) -> Span {
        if !self.text.is_empty() {
            // keep the previous chunk's last word from running into ours
            self.text.push('\n');
        }
        let start = self.text.len();
        self.text.push_str(script);
        Span::new(start, script.len())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn slice(&self, span: Span) -> &str {
        &self.text[span.start..span.end()]
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
