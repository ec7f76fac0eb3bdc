/// A byte range inside a script buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Finds the next whitespace-delimited word in `buf`, starting at `cursor`.
///
/// Leading whitespace is skipped. An empty span means the rest of the
/// buffer is blank, i.e. end of input. A cursor past the end of the buffer
/// also yields an empty span.
pub fn next_word(buf: &str, cursor: usize) -> Span {
    let bytes = buf.as_bytes();
    let mut start = cursor.min(bytes.len());
    while start < bytes.len() && bytes[start].is_ascii_whitespace() {
        start += 1;
    }
    let mut end = start;
    while end < bytes.len() && !bytes[end].is_ascii_whitespace() {
        end += 1;
    }
    Span::new(start, end - start)
}

/// Lazy sequence of word spans over a buffer.
pub struct Words<'a> {
    buf: &'a str,
    cursor: usize,
}

impl<'a> Words<'a> {
    pub fn new(buf: &'a str) -> Self {
        Self::from_cursor(buf, 0)
    }

    pub fn from_cursor(buf: &'a str, cursor: usize) -> Self {
        Self { buf, cursor }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let word = next_word(self.buf, self.cursor);
        if word.is_empty() {
            self.cursor = self.buf.len();
            return None;
        }
        self.cursor = word.end();
        Some(&self.buf[word.start..word.end()])
    }
}

/// Value of the longest leading run of decimal digits in `token`.
///
/// There is no sign syntax. Values past `i32::MAX` wrap.
pub fn parse_number(token: &str) -> i32 {
    token
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i32, |acc, digit| {
            acc.wrapping_mul(10).wrapping_add(i32::from(digit - b'0'))
        })
}

pub fn is_numeral(token: &str) -> bool {
    token.as_bytes().first().map_or(false, u8::is_ascii_digit)
}
