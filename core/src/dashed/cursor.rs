/// Read position over a dashed expression.
///
/// `token_start..current` is the token being read. Both offsets are byte
/// indices and always sit on character boundaries, with
/// `token_start <= current <= source.len()`.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    token_start: usize,
    current: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            token_start: 0,
            current: 0,
        }
    }

    /// The next unread character, `None` at end of input.
    pub fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    /// Moves past the next character. Does nothing at end of input.
    pub fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.current += c.len_utf8();
        }
    }

    /// Starts a new token at the current position.
    pub fn start_token(&mut self) {
        self.token_start = self.current;
    }

    pub fn token(&self) -> &'src str {
        &self.source[self.token_start..self.current]
    }

    pub fn token_start(&self) -> usize {
        self.token_start
    }

    pub fn position(&self) -> usize {
        self.current
    }
}
