//! A minimal cursor over the input text. There is no separate token
//! stream: the parser reads one character of lookahead at a time and
//! decides what to do, matching the grammar's single-character operators
//! and alphanumeric identifiers.

pub struct Tokenizer<'a> {
    text: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Tokenizer {
            text,
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Rewinds the cursor to a position previously returned by
    /// [`Tokenizer::position`], for speculative parsing that backtracks on
    /// failure.
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn skip_whitespace(&mut self) {
        while matches!(self.current(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    /// Consumes `expected` as the next non-whitespace character, or returns
    /// `false` without moving the cursor.
    pub fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a maximal run of alphanumeric characters as an identifier.
    pub fn read_identifier(&mut self) -> String {
        let mut name = String::new();
        while matches!(self.current(), Some(c) if c.is_alphanumeric()) {
            name.push(self.current().unwrap());
            self.advance();
        }
        name
    }

    pub fn source(&self) -> &'a str {
        self.text
    }
}
