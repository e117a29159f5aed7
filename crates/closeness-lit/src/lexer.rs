use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Ident(String),
    Number(f64),
    // Punctuation
    Colon,
    Comma,
    LBrace,
    RBrace,
    // Sentinel
    Eof,
}

/// A token together with the 1-based position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub line: usize,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, col: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<TokenWithPos>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments()?;
            let (line, col) = (self.line, self.col);
            let token = self.next_token()?;
            let eof = token == Token::Eof;
            tokens.push(TokenWithPos { token, line, col });
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        ParseError::new(msg, self.line, self.col)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), ParseError> {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.advance();
            }
            if self.rest().starts_with("//") {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.advance();
                }
            } else if self.rest().starts_with("/*") {
                let (line, col) = (self.line, self.col);
                self.advance(); self.advance(); // consume `/*`
                loop {
                    if self.rest().starts_with("*/") {
                        self.advance(); self.advance(); // consume `*/`
                        break;
                    }
                    if self.advance().is_none() {
                        return Err(ParseError::new("unterminated block comment", line, col));
                    }
                }
            } else {
                return Ok(());
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let ch = match self.peek() {
            None => return Ok(Token::Eof),
            Some(c) => c,
        };

        match ch {
            ':' => { self.advance(); Ok(Token::Colon) }
            ',' => { self.advance(); Ok(Token::Comma) }
            '{' => { self.advance(); Ok(Token::LBrace) }
            '}' => { self.advance(); Ok(Token::RBrace) }
            c if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => self.lex_number(),
            c if c.is_alphabetic() || c == '_' => Ok(self.lex_ident()),
            other => Err(self.err(format!("unexpected character {:?}", other))),
        }
    }

    fn eat_digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
            count += 1;
        }
        count
    }

    fn lex_number(&mut self) -> Result<Token, ParseError> {
        let (line, col) = (self.line, self.col);
        let start = self.pos;
        if matches!(self.peek(), Some('-' | '+')) {
            self.advance();
        }
        let mut digits = self.eat_digits();
        if self.peek() == Some('.') {
            self.advance();
            digits += self.eat_digits();
        }
        if digits == 0 {
            return Err(ParseError::new(
                format!("invalid number {:?}", &self.src[start..self.pos]),
                line,
                col,
            ));
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            self.advance();
            if matches!(self.peek(), Some('-' | '+')) {
                self.advance();
            }
            if self.eat_digits() == 0 {
                return Err(ParseError::new(
                    format!("missing exponent digits in {:?}", &self.src[start..self.pos]),
                    line,
                    col,
                ));
            }
        }
        let s = &self.src[start..self.pos];
        s.parse::<f64>()
            .map(Token::Number)
            .map_err(|_| ParseError::new(format!("invalid number {:?}", s), line, col))
    }

    fn lex_ident(&mut self) -> Token {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        Token::Ident(self.src[start..self.pos].to_string())
    }
}
