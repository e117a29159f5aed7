use crate::ast::{Document, Node, Prop, Value};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

// ── Parser ────────────────────────────────────────────────────────────────

/// Deepest block nesting accepted before parsing fails.
pub const MAX_NESTING_DEPTH: usize = 64;

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0, depth: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .map(|t| (t.line, t.col))
            .or_else(|| self.tokens.last().map(|t| (t.line, t.col)))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    /// Look at the token `offset` positions ahead of current without consuming.
    fn peek_ahead(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos)
            .map(|t| t.token.clone())
            .unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::new(msg, line, col)
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.peek().clone() {
            Token::Ident(s) => {
                self.advance();
                Ok(s)
            }
            tok => Err(self.err(format!("expected identifier, got {:?}", tok))),
        }
    }

    // ── Document ──────────────────────────────────────────────────────────

    pub fn parse_document(&mut self) -> Result<Document, ParseError> {
        let mut nodes = Vec::new();
        loop {
            match self.peek() {
                Token::Eof => break,
                Token::Comma => { self.advance(); }
                _ => nodes.push(self.parse_node()?),
            }
        }
        Ok(Document { nodes })
    }

    // ── Node ──────────────────────────────────────────────────────────────

    fn parse_node(&mut self) -> Result<Node, ParseError> {
        let (line, col) = self.current_pos();
        let name = self.expect_ident()?;

        // A bare name without a block is a node with no properties.
        let (props, children) = if self.peek() == &Token::LBrace {
            self.parse_block()?
        } else {
            (Vec::new(), Vec::new())
        };

        Ok(Node { name, props, children, line, col })
    }

    // ── Block ─────────────────────────────────────────────────────────────

    /// Parse `{ item* }` where each item is either a `key: value` property
    /// or a nested node, optionally separated by commas.
    ///
    /// Disambiguation: when we see `Ident`, we look one token ahead:
    /// - `Ident ":"` → property
    /// - `Ident <anything else>` → nested node
    fn parse_block(&mut self) -> Result<(Vec<Prop>, Vec<Node>), ParseError> {
        if self.depth == MAX_NESTING_DEPTH {
            return Err(self.err(format!("blocks nested deeper than {} levels", MAX_NESTING_DEPTH)));
        }
        self.depth += 1;
        let block = self.parse_block_items();
        self.depth -= 1;
        block
    }

    fn parse_block_items(&mut self) -> Result<(Vec<Prop>, Vec<Node>), ParseError> {
        self.advance(); // consume `{`
        let mut props = Vec::new();
        let mut children = Vec::new();

        loop {
            match self.peek() {
                Token::RBrace => { self.advance(); break; }
                Token::Comma  => { self.advance(); }
                Token::Eof    => return Err(self.err("unclosed '{' block")),
                Token::Ident(_) => {
                    if self.peek_ahead(1) == &Token::Colon {
                        props.push(self.parse_prop()?);
                    } else {
                        children.push(self.parse_node()?);
                    }
                }
                tok => {
                    return Err(self.err(format!(
                        "unexpected {:?} inside block, expected a property (key: value) or a node name",
                        tok
                    )));
                }
            }
        }

        Ok((props, children))
    }

    // ── Prop ──────────────────────────────────────────────────────────────

    fn parse_prop(&mut self) -> Result<Prop, ParseError> {
        let (line, _) = self.current_pos();
        let key = self.expect_ident()?;
        self.advance(); // consume `:`
        let value = self.parse_value()?;
        Ok(Prop { key, value, line })
    }

    // ── Value ─────────────────────────────────────────────────────────────

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek().clone() {
            Token::Number(n) => { self.advance(); Ok(Value::Number(n)) }
            Token::Ident(s)  => { self.advance(); Ok(Value::Ident(s)) }
            tok => Err(self.err(format!("expected a value, got {:?}", tok))),
        }
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse shape literal source into a [`Document`].
pub fn parse_str(src: &str) -> Result<Document, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_document()
}
