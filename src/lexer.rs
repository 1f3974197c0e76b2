use crate::ast::{Combinator, Token};

/// Turns a rule string into a flat token sequence.
///
/// Works on chars, not bytes, so multi-byte identifiers survive intact. Every
/// character that isn't structural (`(`, `)`, `||`, `&&`, `!`) is collected
/// into the pending identifier, which is trimmed when flushed.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    pending: String,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.trim().chars().collect(),
            position: 0,
            pending: String::new(),
            tokens: Vec::new(),
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn flush_identifier(&mut self) {
        let trimmed = self.pending.trim();
        if !trimmed.is_empty() {
            self.tokens.push(Token::Identifier(trimmed.to_string()));
        }
        self.pending.clear();
    }

    fn emit(&mut self, token: Token) {
        self.flush_identifier();
        self.tokens.push(token);
    }

    /// Scan the whole input. Tokenizing never fails.
    pub fn tokenize(mut self) -> Vec<Token> {
        while let Some(ch) = self.current_char() {
            match ch {
                '(' => self.emit(Token::GroupOpen),
                ')' => self.emit(Token::GroupClose),
                '|' if self.peek_char(1) == Some('|') => {
                    self.advance();
                    self.emit(Token::Combinator(Combinator::Or));
                }
                '&' if self.peek_char(1) == Some('&') => {
                    self.advance();
                    self.emit(Token::Combinator(Combinator::And));
                }
                '!' => self.emit(Token::Negation),
                other => self.pending.push(other),
            }
            self.advance();
        }

        self.flush_identifier();
        self.tokens
    }
}

/// Tokenize a rule string.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

#[test]
fn test_combinators() {
    assert_eq!(
        tokenize("a&&b"),
        vec![
            Token::Identifier("a".to_string()),
            Token::Combinator(Combinator::And),
            Token::Identifier("b".to_string()),
        ]
    );
}

#[test]
fn test_negated_or() {
    assert_eq!(
        tokenize("a || !b"),
        vec![
            Token::Identifier("a".to_string()),
            Token::Combinator(Combinator::Or),
            Token::Negation,
            Token::Identifier("b".to_string()),
        ]
    );
}
