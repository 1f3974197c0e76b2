//! Fluent construction of rules as token sequences.
//!
//! A chain emits the same tokens the lexer would produce for the equivalent
//! rule string, without any string formatting or escaping concerns.
//!
//! ```
//! use pupil::{Chain, Validator};
//!
//! // required && min:3 || (email)
//! let chain = Chain::check("required", &[])
//!     .and_check("min", &["3"])
//!     .or(Chain::check("email", &[]));
//!
//! let validator = Validator::new();
//! assert!(chain.validate(&validator, "ada").unwrap());
//! assert!(!chain.validate(&validator, "").unwrap());
//! ```

use crate::{
    ast::{Combinator, Token},
    evaluator::{ValidationError, Validator},
    value::Value,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    tokens: Vec<Token>,
}

fn identifier(name: &str, params: &[&str]) -> Token {
    if params.is_empty() {
        Token::Identifier(name.to_string())
    } else {
        Token::Identifier(format!("{}:{}", name, params.join(",")))
    }
}

impl Chain {
    /// Start a chain with a single check.
    pub fn check(name: &str, params: &[&str]) -> Self {
        Chain {
            tokens: vec![identifier(name, params)],
        }
    }

    /// Append `&& name:params`.
    pub fn and_check(mut self, name: &str, params: &[&str]) -> Self {
        self.tokens.push(Token::Combinator(Combinator::And));
        self.tokens.push(identifier(name, params));
        self
    }

    /// Append `&& (other)`.
    pub fn and(self, other: Chain) -> Self {
        self.attach(Combinator::And, other)
    }

    /// Append `|| (other)`.
    pub fn or(self, other: Chain) -> Self {
        self.attach(Combinator::Or, other)
    }

    fn attach(mut self, combinator: Combinator, other: Chain) -> Self {
        self.tokens.push(Token::Combinator(combinator));
        self.tokens.push(Token::GroupOpen);
        self.tokens.extend(other.tokens);
        self.tokens.push(Token::GroupClose);
        self
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Validate a single value against this chain.
    pub fn validate(
        &self,
        validator: &Validator,
        value: impl Into<Value>,
    ) -> Result<bool, ValidationError> {
        validator.validate_one(value, self.tokens())
    }
}

impl From<Chain> for crate::parser::Rule {
    fn from(chain: Chain) -> Self {
        crate::parser::Rule::Tokens(chain.tokens)
    }
}
