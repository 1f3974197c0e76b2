use std::mem;

use crate::{
    ast::{NodeFactory, NodeId, Token, Tree},
    lexer::tokenize,
};

/// Errors that can occur while building a rule tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The rule was neither a string nor a token sequence
    #[error("Unknown input type: {0}")]
    InvalidInput(String),

    /// One or more groups were still open at the end of input
    #[error("Unclosed blocks: {depth} group(s) never closed")]
    UnclosedBlocks { depth: usize },

    /// A `)` appeared with no open group
    #[error("No block to ascend to at token {position}")]
    UnmatchedClose { position: usize },
}

/// A rule in either of its accepted shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Rule string, tokenized before parsing
    Text(String),

    /// Already tokenized rule, parsed as is
    Tokens(Vec<Token>),
}

impl Rule {
    pub fn into_tokens(self) -> Vec<Token> {
        match self {
            Rule::Text(text) => tokenize(&text),
            Rule::Tokens(tokens) => tokens,
        }
    }
}

impl From<&str> for Rule {
    fn from(text: &str) -> Self {
        Rule::Text(text.to_string())
    }
}

impl From<String> for Rule {
    fn from(text: String) -> Self {
        Rule::Text(text)
    }
}

impl From<&String> for Rule {
    fn from(text: &String) -> Self {
        Rule::Text(text.clone())
    }
}

impl From<Vec<Token>> for Rule {
    fn from(tokens: Vec<Token>) -> Self {
        Rule::Tokens(tokens)
    }
}

impl From<&[Token]> for Rule {
    fn from(tokens: &[Token]) -> Self {
        Rule::Tokens(tokens.to_vec())
    }
}

impl TryFrom<serde_json::Value> for Rule {
    type Error = ParseError;

    /// Accepts a JSON string or a JSON array of tokens.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(text) => Ok(Rule::Text(text)),
            tokens @ serde_json::Value::Array(_) => serde_json::from_value(tokens)
                .map(Rule::Tokens)
                .map_err(|e| ParseError::InvalidInput(format!("malformed token sequence ({e})"))),
            other => Err(ParseError::InvalidInput(json_type_name(&other).to_string())),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Builds a tree of nodes from a token sequence.
///
/// Nodes go into the factory's arena as they are seen. Nesting is tracked with
/// an explicit stack of the enclosing group ids rather than recursion, so rule
/// depth is bounded by memory and not by the call stack.
pub struct Parser {
    tokens: Vec<Token>,
    factory: NodeFactory,
}

impl Parser {
    pub fn new(rule: impl Into<Rule>) -> Self {
        Parser {
            tokens: rule.into().into_tokens(),
            factory: NodeFactory::new(),
        }
    }

    /// Parse the whole sequence into a tree under a root group.
    pub fn parse(mut self) -> Result<Tree, ParseError> {
        let tokens = mem::take(&mut self.tokens);
        let root = self.factory.group();
        let mut current = root;
        let mut enclosing: Vec<NodeId> = Vec::new();

        for (position, token) in tokens.into_iter().enumerate() {
            let node = match token {
                Token::GroupOpen => {
                    let group = self.factory.group();
                    enclosing.push(mem::replace(&mut current, group));
                    continue;
                }
                Token::GroupClose => {
                    let parent = enclosing
                        .pop()
                        .ok_or(ParseError::UnmatchedClose { position })?;
                    let finished = mem::replace(&mut current, parent);
                    self.factory.attach(current, finished);
                    continue;
                }
                Token::Combinator(combinator) => self.factory.combinator(combinator),
                Token::Identifier(raw) => self.factory.identifier(raw),
                Token::Negation => self.factory.negation(),
            };
            self.factory.attach(current, node);
        }

        if !enclosing.is_empty() {
            return Err(ParseError::UnclosedBlocks {
                depth: enclosing.len(),
            });
        }

        Ok(self.factory.finish(root))
    }
}

/// Parse a rule string or token sequence into a tree.
pub fn parse(rule: impl Into<Rule>) -> Result<Tree, ParseError> {
    Parser::new(rule).parse()
}
