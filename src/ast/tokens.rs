use serde::{Deserialize, Serialize};

/// The two ways sibling results are folded together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combinator {
    /// Logical OR (`||`)
    Or,
    /// Logical AND (`&&`)
    And,
}

impl Combinator {
    /// The two-character symbol used in rule strings.
    pub fn symbol(self) -> &'static str {
        match self {
            Combinator::Or => "||",
            Combinator::And => "&&",
        }
    }
}

/// Lexical tokens produced by the lexer.
///
/// A token sequence can also be assembled by hand (see [`crate::chain::Chain`])
/// and handed to the parser directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Token {
    /// Opens a group
    ///
    /// # Examples
    /// ```text
    /// (required || email)
    /// ```
    GroupOpen,

    /// Closes the innermost open group
    GroupClose,

    /// `||` or `&&`
    ///
    /// A single `|` or `&` is not a combinator and stays part of an identifier.
    ///
    /// # Examples
    /// ```text
    /// required && email
    /// min:3 || max:0
    /// ```
    Combinator(Combinator),

    /// A check name with optional parameters, trimmed
    ///
    /// # Examples
    /// ```text
    /// required
    /// between:3,10
    /// otherEquals:password
    /// ```
    Identifier(String),

    /// Inverts the next result (`!`)
    ///
    /// # Examples
    /// ```text
    /// !email
    /// !(min:3 && max:5)
    /// ```
    Negation,
}
