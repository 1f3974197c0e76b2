//! # Pupil Rule Language - Abstract Syntax Tree
//!
//! This module defines the tokens and tree nodes of the Pupil rule language, a
//! compact notation for combining named checks on a single value.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[node]** - Tree nodes produced by the parser
//! - **[tree]** - The flat node arena a parse returns
//! - **[factory]** - Node construction with sequential identities
//! - **[invocation]** - Splitting an identifier into check name and parameters
//!
//! ## Quick Start
//!
//! ```text
//! required && (min:3 || email)
//! ```
//!
//! This rule requires a value that is either at least three long or an email.
//!
//! ## Core Concepts
//!
//! ### Checks
//!
//! An identifier names a registered check, optionally followed by a colon and
//! comma-separated parameters:
//!
//! ```text
//! required
//! between:3,10
//! otherEquals:password
//! ```
//!
//! ### Combinators and Groups
//!
//! `&&` and `||` combine results strictly left to right inside a group.
//! There is no precedence: use parentheses to group.
//!
//! ### Negation
//!
//! `!` inverts the next check or group:
//!
//! ```text
//! !email
//! !(min:3 && max:5)
//! ```
pub mod factory;
pub mod invocation;
pub mod node;
pub mod tokens;
pub mod tree;

pub use factory::NodeFactory;
pub use invocation::Invocation;
pub use node::{Node, NodeId, NodeKind};
pub use tokens::{Combinator, Token};
pub use tree::Tree;
