pub mod ast;
pub mod batch;
pub mod chain;
pub mod checks;
pub mod evaluator;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod registry;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{Combinator, Invocation, Node, NodeFactory, NodeId, NodeKind, Token, Tree};
pub use batch::{Field, Fields, RuleBatch, ValidationResults};
pub use chain::Chain;
pub use evaluator::{EvalContext, EvalError, ValidationError, Validator};
pub use lexer::{Lexer, tokenize};
pub use parser::{ParseError, Parser, Rule, parse};
pub use registry::{CheckFn, CheckRegistry};
pub use value::Value;
