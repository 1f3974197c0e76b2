//! Text rendering of parsed rule trees.
//!
//! One line per node, children indented two spaces below their group. Each
//! line shows the node identity and kind, which makes the left-to-right
//! structure the evaluator sees easy to eyeball.
//!
//! # Examples
//!
//! ```
//! use pupil::{parse, output::render_tree};
//!
//! let tree = parse("required && !(min:3)").unwrap();
//! assert_eq!(
//!     render_tree(&tree),
//!     "#0 group\n  #1 identifier required\n  #2 combinator &&\n  #3 negation\n  #4 group\n    #5 identifier min:3\n"
//! );
//! ```

use std::fmt::Write;

use crate::ast::Tree;

pub struct TreePrinter {
    indent: usize,
}

impl Default for TreePrinter {
    fn default() -> Self {
        TreePrinter { indent: 2 }
    }
}

impl TreePrinter {
    pub fn new(indent: usize) -> Self {
        TreePrinter { indent }
    }

    pub fn print(&self, tree: &Tree) -> String {
        let mut out = String::new();
        // (node, depth) pairs, children pushed in reverse to come out in order
        let mut pending = vec![(tree.root(), 0usize)];

        while let Some((node, depth)) = pending.pop() {
            let _ = writeln!(out, "{:width$}{}", "", node, width = depth * self.indent);
            pending.extend(
                node.children()
                    .iter()
                    .rev()
                    .map(|id| (tree.node(*id), depth + 1)),
            );
        }

        out
    }
}

/// Render a tree with two-space indentation.
pub fn render_tree(tree: &Tree) -> String {
    TreePrinter::default().print(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn empty_rule_renders_root_only() {
        assert_eq!(render_tree(&parse("").unwrap()), "#0 group\n");
    }

    #[test]
    fn custom_indent() {
        let tree = parse("(a)").unwrap();
        assert_eq!(
            TreePrinter::new(4).print(&tree),
            "#0 group\n    #1 group\n        #2 identifier a\n"
        );
    }
}
