use crate::ast::{Node, NodeId};

/// A parsed rule.
///
/// Every node lives in one flat arena indexed by [`NodeId`]; groups refer to
/// their children by id. Nothing owns a subtree, so dropping, cloning and
/// comparing a tree never recurse, however deep the rule nests.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    pub(crate) fn new(nodes: Vec<Node>, root: NodeId) -> Self {
        Tree { nodes, root }
    }

    /// The root group
    pub fn root(&self) -> &Node {
        &self.nodes[self.root.0]
    }

    /// Look up a node of this tree.
    ///
    /// # Panics
    ///
    /// If `id` was issued for a different tree and is out of range.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Children of `node` in rule order; empty unless it is a group.
    pub fn children(&self, node: &Node) -> Vec<&Node> {
        node.children().iter().map(|id| self.node(*id)).collect()
    }

    /// All nodes, in construction order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::NodeKind;
    use crate::parser::parse;

    #[test]
    fn nodes_are_indexed_by_id() {
        let tree = parse("a && (b)").unwrap();

        assert_eq!(tree.len(), 5);
        for (index, node) in tree.nodes().iter().enumerate() {
            assert_eq!(node.id.0, index);
        }
        assert_eq!(tree.get(tree.root().children()[2]).map(|n| n.is_group()), Some(true));
        assert!(tree.get(crate::ast::NodeId(99)).is_none());
    }

    #[test]
    fn children_resolve_in_rule_order() {
        let tree = parse("a || !b").unwrap();
        let kinds: Vec<&NodeKind> = tree.children(tree.root()).iter().map(|n| &n.kind).collect();

        assert_eq!(kinds.len(), 4);
        assert!(matches!(kinds[0], NodeKind::Identifier(s) if s == "a"));
        assert!(matches!(kinds[2], NodeKind::Negation));
    }

    #[test]
    fn deep_trees_clone_compare_and_drop_flat() {
        let depth = 100_000;
        let rule = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
        let tree = parse(rule.as_str()).unwrap();
        let copy = tree.clone();

        assert!(tree == copy);
        assert_eq!(tree.len(), depth + 2);
    }
}
