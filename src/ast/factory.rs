use crate::ast::{Combinator, Node, NodeId, NodeKind, Tree};

/// Builds nodes into an arena and hands out sequential identities.
///
/// Use a fresh factory for each independent parse so identities start from
/// zero again.
#[derive(Debug, Default)]
pub struct NodeFactory {
    nodes: Vec<Node>,
}

impl NodeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    fn make(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { id, kind });
        id
    }

    pub fn identifier(&mut self, raw: impl Into<String>) -> NodeId {
        self.make(NodeKind::Identifier(raw.into()))
    }

    pub fn combinator(&mut self, combinator: Combinator) -> NodeId {
        self.make(NodeKind::Combinator(combinator))
    }

    /// An empty group
    pub fn group(&mut self) -> NodeId {
        self.make(NodeKind::Group(Vec::new()))
    }

    pub fn negation(&mut self) -> NodeId {
        self.make(NodeKind::Negation)
    }

    /// Append `child` to `group`. Ignored unless `group` is a group node.
    pub fn attach(&mut self, group: NodeId, child: NodeId) {
        if let Some(Node {
            kind: NodeKind::Group(children),
            ..
        }) = self.nodes.get_mut(group.0)
        {
            children.push(child);
        }
    }

    /// Number of nodes built so far.
    pub fn issued(&self) -> usize {
        self.nodes.len()
    }

    /// Close the arena into a tree rooted at `root`.
    pub fn finish(self, root: NodeId) -> Tree {
        Tree::new(self.nodes, root)
    }
}
