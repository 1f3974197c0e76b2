use std::fmt;

use crate::ast::Combinator;

/// Identity of a node within one parse.
///
/// Assigned in construction order by [`crate::ast::NodeFactory`], and doubles
/// as the node's index in its [`crate::ast::Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One element of a parsed rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Raw check reference, `name` or `name:param1,param2`
    Identifier(String),

    /// Switches the fold used for the results that follow it
    Combinator(Combinator),

    /// Ordered children, possibly empty. The parse root is always a group.
    Group(Vec<NodeId>),

    /// Inverts the next result in the same group
    Negation,
}

impl Node {
    /// Children of a group; empty for every other kind.
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Group(children) => children,
            _ => &[],
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, NodeKind::Group(_))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Identifier(raw) => write!(f, "{} identifier {}", self.id, raw),
            NodeKind::Combinator(c) => write!(f, "{} combinator {}", self.id, c.symbol()),
            NodeKind::Group(_) => write!(f, "{} group", self.id),
            NodeKind::Negation => write!(f, "{} negation", self.id),
        }
    }
}
