//! Node arena - flat storage for decoded scene trees
//!
//! External asset decoders hand the engine a tree of nodes, each with
//! optional mesh data. The tree is stored as a flat `Vec` indexed by
//! [`NodeId`] handles; traversal is iterative with an explicit stack, so
//! arbitrarily deep assets cannot overflow the call stack and parent links
//! never form ownership cycles.

use crate::mesh::MeshData;
use core::fmt::Write as _;

/// Handle to a node in the arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Index into the arena's backing storage
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// A single node of a decoded asset
#[derive(Clone, Debug, Default)]
pub struct Node {
    /// Authoring name, when the source format carried one
    pub name: Option<String>,
    /// Parent node; `None` for roots
    pub parent: Option<NodeId>,
    /// Child nodes in authoring order
    pub children: Vec<NodeId>,
    /// Mesh fragment carried by this node, if any
    pub mesh: Option<MeshData>,
}

/// Flat arena of scene nodes
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Number of nodes stored
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a root node (no parent)
    pub fn add_root(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            parent: None,
            ..node
        });
        id
    }

    /// Add a child under `parent`, keeping both links consistent
    pub fn add_child(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            parent: Some(parent),
            ..node
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Get a node by handle
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a node mutably
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Depth-first preorder traversal of `root` and all its descendants.
    ///
    /// Iterative: children are pushed in reverse so they pop in authoring
    /// order.
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        Descendants {
            arena: self,
            stack: if self.get(root).is_some() {
                vec![root]
            } else {
                Vec::new()
            },
        }
    }

    /// Indented listing of the subtree under `root`, one node per line.
    ///
    /// Diagnostic helper for inspecting what a decoder produced; unnamed
    /// nodes are printed as `<unnamed>`.
    pub fn describe_tree(&self, root: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![(root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.get(id) else { continue };
            let name = node.name.as_deref().unwrap_or("<unnamed>");
            let _ = writeln!(out, "{}{}", "  ".repeat(depth), name);
            for &child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        out
    }
}

/// Iterator over a subtree, produced by [`NodeArena::descendants`]
pub struct Descendants<'a> {
    arena: &'a NodeArena,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.arena.get(id)?;
        for &child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some((id, node))
    }
}
