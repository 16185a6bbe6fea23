use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{AxisKey, Leaf};

/// One node of a variation table: either a concrete leaf or a mapping from
/// axis keys to child nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Leaf(Leaf),
    Branch(BTreeMap<AxisKey, Node>),
}

impl Node {
    /// Child for `key`, when this node is a branch.
    pub fn child(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Branch(children) => children.get(&AxisKey::new(key)),
            Node::Leaf(_) => None,
        }
    }

    /// The leaf carried by this node, if it is one.
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Branch(_) => None,
        }
    }

    /// Keys available at this node, sorted; empty for leaves.
    pub fn keys(&self) -> Vec<&AxisKey> {
        match self {
            Node::Branch(children) => children.keys().collect(),
            Node::Leaf(_) => Vec::new(),
        }
    }

    fn project(&self) -> HashNode {
        match self {
            Node::Leaf(leaf) => HashNode::Leaf(leaf.hash.clone()),
            Node::Branch(children) => HashNode::Branch(
                children.iter().map(|(key, node)| (key.clone(), node.project())).collect(),
            ),
        }
    }
}

/// The hash-only projection of a [`Node`]: same shape, leaves replaced by
/// their content hashes. This is the form persisted for translation
/// hand-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HashNode {
    Leaf(String),
    Branch(BTreeMap<AxisKey, HashNode>),
}

/// A compiled, immutable lookup tree for one phrase.
///
/// Depth equals the number of axis-bearing tokens in declaration order.
/// Every internal node carries a `"*"` entry; the number level additionally
/// carries `"_1"` when a dedicated singular phrasing exists. Tables are
/// never mutated after construction and may be shared freely across
/// threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationTable {
    depth: usize,
    root: Node,
}

impl VariationTable {
    /// Wrap a tree, validating its shape.
    ///
    /// Checks that every path from the root reaches a leaf in exactly
    /// `depth` steps and that every internal node carries a `"*"` entry.
    pub fn new(depth: usize, root: Node) -> Result<Self, TableShapeError> {
        validate(&root, depth, 0)?;
        Ok(Self { depth, root })
    }

    /// Number of axes in this table.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Root node of the tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Walk a full key path to its leaf.
    pub fn leaf_at(&self, path: &[&str]) -> Option<&Leaf> {
        let mut node = &self.root;
        for key in path {
            node = node.child(key)?;
        }
        node.as_leaf()
    }

    /// Hash-only projection of this table.
    pub fn hash_table(&self) -> HashNode {
        self.root.project()
    }

    /// Every leaf of the table, depth-first.
    pub fn leaves(&self) -> Vec<&Leaf> {
        let mut out = Vec::new();
        collect_leaves(&self.root, &mut out);
        out
    }
}

fn collect_leaves<'a>(node: &'a Node, out: &mut Vec<&'a Leaf>) {
    match node {
        Node::Leaf(leaf) => out.push(leaf),
        Node::Branch(children) => {
            for child in children.values() {
                collect_leaves(child, out);
            }
        }
    }
}

fn validate(node: &Node, depth: usize, level: usize) -> Result<(), TableShapeError> {
    match node {
        Node::Leaf(_) => {
            if level != depth {
                return Err(TableShapeError::LeafDepth { expected: depth, got: level });
            }
            Ok(())
        }
        Node::Branch(children) => {
            if level >= depth {
                return Err(TableShapeError::BranchDepth { expected: depth, got: level });
            }
            if !children.contains_key(&AxisKey::wildcard()) {
                return Err(TableShapeError::MissingWildcard { level });
            }
            for child in children.values() {
                validate(child, depth, level + 1)?;
            }
            Ok(())
        }
    }
}

/// Shape violations rejected when wrapping a tree in a [`VariationTable`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TableShapeError {
    #[error("leaf found at level {got}, expected depth {expected}")]
    LeafDepth { expected: usize, got: usize },

    #[error("branch found at level {got}, expected leaf at depth {expected}")]
    BranchDepth { expected: usize, got: usize },

    #[error("level {level} has no '*' entry")]
    MissingWildcard { level: usize },
}
