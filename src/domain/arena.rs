use std::collections::VecDeque;

use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::instrument;

use crate::domain::entities::Genotype;

/// Role of a node in the inheritance tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Parent(Genotype),
    ChildGroup,
    Child(Genotype),
}

/// Data payload for tree nodes: the display label and its role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    pub label: String,
    pub kind: NodeKind,
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct TreeNode {
    pub data: NodeData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in insertion order
    pub children: Vec<Index>,
}

/// Arena-based tree structure.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
#[derive(Debug)]
pub struct TreeArena {
    arena: Arena<TreeNode>,
    root: Option<Index>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> Index {
        let node = TreeNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// Level by level, left to right. Yields the node depth (root = 0).
    pub fn iter_breadth_first(&self) -> BreadthFirstIterator<'_> {
        BreadthFirstIterator::new(self)
    }

    /// Render as a `termtree` for terminal display.
    pub fn to_termtree(&self) -> Option<Tree<String>> {
        self.root.map(|root| self.subtree(root))
    }

    fn subtree(&self, idx: Index) -> Tree<String> {
        match self.get_node(idx) {
            Some(node) => Tree::new(node.data.label.clone())
                .with_leaves(node.children.iter().map(|&child| self.subtree(child))),
            None => Tree::new(String::new()),
        }
    }
}

pub struct BreadthFirstIterator<'a> {
    arena: &'a TreeArena,
    queue: VecDeque<(Index, usize)>,
}

impl<'a> BreadthFirstIterator<'a> {
    fn new(arena: &'a TreeArena) -> Self {
        let mut queue = VecDeque::new();
        if let Some(root) = arena.root() {
            queue.push_back((root, 0));
        }
        Self { arena, queue }
    }
}

impl<'a> Iterator for BreadthFirstIterator<'a> {
    type Item = (Index, usize, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, depth)) = self.queue.pop_front() {
            if let Some(node) = self.arena.get_node(current_idx) {
                for &child in &node.children {
                    self.queue.push_back((child, depth + 1));
                }
                return Some((current_idx, depth, node));
            }
        }
        None
    }
}
