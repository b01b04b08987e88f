//! Self-adjusting suggestion tree for misspelled location names.
//!
//! [`SuggestTree`] is a splay tree keyed by location name. Every lookup
//! rotates the last node on its search path to the root and that node is
//! returned as the suggestion. For a name that is stored this is the name
//! itself; otherwise it is one of the two stored names that sort immediately
//! before or after the query. Closeness is therefore lexicographic
//! neighbourhood as shaped by recent accesses, not edit distance.
//!
//! Nodes live in an arena and link to their children by index, so the whole
//! tree is released at once when it is dropped.

use std::cmp::Ordering;

use tracing::trace;

use crate::error::{Error, Result};

type NodeId = usize;

#[derive(Debug, Clone)]
struct SuggestNode {
    name: String,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl SuggestNode {
    fn new(name: String) -> Self {
        Self {
            name,
            left: None,
            right: None,
        }
    }
}

/// Splay tree over location names used to propose a close match.
#[derive(Debug, Clone, Default)]
pub struct SuggestTree {
    nodes: Vec<SuggestNode>,
    root: Option<NodeId>,
}

impl SuggestTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Name currently stored at the root, if any.
    pub fn root_name(&self) -> Option<&str> {
        self.root.map(|id| self.nodes[id].name.as_str())
    }

    /// Check whether `name` is stored without restructuring the tree.
    pub fn contains(&self, name: &str) -> bool {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match name.cmp(node.name.as_str()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Insert `name`, leaving it at the root. Duplicates are ignored.
    pub fn insert(&mut self, name: impl Into<String>) {
        let name = name.into();
        let Some(root) = self.root else {
            self.root = Some(self.alloc(name));
            return;
        };

        let root = self.splay(root, &name);
        self.root = Some(root);

        let ordering = name.as_str().cmp(self.nodes[root].name.as_str());
        if ordering == Ordering::Equal {
            return;
        }

        let node = self.alloc(name);
        if ordering == Ordering::Less {
            self.nodes[node].left = self.nodes[root].left.take();
            self.nodes[node].right = Some(root);
        } else {
            self.nodes[node].right = self.nodes[root].right.take();
            self.nodes[node].left = Some(root);
        }
        self.root = Some(node);
    }

    /// Splay toward `name` and return the name that ends up at the root.
    pub fn search(&mut self, name: &str) -> Result<String> {
        let root = self.root.ok_or(Error::EmptySuggestTree)?;
        let root = self.splay(root, name);
        self.root = Some(root);

        let suggestion = self.nodes[root].name.clone();
        trace!(query = name, suggestion = %suggestion, "splayed suggestion tree");
        Ok(suggestion)
    }

    fn alloc(&mut self, name: String) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(SuggestNode::new(name));
        id
    }

    /// Top-down splay of the subtree rooted at `root` toward `key`.
    ///
    /// Nodes passed on the way down are peeled off into a left tree (all
    /// smaller than `key`) and a right tree (all larger). A zig-zig step
    /// rotates before linking; zig and zig-zag steps link directly. When the
    /// walk stops, the final node adopts both side trees as its children.
    fn splay(&mut self, root: NodeId, key: &str) -> NodeId {
        let mut current = root;
        // Head and tail (largest node) of the left tree, head and tail
        // (smallest node) of the right tree.
        let mut left: Option<(NodeId, NodeId)> = None;
        let mut right: Option<(NodeId, NodeId)> = None;

        loop {
            match key.cmp(self.nodes[current].name.as_str()) {
                Ordering::Less => {
                    let Some(mut child) = self.nodes[current].left else {
                        break;
                    };
                    if key < self.nodes[child].name.as_str() {
                        current = self.rotate_right(current);
                        match self.nodes[current].left {
                            Some(next) => child = next,
                            None => break,
                        }
                    }
                    right = Some(match right {
                        Some((head, tail)) => {
                            self.nodes[tail].left = Some(current);
                            (head, current)
                        }
                        None => (current, current),
                    });
                    current = child;
                }
                Ordering::Greater => {
                    let Some(mut child) = self.nodes[current].right else {
                        break;
                    };
                    if key > self.nodes[child].name.as_str() {
                        current = self.rotate_left(current);
                        match self.nodes[current].right {
                            Some(next) => child = next,
                            None => break,
                        }
                    }
                    left = Some(match left {
                        Some((head, tail)) => {
                            self.nodes[tail].right = Some(current);
                            (head, current)
                        }
                        None => (current, current),
                    });
                    current = child;
                }
                Ordering::Equal => break,
            }
        }

        if let Some((head, tail)) = left {
            self.nodes[tail].right = self.nodes[current].left;
            self.nodes[current].left = Some(head);
        }
        if let Some((head, tail)) = right {
            self.nodes[tail].left = self.nodes[current].right;
            self.nodes[current].right = Some(head);
        }
        current
    }

    fn rotate_right(&mut self, node: NodeId) -> NodeId {
        let Some(pivot) = self.nodes[node].left else {
            return node;
        };
        self.nodes[node].left = self.nodes[pivot].right;
        self.nodes[pivot].right = Some(node);
        pivot
    }

    fn rotate_left(&mut self, node: NodeId) -> NodeId {
        let Some(pivot) = self.nodes[node].right else {
            return node;
        };
        self.nodes[node].right = self.nodes[pivot].left;
        self.nodes[pivot].left = Some(node);
        pivot
    }

    #[cfg(test)]
    fn in_order(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut stack = Vec::new();
        let mut current = self.root;
        while current.is_some() || !stack.is_empty() {
            while let Some(id) = current {
                stack.push(id);
                current = self.nodes[id].left;
            }
            if let Some(id) = stack.pop() {
                names.push(self.nodes[id].name.as_str());
                current = self.nodes[id].right;
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_from(names: &[&str]) -> SuggestTree {
        let mut tree = SuggestTree::new();
        for name in names {
            tree.insert(*name);
        }
        tree
    }

    #[test]
    fn search_on_empty_tree_fails() {
        let mut tree = SuggestTree::new();
        assert!(matches!(tree.search("anything"), Err(Error::EmptySuggestTree)));
    }

    #[test]
    fn insert_places_new_name_at_root() {
        let mut tree = tree_from(&["delta", "alpha"]);
        assert_eq!(tree.root_name(), Some("alpha"));
        tree.insert("beta");
        assert_eq!(tree.root_name(), Some("beta"));
    }

    #[test]
    fn duplicate_insert_is_ignored() {
        let tree = tree_from(&["gamma", "alpha", "gamma", "alpha"]);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.in_order(), vec!["alpha", "gamma"]);
    }

    #[test]
    fn splaying_preserves_order() {
        let names = [
            "main_gate",
            "library",
            "canteen",
            "ground",
            "hostel_office",
            "acoe",
            "sbi",
            "vivek_audi",
        ];
        let mut tree = tree_from(&names);
        for query in ["zzz", "a", "hostel", "library", "m", "canteen"] {
            tree.search(query).expect("non-empty tree");
            let mut sorted = names.to_vec();
            sorted.sort_unstable();
            assert_eq!(tree.in_order(), sorted);
        }
    }

    #[test]
    fn sorted_insertion_then_deep_search_keeps_every_node() {
        let names: Vec<String> = (0..500).map(|i| format!("loc_{i:04}")).collect();
        let mut tree = SuggestTree::new();
        for name in &names {
            tree.insert(name.clone());
        }

        assert_eq!(tree.search("loc_0000").expect("non-empty"), "loc_0000");
        assert_eq!(tree.in_order().len(), names.len());
    }

    #[test]
    fn contains_does_not_restructure() {
        let tree = tree_from(&["delta", "alpha", "beta"]);
        assert!(tree.contains("delta"));
        assert!(!tree.contains("epsilon"));
        assert_eq!(tree.root_name(), Some("beta"));
    }
}
