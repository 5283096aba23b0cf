//! Arena-style menu tree
//!
//! All nodes of one menu are loaded into a flat id-indexed map with a
//! parent -> children index built once; the walk is iterative, one level per
//! input token. No back-references, no recursion at serve time.

use super::models::MenuNode;
use std::collections::HashMap;

/// Why a tree walk did not reach a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkError {
    /// The menu has no root node at all
    EmptyMenu,
    /// A token matched no child trigger at the current depth
    InvalidSelection,
}

/// Immutable in-memory tree of one menu's nodes
#[derive(Debug, Clone)]
pub struct MenuTree {
    nodes: HashMap<i64, MenuNode>,
    /// parent node id (None = root level) -> child ids, in id order
    children: HashMap<Option<i64>, Vec<i64>>,
}

impl MenuTree {
    /// Build the arena from a flat node list.
    ///
    /// Nodes are indexed in id order so "first match wins" is deterministic
    /// when the store holds duplicate triggers under one parent.
    pub fn from_nodes(mut nodes: Vec<MenuNode>) -> Self {
        nodes.sort_by_key(|n| n.id);

        let mut children: HashMap<Option<i64>, Vec<i64>> = HashMap::new();
        for node in &nodes {
            children.entry(node.parent_id).or_default().push(node.id);
        }

        let nodes = nodes.into_iter().map(|n| (n.id, n)).collect();
        Self { nodes, children }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, id: i64) -> Option<&MenuNode> {
        self.nodes.get(&id)
    }

    /// The root node: the first node with no parent
    pub fn root(&self) -> Option<&MenuNode> {
        self.children
            .get(&None)
            .and_then(|ids| ids.first())
            .and_then(|id| self.nodes.get(id))
    }

    /// Children of a node, in id order
    pub fn children_of(&self, id: i64) -> impl Iterator<Item = &MenuNode> {
        self.children
            .get(&Some(id))
            .into_iter()
            .flatten()
            .filter_map(|child_id| self.nodes.get(child_id))
    }

    /// Walk the tree following the accumulated input string.
    ///
    /// The input is split on the aggregator's `*` delimiter into trigger
    /// tokens; each token descends one level by matching child triggers.
    /// Empty input stays at the root. A walk over N tokens either reaches a
    /// node at depth N or fails with `InvalidSelection`.
    pub fn walk(&self, input: &str) -> Result<&MenuNode, WalkError> {
        let mut current = self.root().ok_or(WalkError::EmptyMenu)?;

        if input.is_empty() {
            return Ok(current);
        }

        for token in input.split('*') {
            current = self
                .children_of(current.id)
                .find(|child| child.trigger == token)
                .ok_or(WalkError::InvalidSelection)?;
        }

        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::models::ResponseKind;

    fn node(id: i64, parent: Option<i64>, trigger: &str, kind: ResponseKind, text: &str) -> MenuNode {
        MenuNode {
            id,
            menu_id: 1,
            parent_id: parent,
            trigger: trigger.to_string(),
            kind,
            text: text.to_string(),
        }
    }

    fn sample_tree() -> MenuTree {
        MenuTree::from_nodes(vec![
            node(1, None, "", ResponseKind::Continue, "Welcome\n1. Account\n2. Phone"),
            node(2, Some(1), "1", ResponseKind::Continue, "1. Number\n2. Balance"),
            node(3, Some(1), "2", ResponseKind::Terminal, "Your phone number is on file"),
            node(4, Some(2), "1", ResponseKind::Terminal, "Your account number is ACC1"),
            node(5, Some(2), "2", ResponseKind::Terminal, "Your balance is 10,000"),
        ])
    }

    #[test]
    fn test_empty_input_returns_root() {
        let tree = sample_tree();
        let root = tree.walk("").unwrap();
        assert_eq!(root.id, 1);
        assert_eq!(root.kind, ResponseKind::Continue);
    }

    #[test]
    fn test_walk_descends_one_level_per_token() {
        let tree = sample_tree();

        let level1 = tree.walk("1").unwrap();
        assert_eq!(level1.id, 2);

        let level2 = tree.walk("1*2").unwrap();
        assert_eq!(level2.id, 5);
        assert_eq!(level2.kind, ResponseKind::Terminal);
    }

    #[test]
    fn test_walk_depth_matches_token_count() {
        let tree = sample_tree();

        // Every reachable path of N tokens ends at depth N.
        for (input, expected_depth) in [("", 0usize), ("1", 1), ("2", 1), ("1*1", 2), ("1*2", 2)] {
            let reached = tree.walk(input).unwrap();
            let mut depth = 0;
            let mut cursor = reached.parent_id;
            while let Some(pid) = cursor {
                depth += 1;
                cursor = tree.get(pid).unwrap().parent_id;
            }
            assert_eq!(depth, expected_depth, "input {:?}", input);
        }
    }

    #[test]
    fn test_unmatched_token_is_invalid_selection() {
        let tree = sample_tree();
        assert_eq!(tree.walk("9").unwrap_err(), WalkError::InvalidSelection);
        assert_eq!(tree.walk("1*9").unwrap_err(), WalkError::InvalidSelection);
        // Descending past a leaf fails the same way
        assert_eq!(tree.walk("2*1").unwrap_err(), WalkError::InvalidSelection);
        // A trailing delimiter produces an empty token, which matches nothing
        assert_eq!(tree.walk("1*").unwrap_err(), WalkError::InvalidSelection);
    }

    #[test]
    fn test_empty_menu() {
        let tree = MenuTree::from_nodes(vec![]);
        assert!(tree.is_empty());
        assert_eq!(tree.walk("").unwrap_err(), WalkError::EmptyMenu);
    }

    #[test]
    fn test_duplicate_triggers_first_match_wins() {
        let tree = MenuTree::from_nodes(vec![
            node(1, None, "", ResponseKind::Continue, "root"),
            node(2, Some(1), "1", ResponseKind::Terminal, "first"),
            node(3, Some(1), "1", ResponseKind::Terminal, "second"),
        ]);
        assert_eq!(tree.walk("1").unwrap().id, 2);
    }
}
