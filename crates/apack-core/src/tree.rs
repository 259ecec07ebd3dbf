//! Parsed animation pack tree.
//!
//! A parsed pack is a tree of [`TreeNode`]s. The root is synthetic and never
//! corresponds to a source line; every other node represents one logical line
//! of the source, and its children are the lines indented beneath it.
//!
//! ```text
//! rotate 45 @300ms (spin)      → root.children[0]
//!     scale 2                  → root.children[0].children[0]
//!     fade 0.5 @1s             → root.children[0].children[1]
//! (checkpoint)                 → root.children[1]  (tag-only node)
//! ```

use std::fmt;

/// A named visual operation with its raw parameters.
///
/// Parameters are kept exactly as written; interpreting `"45"` as degrees or
/// `"0.5"` as opacity is left to the consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    name: String,
    params: Vec<String>,
}

impl Action {
    /// Creates an action from a name and its parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use apack_core::tree::Action;
    ///
    /// let action = Action::new("rotate", ["45"]);
    /// assert_eq!(action.name(), "rotate");
    /// assert_eq!(action.params(), ["45"]);
    /// ```
    pub fn new<I, S>(name: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for param in &self.params {
            write!(f, " {param}")?;
        }
        Ok(())
    }
}

/// One node of the parsed tree.
///
/// # Line index
///
/// `line_index` is the position of the node's line among the *logical* lines
/// of the source (blank and comment-only lines are not counted). The synthetic
/// root has no line index.
///
/// # Duration
///
/// Durations are always stored in milliseconds, whatever unit was written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeNode {
    line_index: Option<usize>,
    tag: Option<String>,
    duration: Option<f64>,
    actions: Vec<Action>,
    children: Vec<TreeNode>,
}

impl TreeNode {
    /// Creates the synthetic root holding the given top-level nodes.
    pub fn root(children: Vec<TreeNode>) -> Self {
        Self {
            line_index: None,
            tag: None,
            duration: None,
            actions: Vec::new(),
            children,
        }
    }

    /// Creates an empty node for the logical line at `line_index`.
    ///
    /// Use the `with_*` methods to fill in the rest.
    ///
    /// # Examples
    ///
    /// ```
    /// use apack_core::tree::{Action, TreeNode};
    ///
    /// let node = TreeNode::line(0)
    ///     .with_tag("mark1")
    ///     .with_duration(300.0)
    ///     .with_actions(vec![Action::new("rotate", ["45"])]);
    ///
    /// assert_eq!(node.line_index(), Some(0));
    /// assert_eq!(node.tag(), Some("mark1"));
    /// assert_eq!(node.duration(), Some(300.0));
    /// ```
    pub fn line(line_index: usize) -> Self {
        Self {
            line_index: Some(line_index),
            tag: None,
            duration: None,
            actions: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Sets the duration, in milliseconds.
    pub fn with_duration(mut self, millis: f64) -> Self {
        self.duration = Some(millis);
        self
    }

    pub fn with_actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = actions;
        self
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    /// Index of this node's line among the logical lines, `None` for the root.
    pub fn line_index(&self) -> Option<usize> {
        self.line_index
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Duration in milliseconds.
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Returns `true` for the synthetic root.
    pub fn is_root(&self) -> bool {
        self.line_index.is_none()
    }

    /// Returns `true` for a line that carries only a tag.
    pub fn is_tag_only(&self) -> bool {
        !self.is_root() && self.actions.is_empty() && self.tag.is_some()
    }

    /// Number of nesting levels below this node.
    ///
    /// A node without children has depth 0; a root with only top-level
    /// lines has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&TreeNode, usize)> =
            self.children.iter().map(|child| (child, 1)).collect();
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Number of nodes below this node, at any depth.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if this node has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterates over all descendants in depth-first pre-order, which is the
    /// order their lines appear in the source.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: self.children.iter().rev().collect(),
        }
    }
}

// Deep trees are dropped iteratively.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// Depth-first pre-order iterator over the descendants of a [`TreeNode`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl<'a> IntoIterator for &'a TreeNode {
    type Item = &'a TreeNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> TreeNode {
        TreeNode::root(vec![
            TreeNode::line(0)
                .with_actions(vec![Action::new("rotate", ["45"])])
                .with_children(vec![
                    TreeNode::line(1).with_actions(vec![Action::new("scale", ["2"])]),
                    TreeNode::line(2)
                        .with_actions(vec![Action::new("fade", ["0.5"])])
                        .with_children(vec![TreeNode::line(3).with_tag("end")]),
                ]),
            TreeNode::line(4).with_tag("checkpoint"),
        ])
    }

    #[test]
    fn test_root_has_no_line_index() {
        let root = TreeNode::root(Vec::new());
        assert!(root.is_root());
        assert_eq!(root.line_index(), None);
        assert_eq!(root.tag(), None);
        assert_eq!(root.duration(), None);
        assert!(root.actions().is_empty());
        assert!(root.is_empty());
    }

    #[test]
    fn test_tag_only_node() {
        let node = TreeNode::line(3).with_tag("mark");
        assert!(node.is_tag_only());
        assert!(!node.is_root());

        let action_node = TreeNode::line(3)
            .with_tag("mark")
            .with_actions(vec![Action::new("fade", ["1"])]);
        assert!(!action_node.is_tag_only());
    }

    #[test]
    fn test_depth_and_len() {
        let tree = sample_tree();
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.children()[1].depth(), 0);
        assert_eq!(tree.children()[1].len(), 0);
    }

    #[test]
    fn test_iter_follows_source_order() {
        let tree = sample_tree();
        let indices: Vec<Option<usize>> = tree.iter().map(TreeNode::line_index).collect();
        assert_eq!(indices, [Some(0), Some(1), Some(2), Some(3), Some(4)].to_vec());
    }

    #[test]
    fn test_into_iterator_for_reference() {
        let tree = sample_tree();
        let tags: Vec<&str> = (&tree).into_iter().filter_map(TreeNode::tag).collect();
        assert_eq!(tags, ["end", "checkpoint"]);
    }

    #[test]
    fn test_deep_chain_is_measured_and_dropped() {
        let mut node = TreeNode::line(99_999);
        for index in (0..99_999).rev() {
            node = TreeNode::line(index).with_children(vec![node]);
        }
        let tree = TreeNode::root(vec![node]);

        assert_eq!(tree.depth(), 100_000);
        assert_eq!(tree.len(), 100_000);
        drop(tree);
    }

    #[test]
    fn test_action_display() {
        let action = Action::new("translateX", ["10", "ease-in"]);
        assert_eq!(action.to_string(), "translateX 10 ease-in");
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Builds a chain where each node is the only child of the previous one.
    fn chain(length: usize) -> TreeNode {
        let mut node: Option<TreeNode> = None;
        for index in (0..length).rev() {
            let mut current = TreeNode::line(index);
            if let Some(child) = node.take() {
                current = current.with_children(vec![child]);
            }
            node = Some(current);
        }
        TreeNode::root(node.into_iter().collect())
    }

    proptest! {
        #[test]
        fn chain_depth_matches_length(length in 0usize..32) {
            let tree = chain(length);
            prop_assert_eq!(tree.depth(), length);
            prop_assert_eq!(tree.len(), length);
            prop_assert_eq!(tree.iter().count(), length);
        }

        #[test]
        fn flat_tree_iterates_in_order(width in 0usize..32) {
            let tree = TreeNode::root((0..width).map(TreeNode::line).collect());
            let indices: Vec<usize> = tree.iter().filter_map(TreeNode::line_index).collect();
            prop_assert_eq!(indices, (0..width).collect::<Vec<_>>());
            prop_assert_eq!(tree.depth(), usize::from(width > 0));
        }
    }
}
