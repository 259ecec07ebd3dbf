//! Tree assembly from logical lines.

use log::trace;

use apack_core::tree::TreeNode;

use crate::{
    error::Result,
    line_parser::{ParsedLine, parse_line},
    lines::LogicalLine,
    syntax::SyntaxProfile,
};

/// Build the tree rooted at a synthetic root node.
///
/// Lines are parsed in source order, so the first malformed line is the one
/// reported. The tree is then assembled bottom-up: walking the lines backward,
/// every line's children are complete by the time the line itself is reached.
pub(crate) fn build_tree(lines: &[LogicalLine<'_>], profile: &SyntaxProfile) -> Result<TreeNode> {
    let parsed = lines
        .iter()
        .map(|line| {
            let parsed = parse_line(line.content, line.number, profile)?;
            trace!(
                line = line.number,
                level = line.level,
                actions_count = parsed.actions.len(),
                tagged = parsed.tag.is_some();
                "Parsed line"
            );
            Ok(parsed)
        })
        .collect::<Result<Vec<_>>>()?;

    // Children are collected in reverse source order.
    let mut children: Vec<Vec<TreeNode>> = std::iter::repeat_with(Vec::new)
        .take(lines.len())
        .collect();
    let mut top_level = Vec::new();

    for (line, parsed) in lines.iter().zip(parsed).rev() {
        let mut own = std::mem::take(&mut children[line.index]);
        own.reverse();
        let node = into_node(line.index, parsed).with_children(own);
        match line.parent {
            Some(parent) => children[parent].push(node),
            None => top_level.push(node),
        }
    }

    top_level.reverse();
    Ok(TreeNode::root(top_level))
}

fn into_node(index: usize, parsed: ParsedLine) -> TreeNode {
    let ParsedLine {
        tag,
        duration,
        actions,
    } = parsed;

    let mut node = TreeNode::line(index).with_actions(actions);
    if let Some(tag) = tag {
        node = node.with_tag(tag);
    }
    if let Some(duration) = duration {
        node = node.with_duration(duration);
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::preprocess;

    fn build(source: &str) -> Result<TreeNode> {
        let profile = SyntaxProfile::default();
        let lines = preprocess(source, &profile)?;
        build_tree(&lines, &profile)
    }

    #[test]
    fn test_empty_source_gives_empty_root() {
        let tree = build("").unwrap();
        assert!(tree.is_root());
        assert!(tree.is_empty());
    }

    #[test]
    fn test_siblings_and_nesting() {
        let tree = build("rotate 1\n  scale 2\n  fade 3\ncolor red\n").unwrap();
        assert_eq!(tree.children().len(), 2);
        let first = &tree.children()[0];
        assert_eq!(first.line_index(), Some(0));
        let nested: Vec<Option<usize>> =
            first.children().iter().map(TreeNode::line_index).collect();
        assert_eq!(nested, [Some(1), Some(2)]);
        assert_eq!(tree.children()[1].line_index(), Some(3));
    }

    #[test]
    fn test_dedent_returns_to_right_ancestor() {
        let tree = build("rotate 1\n  scale 2\n    fade 3\n  color red\nrotate 4\n").unwrap();
        let shape: Vec<(Option<usize>, usize)> = tree
            .iter()
            .map(|node| (node.line_index(), node.children().len()))
            .collect();
        assert_eq!(
            shape,
            [(Some(0), 2), (Some(1), 1), (Some(2), 0), (Some(3), 0), (Some(4), 0)]
        );
    }

    #[test]
    fn test_errors_are_reported_in_source_order() {
        // Both lines 2 and 3 are invalid; line 2 comes first.
        let err = build("rotate 1\n  spin 2\nfade\n").unwrap_err();
        assert_eq!(err.line(), Some(2));
    }
}
