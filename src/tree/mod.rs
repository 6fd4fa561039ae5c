// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Helpers over the console's widget trees.
//!
//! The trees themselves belong to the UI layer. This module only sees them
//! through the [`TreeNode`] and [`UiComponent`] traits: it flips expanded
//! flags and removes children, but never creates nodes.
//!
//! [`flatten_first_branch`] and [`remove_tree_node`] stop at the first child
//! that has children of its own. Siblings after that child are not visited.

mod component;

pub use component::{UiComponent, find_component};

/// A node of an expandable tree widget.
pub trait TreeNode: Sized {
    fn is_expanded(&self) -> bool;

    fn set_expanded(&mut self, expanded: bool);

    fn children(&self) -> &[Self];

    fn children_mut(&mut self) -> &mut Vec<Self>;

    fn child_count(&self) -> usize {
        self.children().len()
    }
}

/// Sets the expanded flag on `node` and every node below it.
///
/// Children are updated before their parent.
pub fn set_expanded_recursively<N: TreeNode>(node: &mut N, expanded: bool) {
    for child in node.children_mut().iter_mut() {
        set_expanded_recursively(child, expanded);
    }
    node.set_expanded(expanded);
}

/// Appends the children of `node` to `nodes`, following the first branch.
///
/// Children are appended in order until one with children of its own is
/// found. That child is descended into and its remaining siblings are
/// skipped. With children `[A[C], B[D]]` the result is `[A, C]`.
pub fn flatten_first_branch<'a, N: TreeNode>(node: &'a N, nodes: &mut Vec<&'a N>) {
    for child in node.children() {
        nodes.push(child);
        if child.child_count() > 0 {
            return flatten_first_branch(child, nodes);
        }
    }
}

/// Removes `target` from the tree under `root`.
///
/// The first direct child equal to `target` is removed. If there is none,
/// the search continues in the first child that has children, and only
/// there. Returns whether a node was removed.
pub fn remove_tree_node<N>(root: &mut N, target: &N) -> bool
where
    N: TreeNode + PartialEq,
{
    let children = root.children_mut();
    if let Some(index) = children.iter().position(|child| child == target) {
        children.remove(index);
        return true;
    }

    match children.iter_mut().find(|child| child.child_count() > 0) {
        Some(branch) => remove_tree_node(branch, target),
        None => false,
    }
}
