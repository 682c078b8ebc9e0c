//! Breadth-first search and hit testing over the widget's composition tree.
//!
//! Generic over any [`ElementNode`] implementation so hosts expose their own
//! tree without this crate knowing the framework behind it.

use std::collections::VecDeque;

use crate::geometry::Point;
use crate::host::ElementNode;

/// Finds the nearest descendant (breadth-first, shallowest match wins)
/// satisfying the predicate, starting at and including `root`.
pub fn find_descendant<'a, N, F>(root: &'a N, mut predicate: F) -> Option<&'a N>
where
    N: ElementNode,
    F: FnMut(&N) -> bool,
{
    let mut queue = VecDeque::new();
    queue.push_back(root);

    while let Some(node) = queue.pop_front() {
        if predicate(node) {
            return Some(node);
        }
        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                queue.push_back(child);
            }
        }
    }
    None
}

/// Returns the topmost hit-test-visible node containing `point`, or `None`.
///
/// Later children render on top of earlier ones, so children are probed in
/// reverse order and the deepest hit wins. A node whose bounds do not
/// contain the point clips its subtree out of consideration.
pub fn hit_test<'a, N>(node: &'a N, point: Point) -> Option<&'a N>
where
    N: ElementNode,
{
    if !node.bounds().contains(point) {
        return None;
    }

    for i in (0..node.child_count()).rev() {
        if let Some(child) = node.child(i) {
            if let Some(hit) = hit_test(child, point) {
                return Some(hit);
            }
        }
    }

    if node.hit_test_visible() {
        Some(node)
    } else {
        None
    }
}
