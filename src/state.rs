use std::collections::HashSet;

use crate::model::MetricNode;

/// Copy-on-write set of expanded node ids.
///
/// [`ExpansionSet::toggle`] returns a new set and leaves the receiver
/// untouched, so callers can detect a state change by comparing the previous
/// and next values instead of inspecting render output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionSet {
    ids: HashSet<String>,
}

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership test; an id that was never toggled is collapsed.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Return a new set with `id`'s membership flipped.
    ///
    /// Total over all strings: an id that matches no node in the tree is
    /// carried along inertly and simply never consulted during layout.
    #[must_use]
    pub fn toggle(&self, id: &str) -> Self {
        let mut ids = self.ids.clone();
        if !ids.remove(id) {
            ids.insert(id.to_owned());
        }
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExpansionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Interaction state of one metric tree: which nodes are expanded and which
/// node, if any, the pointer is over. Both values are replaced wholesale in
/// response to discrete input events, never mutated in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricTreeState {
    pub expansion: ExpansionSet,
    hovered: Option<String>,
}

impl MetricTreeState {
    pub fn new(expansion: ExpansionSet) -> Self {
        Self {
            expansion,
            hovered: None,
        }
    }

    /// Click entry point: flips expansion for nodes that have children and
    /// ignores clicks on leaves.
    pub fn click(&mut self, node: &MetricNode) {
        if node.is_leaf() {
            return;
        }
        self.expansion = self.expansion.toggle(&node.id);
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Record the node under the pointer, or `None` when no node is hovered.
    /// The last write within a frame wins, so at most one node is emphasized.
    pub fn set_hovered(&mut self, id: Option<&str>) {
        self.hovered = id.map(str::to_owned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MetricNode, Palette};

    #[test]
    fn double_toggle_is_identity() {
        let initial: ExpansionSet = ["mrr", "app1"].into_iter().collect();
        assert_eq!(initial.toggle("app2").toggle("app2"), initial);
        assert_eq!(initial.toggle("app1").toggle("app1"), initial);
    }

    #[test]
    fn toggle_leaves_the_receiver_unchanged() {
        let before: ExpansionSet = ["mrr"].into_iter().collect();
        let after = before.toggle("mrr");
        assert!(before.contains("mrr"));
        assert!(!after.contains("mrr"));
    }

    #[test]
    fn toggling_an_unknown_id_is_inert() {
        let set = ExpansionSet::new().toggle("nonexistent");
        assert!(set.contains("nonexistent"));
        assert_eq!(set.toggle("nonexistent"), ExpansionSet::new());
    }

    #[test]
    fn clicking_a_leaf_never_changes_the_set() {
        let leaf = MetricNode::new("cpi_1", "CPI", "$0.11", Palette::Pink);
        let mut state = MetricTreeState::new(["mrr"].into_iter().collect());
        let before = state.expansion.clone();
        state.click(&leaf);
        assert_eq!(state.expansion, before);
    }

    #[test]
    fn clicking_a_parent_toggles_it() {
        let parent = MetricNode::new("mrr", "MRR", "$850K", Palette::Blue)
            .children(vec![MetricNode::new("app1", "App", "$320K", Palette::Purple)]);
        let mut state = MetricTreeState::new(["mrr"].into_iter().collect());
        state.click(&parent);
        assert!(!state.expansion.contains("mrr"));
        state.click(&parent);
        assert!(state.expansion.contains("mrr"));
    }

    #[test]
    fn at_most_one_node_is_hovered() {
        let mut state = MetricTreeState::default();
        state.set_hovered(Some("app1"));
        state.set_hovered(Some("app2"));
        assert_eq!(state.hovered(), Some("app2"));
        state.set_hovered(None);
        assert_eq!(state.hovered(), None);
    }
}
