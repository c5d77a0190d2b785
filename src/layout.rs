use eframe::egui::{pos2, vec2, Pos2, Rect, Vec2};

use crate::model::MetricNode;
use crate::state::{ExpansionSet, MetricTreeState};

/// Box widths keyed by tree depth; depth 3 and deeper share the narrowest.
const NODE_WIDTHS: [f32; 4] = [288.0, 224.0, 192.0, 160.0];

/// Horizontal gap between adjacent sibling subtrees.
const SIBLING_GAPS: [f32; 4] = [24.0, 16.0, 12.0, 12.0];

/// Distance between adjacent drop lines on the horizontal bus.
const BUS_SPACINGS: [f32; 4] = [140.0, 110.0, 90.0, 75.0];

/// Length of each vertical connector segment (parent to bus, bus to child).
pub const CONNECTOR_DROP: f32 = 24.0;

const HEADER_PAD: f32 = 8.0;
const BODY_PAD: f32 = 8.0;
const TITLE_ROW: f32 = 20.0;
const TITLE_ROW_ROOT: f32 = 24.0;
const SUBTITLE_ROW: f32 = 14.0;
const VALUE_ROWS: [f32; 4] = [30.0, 26.0, 22.0, 22.0];
const CHANGE_ROW: f32 = 16.0;
const FORMULA_ROW: f32 = 22.0;

fn depth_index(level: usize) -> usize {
    level.min(3)
}

pub fn node_width(level: usize) -> f32 {
    NODE_WIDTHS[depth_index(level)]
}

pub fn sibling_gap(level: usize) -> f32 {
    SIBLING_GAPS[depth_index(level)]
}

pub fn bus_spacing(level: usize) -> f32 {
    BUS_SPACINGS[depth_index(level)]
}

/// Height of the colored header band: title row plus an optional subtitle
/// row, with the root title set larger.
pub fn header_height(node: &MetricNode, level: usize) -> f32 {
    let title = if level == 0 { TITLE_ROW_ROOT } else { TITLE_ROW };
    let subtitle = if node.subtitle.is_some() {
        SUBTITLE_ROW
    } else {
        0.0
    };
    HEADER_PAD * 2.0 + title + subtitle
}

/// Full box height: header band plus the body rows the node carries.
pub fn node_height(node: &MetricNode, level: usize) -> f32 {
    let mut body = BODY_PAD * 2.0 + VALUE_ROWS[depth_index(level)];
    if node.change.is_some() {
        body += CHANGE_ROW;
    }
    if node.formula.is_some() {
        body += FORMULA_ROW;
    }
    header_height(node, level) + body
}

/// One node box placed in scene coordinates.
#[derive(Clone, Copy, Debug)]
pub struct PlacedNode<'a> {
    pub node: &'a MetricNode,
    pub level: usize,
    pub rect: Rect,
    pub expanded: bool,
    pub hovered: bool,
}

impl PlacedNode<'_> {
    /// Center of the expand badge, straddling the bottom edge of the box.
    pub fn badge_center(&self) -> Pos2 {
        pos2(self.rect.center().x, self.rect.bottom())
    }
}

/// A straight connector segment, either a vertical drop or a horizontal bus.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connector {
    pub a: Pos2,
    pub b: Pos2,
}

impl Connector {
    pub fn is_horizontal(&self) -> bool {
        self.a.y == self.b.y
    }

    pub fn length(&self) -> f32 {
        (self.b - self.a).length()
    }
}

/// Flattened output of one layout pass: every visible box in paint order
/// (parents before children, siblings left to right), every connector
/// segment, and the overall extent to allocate.
#[derive(Clone, Debug, Default)]
pub struct Scene<'a> {
    pub nodes: Vec<PlacedNode<'a>>,
    pub connectors: Vec<Connector>,
    pub size: Vec2,
}

impl<'a> Scene<'a> {
    pub fn find(&self, id: &str) -> Option<&PlacedNode<'a>> {
        self.nodes.iter().find(|placed| placed.node.id == id)
    }
}

#[derive(Clone, Copy)]
struct Extent {
    width: f32,
    height: f32,
}

/// Envelope of the visible part of a subtree. Children count toward the
/// envelope only while their parent is expanded, so a collapsed branch
/// occupies exactly one box.
fn measure(node: &MetricNode, level: usize, expansion: &ExpansionSet) -> Extent {
    let width = node_width(level);
    let height = node_height(node, level);
    if node.children.is_empty() || !expansion.contains(&node.id) {
        return Extent { width, height };
    }

    let gap = sibling_gap(level);
    let mut row_width = 0.0;
    let mut row_height: f32 = 0.0;
    for (i, child) in node.children.iter().enumerate() {
        let child_extent = measure(child, level + 1, expansion);
        if i > 0 {
            row_width += gap;
        }
        row_width += child_extent.width;
        row_height = row_height.max(child_extent.height);
    }

    Extent {
        width: width.max(row_width),
        height: height + 2.0 * CONNECTOR_DROP + row_height,
    }
}

fn place<'a>(
    node: &'a MetricNode,
    level: usize,
    parent_expanded: bool,
    origin: Pos2,
    envelope: Extent,
    state: &MetricTreeState,
    out: &mut Scene<'a>,
) {
    // A collapsed ancestor hides the whole subtree no matter what the
    // expansion set says about its members. The flag is passed down at every
    // recursion, chaining the gate through all levels.
    if !parent_expanded {
        return;
    }

    let width = node_width(level);
    let center_x = origin.x + envelope.width / 2.0;
    let rect = Rect::from_min_size(
        pos2(center_x - width / 2.0, origin.y),
        vec2(width, node_height(node, level)),
    );

    let expanded = state.expansion.contains(&node.id);
    out.nodes.push(PlacedNode {
        node,
        level,
        rect,
        expanded,
        hovered: state.hovered() == Some(node.id.as_str()),
    });

    if node.children.is_empty() || !expanded {
        return;
    }

    let bus_y = rect.bottom() + CONNECTOR_DROP;
    out.connectors.push(Connector {
        a: pos2(center_x, rect.bottom()),
        b: pos2(center_x, bus_y),
    });

    // With a single child there is no bus, only the vertical stubs.
    if node.children.len() > 1 {
        let bus_width = (node.children.len() - 1) as f32 * bus_spacing(level);
        out.connectors.push(Connector {
            a: pos2(center_x - bus_width / 2.0, bus_y),
            b: pos2(center_x + bus_width / 2.0, bus_y),
        });
    }

    let gap = sibling_gap(level);
    let child_extents: Vec<Extent> = node
        .children
        .iter()
        .map(|child| measure(child, level + 1, &state.expansion))
        .collect();
    let row_width = child_extents.iter().map(|extent| extent.width).sum::<f32>()
        + gap * (node.children.len() - 1) as f32;

    let child_y = bus_y + CONNECTOR_DROP;
    let mut child_x = center_x - row_width / 2.0;
    for (child, child_extent) in node.children.iter().zip(child_extents) {
        let child_center = child_x + child_extent.width / 2.0;
        out.connectors.push(Connector {
            a: pos2(child_center, bus_y),
            b: pos2(child_center, child_y),
        });
        place(
            child,
            level + 1,
            expanded,
            pos2(child_x, child_y),
            child_extent,
            state,
            out,
        );
        child_x += child_extent.width + gap;
    }
}

/// Lay out the visible part of the tree, in coordinates relative to the
/// scene's top-left corner.
///
/// The pass is a pure function of `(root, state)`: it performs no I/O and
/// touches no shared state, so it can be re-run every frame. Hover affects
/// only the `hovered` flag on the emphasized box, never geometry.
pub fn scene<'a>(root: &'a MetricNode, state: &MetricTreeState) -> Scene<'a> {
    let mut out = Scene::default();
    let envelope = measure(root, 0, &state.expansion);
    place(root, 0, true, Pos2::ZERO, envelope, state, &mut out);
    out.size = vec2(envelope.width, envelope.height);
    log::trace!(
        "laid out {} boxes and {} connectors",
        out.nodes.len(),
        out.connectors.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Palette;
    use crate::portfolio;

    fn leaf(id: &str) -> MetricNode {
        MetricNode::new(id, id.to_uppercase(), "$0", Palette::Slate)
    }

    fn chain(ids: &[&str]) -> MetricNode {
        let mut node = leaf(ids[ids.len() - 1]);
        for id in ids[..ids.len() - 1].iter().rev() {
            node = leaf(id).children(vec![node]);
        }
        node
    }

    #[test]
    fn collapsed_ancestor_hides_expanded_descendants() {
        let tree = chain(&["root", "a", "b"]);
        let both = MetricTreeState::new(["root", "a", "b"].into_iter().collect());
        assert!(scene(&tree, &both).find("b").is_some());

        // `a` and `b` stay in the set, yet collapsing `root` blanks them out.
        let mut collapsed = both.clone();
        collapsed.expansion = collapsed.expansion.toggle("root");
        let view = scene(&tree, &collapsed);
        assert!(view.find("root").is_some());
        assert!(view.find("a").is_none());
        assert!(view.find("b").is_none());
        assert!(view.connectors.is_empty());
    }

    #[test]
    fn bus_width_follows_child_count_and_depth() {
        let tree = leaf("root").children(vec![leaf("mid").children(vec![
            leaf("x"),
            leaf("y"),
            leaf("z"),
        ])]);
        let state = MetricTreeState::new(["root", "mid"].into_iter().collect());
        let view = scene(&tree, &state);

        // `root` has one child so it contributes no bus; the only horizontal
        // segment is `mid`'s, spanning (3 - 1) x 110 at depth 1.
        let buses: Vec<&Connector> = view
            .connectors
            .iter()
            .filter(|connector| connector.is_horizontal())
            .collect();
        assert_eq!(buses.len(), 1);
        assert_eq!(buses[0].length(), 220.0);
    }

    #[test]
    fn single_child_gets_a_stub_but_no_bus() {
        let tree = leaf("root").children(vec![leaf("only")]);
        let state = MetricTreeState::new(["root"].into_iter().collect());
        let view = scene(&tree, &state);
        assert!(view.connectors.iter().all(|c| !c.is_horizontal()));
        // Drop from the parent plus the stub onto the child.
        assert_eq!(view.connectors.len(), 2);
    }

    #[test]
    fn depth_tables_clamp_below_level_three() {
        let tree = chain(&["l0", "l1", "l2", "l3", "l4"]);
        let state = MetricTreeState::new(["l0", "l1", "l2", "l3"].into_iter().collect());
        let view = scene(&tree, &state);
        assert_eq!(view.find("l2").unwrap().rect.width(), 192.0);
        assert_eq!(view.find("l3").unwrap().rect.width(), 160.0);
        assert_eq!(view.find("l4").unwrap().rect.width(), 160.0);
        assert_eq!(bus_spacing(3), bus_spacing(7));
    }

    #[test]
    fn hover_emphasizes_without_moving_geometry() {
        let tree = leaf("root").children(vec![leaf("a"), leaf("b")]);
        let plain = MetricTreeState::new(["root"].into_iter().collect());
        let mut hovering = plain.clone();
        hovering.set_hovered(Some("a"));

        let without = scene(&tree, &plain);
        let with = scene(&tree, &hovering);
        assert_eq!(without.nodes.len(), with.nodes.len());
        for (a, b) in without.nodes.iter().zip(&with.nodes) {
            assert_eq!(a.rect, b.rect);
        }
        assert!(with.find("a").unwrap().hovered);
        assert!(!with.find("b").unwrap().hovered);
        assert!(!without.find("a").unwrap().hovered);
    }

    #[test]
    fn collapsing_one_app_keeps_its_siblings_expanded() {
        let tree = portfolio::revenue_tree();
        let mut state = MetricTreeState::new(portfolio::initial_expansion());
        state.expansion = state.expansion.toggle("app2");
        assert!(!state.expansion.contains("app2"));

        let view = scene(&tree, &state);
        // app2 renders as a collapsed box with its affordance only.
        let app2 = view.find("app2").unwrap();
        assert!(!app2.expanded);
        assert!(!app2.node.is_leaf());
        assert!(view.find("ad_revenue_2").is_none());
        assert!(view.find("ua_cost_2").is_none());
        // The siblings keep their full subtrees.
        assert!(view.find("ad_revenue_1").is_some());
        assert!(view.find("ua_cost_1").is_some());
        assert!(view.find("ad_revenue_3").is_some());
    }

    #[test]
    fn fully_expanded_portfolio_has_no_overlapping_boxes() {
        let tree = portfolio::revenue_tree();
        let mut parents: Vec<String> = Vec::new();
        let mut stack = vec![&tree];
        while let Some(node) = stack.pop() {
            if !node.is_leaf() {
                parents.push(node.id.clone());
            }
            stack.extend(node.children.iter());
        }
        let state = MetricTreeState::new(parents.into_iter().collect());
        let view = scene(&tree, &state);

        for (i, a) in view.nodes.iter().enumerate() {
            for b in &view.nodes[i + 1..] {
                assert!(
                    !a.rect.intersects(b.rect),
                    "{} overlaps {}",
                    a.node.id,
                    b.node.id
                );
            }
        }
        assert!(view.size.x > 0.0 && view.size.y > 0.0);
    }
}
