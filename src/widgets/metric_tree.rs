use eframe::egui::{
    self, pos2, vec2, Align2, CornerRadius, FontId, Rect, Response, Sense, Stroke, Ui, Vec2,
    Widget,
};

use crate::layout::{self, PlacedNode};
use crate::model::MetricNode;
use crate::state::MetricTreeState;
use crate::themes::{self, CanopyTreeStyle};

const BADGE_RADIUS: f32 = 12.0;

fn title_font(level: usize) -> FontId {
    FontId::proportional(if level == 0 { 16.0 } else { 14.0 })
}

fn value_font(level: usize) -> FontId {
    FontId::proportional([24.0, 20.0, 18.0, 18.0][level.min(3)])
}

/// Interactive metric tree: recomputes the scene from the current state every
/// frame, paints it, and feeds clicks and hovers back into the state.
#[must_use = "You should put this widget in a ui with `ui.add(widget);`"]
pub struct MetricTree<'a> {
    root: &'a MetricNode,
    state: &'a mut MetricTreeState,
    canopy_style: Option<CanopyTreeStyle>,
}

impl<'a> MetricTree<'a> {
    pub fn new(root: &'a MetricNode, state: &'a mut MetricTreeState) -> Self {
        Self {
            root,
            state,
            canopy_style: None,
        }
    }
}

impl Widget for MetricTree<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let MetricTree {
            root,
            state,
            canopy_style,
        } = self;

        let cstyle = canopy_style.unwrap_or_else(|| CanopyTreeStyle::from(ui.style().as_ref()));

        let scene = layout::scene(root, state);
        // Room for the badge straddling the bottom edge and the hover grow.
        let margin = BADGE_RADIUS + cstyle.hover_expansion;
        let (outer_rect, response) =
            ui.allocate_exact_size(scene.size + Vec2::splat(margin * 2.0), Sense::hover());
        let origin = (outer_rect.min + Vec2::splat(margin)).to_vec2();

        // Interaction first: the expansion change repaints next frame, while
        // the hover emphasis (which never moves geometry) applies immediately.
        let mut hovered_id: Option<&str> = None;
        let mut clicked: Option<&MetricNode> = None;
        for placed in &scene.nodes {
            let rect = placed.rect.translate(origin);
            let id = response.id.with(("metric_node", placed.node.id.as_str()));
            let node_response = ui.interact(rect, id, Sense::click());
            if node_response.hovered() {
                hovered_id = Some(placed.node.id.as_str());
            }
            if node_response.clicked() {
                clicked = Some(placed.node);
            }
        }
        state.set_hovered(hovered_id);
        if let Some(node) = clicked {
            state.click(node);
            ui.ctx().request_repaint();
        }

        if !ui.is_rect_visible(outer_rect) {
            return response;
        }

        let painter = ui.painter().with_clip_rect(outer_rect);
        let connector_stroke = Stroke::new(cstyle.connector_width, cstyle.connector);
        for connector in &scene.connectors {
            painter.line_segment([connector.a + origin, connector.b + origin], connector_stroke);
        }

        // The emphasized box paints last so its grown rect overlaps neighbors.
        let hovered = state.hovered().map(str::to_owned);
        for placed in &scene.nodes {
            if hovered.as_deref() == Some(placed.node.id.as_str()) {
                continue;
            }
            paint_node(&painter, placed, origin, false, &cstyle);
        }
        if let Some(placed) = scene
            .nodes
            .iter()
            .find(|placed| hovered.as_deref() == Some(placed.node.id.as_str()))
        {
            paint_node(&painter, placed, origin, true, &cstyle);
        }

        response
    }
}

fn paint_node(
    painter: &egui::Painter,
    placed: &PlacedNode,
    origin: Vec2,
    emphasized: bool,
    cstyle: &CanopyTreeStyle,
) {
    let node = placed.node;
    let mut rect = placed.rect.translate(origin);
    if emphasized {
        rect = rect.expand(cstyle.hover_expansion);
    }

    let strong = themes::palette_strong(node.color);
    let border = themes::palette_border(node.color);
    let tint = themes::palette_tint(node.color);
    let rounding = CornerRadius::same(cstyle.rounding);

    painter.rect_filled(rect.translate(cstyle.shadow_offset), rounding, cstyle.shadow);
    painter.rect_filled(rect, rounding, tint);

    let header_h = layout::header_height(node, placed.level);
    let header_rect = Rect::from_min_max(rect.min, pos2(rect.right(), rect.top() + header_h));
    let header_rounding = CornerRadius {
        nw: cstyle.rounding,
        ne: cstyle.rounding,
        sw: 0,
        se: 0,
    };
    painter.rect_filled(header_rect, header_rounding, strong);

    let body_rect = Rect::from_min_max(pos2(rect.left(), rect.top() + header_h), rect.max);
    painter.rect_filled(
        body_rect.shrink2(vec2(2.0, 0.0)),
        CornerRadius {
            nw: 0,
            ne: 0,
            sw: cstyle.rounding,
            se: cstyle.rounding,
        },
        cstyle.body_fill,
    );

    painter.rect_stroke(
        rect,
        rounding,
        Stroke::new(2.0, border),
        egui::StrokeKind::Inside,
    );

    let cx = rect.center().x;

    // Header rows.
    let mut cursor = header_rect.top() + 8.0;
    painter.text(
        pos2(cx, cursor),
        Align2::CENTER_TOP,
        &node.title,
        title_font(placed.level),
        egui::Color32::WHITE,
    );
    cursor += if placed.level == 0 { 24.0 } else { 20.0 };
    if let Some(subtitle) = &node.subtitle {
        painter.text(
            pos2(cx, cursor),
            Align2::CENTER_TOP,
            subtitle,
            FontId::proportional(11.0),
            egui::Color32::WHITE.gamma_multiply(0.8),
        );
    }

    // Body rows.
    let mut cursor = body_rect.top() + 8.0;
    painter.text(
        pos2(cx, cursor),
        Align2::CENTER_TOP,
        &node.value,
        value_font(placed.level),
        cstyle.value_text,
    );
    cursor += value_font(placed.level).size + 6.0;
    if let Some(change) = &node.change {
        let tone = crate::model::ChangeTone::classify(change);
        painter.text(
            pos2(cx, cursor),
            Align2::CENTER_TOP,
            change,
            FontId::proportional(13.0),
            themes::change_tone_color(tone),
        );
        cursor += 16.0;
    }
    if let Some(formula) = &node.formula {
        let chip_rect = Rect::from_min_max(
            pos2(rect.left() + 10.0, cursor),
            pos2(rect.right() - 10.0, cursor + 18.0),
        );
        painter.rect_filled(chip_rect, CornerRadius::same(4), cstyle.formula_fill);
        painter.text(
            chip_rect.center(),
            Align2::CENTER_CENTER,
            formula,
            FontId::monospace(11.0),
            cstyle.formula_text,
        );
    }

    // Expand affordance, only for nodes that actually have children.
    if !node.is_leaf() {
        let center = pos2(cx, rect.bottom());
        painter.circle_filled(center, BADGE_RADIUS, cstyle.badge_fill);
        let outline = if emphasized {
            cstyle.badge_outline_hovered
        } else {
            cstyle.badge_outline
        };
        painter.circle_stroke(center, BADGE_RADIUS, Stroke::new(2.0, outline));
        let glyph = if placed.expanded { "\u{2212}" } else { "+" };
        painter.text(
            center,
            Align2::CENTER_CENTER,
            glyph,
            FontId::proportional(13.0),
            cstyle.badge_text,
        );
    }
}

impl crate::themes::Styled for MetricTree<'_> {
    type Style = CanopyTreeStyle;

    fn styled(mut self, style: Self::Style) -> Self {
        self.canopy_style = Some(style);
        self
    }
}
