//! Display-only reference panels: pre-formatted strings in, pixels out.
//! Nothing here computes a metric or holds state between frames.

use eframe::egui::{
    self, vec2, Align, CornerRadius, Layout, Margin, Response, RichText, Sense, Stroke, Ui, Widget,
};

use crate::model::Palette;
use crate::themes::{self, CanopyPanelStyle, Styled};

/// Row of color-swatch chips naming the palette roles used by the tree.
pub fn legend_row(ui: &mut Ui, entries: &[(Palette, &str)]) {
    let pstyle = CanopyPanelStyle::from(ui.style().as_ref());
    ui.horizontal_wrapped(|ui| {
        for (palette, label) in entries {
            egui::Frame::new()
                .fill(pstyle.fill)
                .corner_radius(6)
                .inner_margin(Margin::symmetric(10, 5))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let (swatch, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
                        ui.painter()
                            .rect_filled(swatch, 3, themes::palette_strong(*palette));
                        ui.label(RichText::new(*label).color(pstyle.text).size(12.0));
                    });
                });
        }
    });
}

/// Formula callout chip: dim left-hand side, monospace right-hand side.
pub fn formula_chip(ui: &mut Ui, lhs: &str, rhs: &str) -> Response {
    let pstyle = CanopyPanelStyle::from(ui.style().as_ref());
    egui::Frame::new()
        .fill(pstyle.fill)
        .stroke(Stroke::new(1.0, pstyle.outline))
        .corner_radius(6)
        .inner_margin(Margin::symmetric(12, 6))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("{lhs} = "))
                        .color(pstyle.muted)
                        .size(11.0),
                );
                ui.label(
                    RichText::new(rhs)
                        .color(pstyle.heading)
                        .monospace()
                        .size(13.0),
                );
            });
        })
        .response
}

/// Accent-titled key-value list, one of the "deep dive" cards under the tree.
#[must_use = "You should put this widget in a ui with `ui.add(widget);`"]
pub struct StatPanel<'a> {
    title: &'a str,
    accent: Palette,
    rows: &'a [(&'a str, &'a str)],
    canopy_style: Option<CanopyPanelStyle>,
}

impl<'a> StatPanel<'a> {
    pub fn new(title: &'a str, accent: Palette, rows: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            title,
            accent,
            rows,
            canopy_style: None,
        }
    }
}

impl Widget for StatPanel<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let StatPanel {
            title,
            accent,
            rows,
            canopy_style,
        } = self;
        let pstyle = canopy_style.unwrap_or_else(|| CanopyPanelStyle::from(ui.style().as_ref()));

        egui::Frame::new()
            .fill(pstyle.fill)
            .stroke(Stroke::new(1.0, pstyle.outline))
            .corner_radius(CornerRadius::same(pstyle.rounding))
            .inner_margin(Margin::same(14))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new(title)
                        .color(themes::palette_strong(accent))
                        .strong()
                        .size(14.0),
                );
                ui.add_space(6.0);
                for (label, value) in rows {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(*label).color(pstyle.text).size(13.0));
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(
                                RichText::new(*value)
                                    .color(pstyle.heading)
                                    .strong()
                                    .size(13.0),
                            );
                        });
                    });
                }
            })
            .response
    }
}

impl Styled for StatPanel<'_> {
    type Style = CanopyPanelStyle;

    fn styled(mut self, style: Self::Style) -> Self {
        self.canopy_style = Some(style);
        self
    }
}

/// One glossary term: bulleted name, explanatory text, optional formula.
#[derive(Clone, Debug)]
pub struct GlossaryEntry<'a> {
    term: &'a str,
    description: &'a str,
    formula: Option<&'a str>,
    bullet: Palette,
}

impl<'a> GlossaryEntry<'a> {
    pub fn new(term: &'a str, description: &'a str, bullet: Palette) -> Self {
        Self {
            term,
            description,
            formula: None,
            bullet,
        }
    }

    pub fn formula(mut self, formula: &'a str) -> Self {
        self.formula = Some(formula);
        self
    }
}

/// Titled glossary block, rendered as a stack of entry cards.
#[must_use = "You should put this widget in a ui with `ui.add(widget);`"]
pub struct GlossarySection<'a> {
    heading: &'a str,
    accent: Palette,
    entries: Vec<GlossaryEntry<'a>>,
    canopy_style: Option<CanopyPanelStyle>,
}

impl<'a> GlossarySection<'a> {
    pub fn new(heading: &'a str, accent: Palette) -> Self {
        Self {
            heading,
            accent,
            entries: Vec::new(),
            canopy_style: None,
        }
    }

    pub fn entry(mut self, entry: GlossaryEntry<'a>) -> Self {
        self.entries.push(entry);
        self
    }
}

impl Widget for GlossarySection<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let GlossarySection {
            heading,
            accent,
            entries,
            canopy_style,
        } = self;
        let pstyle = canopy_style.unwrap_or_else(|| CanopyPanelStyle::from(ui.style().as_ref()));

        ui.vertical(|ui| {
            ui.label(
                RichText::new(heading.to_uppercase())
                    .color(themes::palette_strong(accent))
                    .strong()
                    .size(12.0),
            );
            ui.add_space(4.0);
            for entry in &entries {
                egui::Frame::new()
                    .fill(pstyle.entry_fill)
                    .corner_radius(8)
                    .inner_margin(Margin::same(12))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal_top(|ui| {
                            let (dot, _) = ui.allocate_exact_size(vec2(8.0, 8.0), Sense::hover());
                            ui.painter().circle_filled(
                                dot.center() + vec2(0.0, 4.0),
                                4.0,
                                themes::palette_strong(entry.bullet),
                            );
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(entry.term)
                                        .color(pstyle.heading)
                                        .strong()
                                        .size(13.0),
                                );
                                ui.label(
                                    RichText::new(entry.description)
                                        .color(pstyle.muted)
                                        .size(12.0),
                                );
                                if let Some(formula) = entry.formula {
                                    ui.label(
                                        RichText::new(formula)
                                            .monospace()
                                            .size(11.0)
                                            .color(pstyle.chip_text)
                                            .background_color(pstyle.chip_fill),
                                    );
                                }
                            });
                        });
                    });
                ui.add_space(6.0);
            }
        })
        .response
    }
}

impl Styled for GlossarySection<'_> {
    type Style = CanopyPanelStyle;

    fn styled(mut self, style: Self::Style) -> Self {
        self.canopy_style = Some(style);
        self
    }
}
