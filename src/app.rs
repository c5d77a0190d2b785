use eframe::egui::{self, Align, RichText, Ui};

use crate::model::{MetricNode, ModelError, Palette};
use crate::portfolio;
use crate::state::MetricTreeState;
use crate::themes::{self, dashboard_dark, dashboard_light, CanopyPanelStyle};
use crate::widgets::{formula_chip, legend_row, MetricTree, StatPanel};

pub type AppResult = Result<(), Box<dyn std::error::Error>>;

const CONTENT_WIDTH: f32 = 1080.0;

/// The metric-tree dashboard: header, legend, formula chips, the interactive
/// tree and the static reference panels below it.
pub struct Dashboard {
    tree: MetricNode,
    state: MetricTreeState,
}

impl Dashboard {
    /// Build the demo dashboard. The tree is validated before anything is
    /// rendered; a malformed tree is rejected here rather than drawn.
    pub fn new() -> Result<Self, ModelError> {
        let tree = portfolio::revenue_tree();
        tree.validate()?;
        Ok(Self {
            state: MetricTreeState::new(portfolio::initial_expansion()),
            tree,
        })
    }

    pub fn run(self, name: &str) -> eframe::Result {
        let mut native_options = eframe::NativeOptions::default();
        native_options.persist_window = true;

        eframe::run_native(
            name,
            native_options,
            Box::new(|cc| {
                let ctx = cc.egui_ctx.clone();
                ctrlc::set_handler(move || ctx.send_viewport_cmd(egui::ViewportCommand::Close))
                    .expect("failed to set exit signal handler");

                cc.egui_ctx
                    .set_style_of(egui::Theme::Light, dashboard_light());
                cc.egui_ctx.set_style_of(egui::Theme::Dark, dashboard_dark());
                let theme = match dark_light::detect() {
                    Ok(dark_light::Mode::Light) => egui::ThemePreference::Light,
                    Ok(dark_light::Mode::Dark) => egui::ThemePreference::Dark,
                    Ok(dark_light::Mode::Unspecified) | Err(_) => egui::ThemePreference::Dark,
                };
                cc.egui_ctx.set_theme(theme);

                Ok(Box::new(self))
            }),
        )
    }

    fn header(&self, ui: &mut Ui) {
        ui.heading(portfolio::TITLE);
        ui.label(RichText::new(portfolio::SUBTITLE).weak());
        ui.label(RichText::new(portfolio::HINT).weak().size(12.0));
    }

    fn stat_columns(&self, ui: &mut Ui) {
        ui.columns(3, |columns| {
            columns[0].add(StatPanel::new(
                "CAS Mediation Metrics",
                Palette::Green,
                &portfolio::MEDIATION_STATS,
            ));
            columns[1].add(StatPanel::new(
                "Ad Format Split",
                Palette::Amber,
                &portfolio::AD_FORMAT_SPLIT,
            ));
            columns[2].add(StatPanel::new(
                "UA Channels",
                Palette::Pink,
                &portfolio::UA_CHANNELS,
            ));
        });
    }

    fn growth_notes(&self, ui: &mut Ui) {
        let pstyle = CanopyPanelStyle::from(ui.style().as_ref());
        egui::Frame::new()
            .fill(pstyle.fill)
            .stroke(egui::Stroke::new(1.0, pstyle.outline))
            .corner_radius(egui::CornerRadius::same(pstyle.rounding))
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new(portfolio::GROWTH_HEADING)
                        .color(pstyle.heading)
                        .strong(),
                );
                ui.add_space(4.0);
                ui.columns(2, |columns| {
                    for (i, (lead, detail, accent)) in portfolio::GROWTH_NOTES.iter().enumerate() {
                        columns[i / 2].horizontal_wrapped(|ui| {
                            ui.label(
                                RichText::new(*lead)
                                    .color(themes::palette_strong(*accent))
                                    .strong()
                                    .size(13.0),
                            );
                            ui.label(RichText::new(*detail).color(pstyle.text).size(13.0));
                        });
                    }
                });
            });
    }

    fn glossary(&self, ui: &mut Ui) {
        ui.with_layout(egui::Layout::top_down(Align::Min), |ui| {
            ui.label(RichText::new("Metrics Glossary").heading());
            ui.add_space(8.0);
            for section in portfolio::glossary() {
                ui.add(section);
                ui.add_space(10.0);
            }
        });
    }
}

impl eframe::App for Dashboard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink(false)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(CONTENT_WIDTH);
                        self.header(ui);
                        ui.add_space(12.0);
                        legend_row(ui, &portfolio::LEGEND);
                        ui.add_space(8.0);
                        ui.horizontal_wrapped(|ui| {
                            for (lhs, rhs) in portfolio::KEY_FORMULAS {
                                formula_chip(ui, lhs, rhs);
                            }
                        });
                        ui.add_space(20.0);
                        egui::ScrollArea::horizontal()
                            .auto_shrink(false)
                            .show(ui, |ui| {
                                ui.add(MetricTree::new(&self.tree, &mut self.state));
                            });
                        ui.add_space(20.0);
                        self.stat_columns(ui);
                        ui.add_space(12.0);
                        self.growth_notes(ui);
                        ui.add_space(20.0);
                        self.glossary(ui);
                    });
                });
        });
    }
}
