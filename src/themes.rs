use egui::style::{Selection, WidgetVisuals, Widgets};
use egui::{Color32, Stroke, Style, Vec2, Visuals};

mod style;
pub use style::Styled;

use crate::model::{ChangeTone, Palette};

/// Saturated header color for a palette key (the 500-series swatches the
/// dashboard's color language is built from).
pub fn palette_strong(palette: Palette) -> Color32 {
    match palette {
        Palette::Blue => Color32::from_rgb(0x3b, 0x82, 0xf6),
        Palette::Green => Color32::from_rgb(0x10, 0xb9, 0x81),
        Palette::Purple => Color32::from_rgb(0x8b, 0x5c, 0xf6),
        Palette::Orange => Color32::from_rgb(0xf9, 0x73, 0x16),
        Palette::Pink => Color32::from_rgb(0xec, 0x48, 0x99),
        Palette::Cyan => Color32::from_rgb(0x06, 0xb6, 0xd4),
        Palette::Indigo => Color32::from_rgb(0x63, 0x66, 0xf1),
        Palette::Amber => Color32::from_rgb(0xf5, 0x9e, 0x0b),
        Palette::Red => Color32::from_rgb(0xef, 0x44, 0x44),
        Palette::Teal => Color32::from_rgb(0x14, 0xb8, 0xa6),
        Palette::Slate => Color32::from_rgb(0x64, 0x74, 0x8b),
        Palette::Lime => Color32::from_rgb(0x84, 0xcc, 0x16),
    }
}

/// Darker border paired with [`palette_strong`] (600 series).
pub fn palette_border(palette: Palette) -> Color32 {
    match palette {
        Palette::Blue => Color32::from_rgb(0x25, 0x63, 0xeb),
        Palette::Green => Color32::from_rgb(0x05, 0x96, 0x69),
        Palette::Purple => Color32::from_rgb(0x7c, 0x3a, 0xed),
        Palette::Orange => Color32::from_rgb(0xea, 0x58, 0x0c),
        Palette::Pink => Color32::from_rgb(0xdb, 0x27, 0x77),
        Palette::Cyan => Color32::from_rgb(0x08, 0x91, 0xb2),
        Palette::Indigo => Color32::from_rgb(0x4f, 0x46, 0xe5),
        Palette::Amber => Color32::from_rgb(0xd9, 0x77, 0x06),
        Palette::Red => Color32::from_rgb(0xdc, 0x26, 0x26),
        Palette::Teal => Color32::from_rgb(0x0d, 0x94, 0x88),
        Palette::Slate => Color32::from_rgb(0x47, 0x55, 0x69),
        Palette::Lime => Color32::from_rgb(0x65, 0xa3, 0x0d),
    }
}

/// Pale body tint behind the value rows (50 series).
pub fn palette_tint(palette: Palette) -> Color32 {
    match palette {
        Palette::Blue => Color32::from_rgb(0xef, 0xf6, 0xff),
        Palette::Green => Color32::from_rgb(0xec, 0xfd, 0xf5),
        Palette::Purple => Color32::from_rgb(0xf5, 0xf3, 0xff),
        Palette::Orange => Color32::from_rgb(0xff, 0xf7, 0xed),
        Palette::Pink => Color32::from_rgb(0xfd, 0xf2, 0xf8),
        Palette::Cyan => Color32::from_rgb(0xec, 0xfe, 0xff),
        Palette::Indigo => Color32::from_rgb(0xee, 0xf2, 0xff),
        Palette::Amber => Color32::from_rgb(0xff, 0xfb, 0xeb),
        Palette::Red => Color32::from_rgb(0xfe, 0xf2, 0xf2),
        Palette::Teal => Color32::from_rgb(0xf0, 0xfd, 0xfa),
        Palette::Slate => Color32::from_rgb(0xf8, 0xfa, 0xfc),
        Palette::Lime => Color32::from_rgb(0xf7, 0xfe, 0xe7),
    }
}

/// Emphasis color of a delta string.
pub fn change_tone_color(tone: ChangeTone) -> Color32 {
    match tone {
        ChangeTone::Positive => Color32::from_rgb(0x05, 0x96, 0x69),
        ChangeTone::Negative => Color32::from_rgb(0xef, 0x44, 0x44),
        ChangeTone::Neutral => Color32::from_rgb(0x6b, 0x72, 0x80),
    }
}

/// Canopy-specific semantic style for the `MetricTree` widget.
///
/// The boxes themselves keep their fixed palette colors in both themes; only
/// the chrome around them (connectors, badge, shadow) adapts.
#[derive(Clone, Debug)]
pub struct CanopyTreeStyle {
    pub connector: Color32,
    pub connector_width: f32,
    pub body_fill: Color32,
    pub value_text: Color32,
    pub formula_fill: Color32,
    pub formula_text: Color32,
    pub badge_fill: Color32,
    pub badge_outline: Color32,
    pub badge_outline_hovered: Color32,
    pub badge_text: Color32,
    pub shadow: Color32,
    pub shadow_offset: Vec2,
    pub rounding: u8,
    pub hover_expansion: f32,
}

impl From<&Style> for CanopyTreeStyle {
    fn from(style: &Style) -> Self {
        let dark_mode = style.visuals.dark_mode;
        Self {
            connector: if dark_mode {
                Color32::from_rgb(0xd1, 0xd5, 0xdb)
            } else {
                Color32::from_rgb(0x9c, 0xa3, 0xaf)
            },
            connector_width: 2.0,
            body_fill: Color32::from_rgba_unmultiplied(0xff, 0xff, 0xff, 0xcc),
            value_text: Color32::from_rgb(0x1f, 0x29, 0x37),
            formula_fill: Color32::from_rgb(0xf3, 0xf4, 0xf6),
            formula_text: Color32::from_rgb(0x6b, 0x72, 0x80),
            badge_fill: Color32::WHITE,
            badge_outline: Color32::from_rgb(0xd1, 0xd5, 0xdb),
            badge_outline_hovered: Color32::from_rgb(0x9c, 0xa3, 0xaf),
            badge_text: Color32::from_rgb(0x4b, 0x55, 0x63),
            shadow: if dark_mode {
                Color32::from_black_alpha(96)
            } else {
                Color32::from_black_alpha(40)
            },
            shadow_offset: egui::vec2(0.0, 3.0),
            rounding: 12,
            hover_expansion: 4.0,
        }
    }
}

/// Canopy-specific semantic style for the reference panels around the tree.
#[derive(Clone, Debug)]
pub struct CanopyPanelStyle {
    pub fill: Color32,
    pub outline: Color32,
    pub entry_fill: Color32,
    pub heading: Color32,
    pub text: Color32,
    pub muted: Color32,
    pub chip_fill: Color32,
    pub chip_text: Color32,
    pub rounding: u8,
}

impl From<&Style> for CanopyPanelStyle {
    fn from(style: &Style) -> Self {
        if style.visuals.dark_mode {
            Self {
                fill: Color32::from_rgba_unmultiplied(0x1e, 0x29, 0x3b, 0x80),
                outline: Color32::from_rgb(0x33, 0x41, 0x55),
                entry_fill: Color32::from_rgba_unmultiplied(0x0f, 0x17, 0x2a, 0x80),
                heading: Color32::WHITE,
                text: Color32::from_rgb(0xcb, 0xd5, 0xe1),
                muted: Color32::from_rgb(0x94, 0xa3, 0xb8),
                chip_fill: Color32::from_rgb(0x1e, 0x29, 0x3b),
                chip_text: Color32::from_rgb(0xcb, 0xd5, 0xe1),
                rounding: 10,
            }
        } else {
            Self {
                fill: Color32::from_rgb(0xf8, 0xfa, 0xfc),
                outline: Color32::from_rgb(0xe2, 0xe8, 0xf0),
                entry_fill: Color32::from_rgb(0xf1, 0xf5, 0xf9),
                heading: Color32::from_rgb(0x0f, 0x17, 0x2a),
                text: Color32::from_rgb(0x33, 0x41, 0x55),
                muted: Color32::from_rgb(0x64, 0x74, 0x8b),
                chip_fill: Color32::from_rgb(0xe2, 0xe8, 0xf0),
                chip_text: Color32::from_rgb(0x33, 0x41, 0x55),
                rounding: 10,
            }
        }
    }
}

// Color utilities: simple sRGB linear interpolation for quick palette derivation
pub fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let r = (a.r() as f32 * (1.0 - t) + b.r() as f32 * t).round() as u8;
    let g = (a.g() as f32 * (1.0 - t) + b.g() as f32 * t).round() as u8;
    let bch = (a.b() as f32 * (1.0 - t) + b.b() as f32 * t).round() as u8;
    Color32::from_rgb(r, g, bch)
}

/// Build visuals for the dashboard chrome from a small set of base colors.
pub fn dashboard(
    foreground: Color32,
    background: Color32,
    surface: Color32,
    accent: Color32,
    mut base_visuals: Visuals,
) -> Visuals {
    let surface_muted = blend(surface, background, 0.2);
    let border = blend(foreground, background, 0.6);
    let weak_text = blend(foreground, background, 0.35);
    let control_radius = 6.0;
    let container_radius = 10.0;

    let control_fill = surface;
    let control_fill_hover = blend(surface, foreground, 0.06);
    let control_fill_active = blend(surface, foreground, 0.12);
    let selection_fill = blend(background, accent, 0.25);

    base_visuals.window_fill = background;
    base_visuals.panel_fill = background;
    base_visuals.override_text_color = None;
    base_visuals.weak_text_alpha = 1.0;
    base_visuals.weak_text_color = Some(weak_text);
    base_visuals.faint_bg_color = surface_muted;
    base_visuals.extreme_bg_color = control_fill_active;
    base_visuals.selection = Selection {
        bg_fill: selection_fill,
        stroke: Stroke::new(1.5, accent),
    };
    base_visuals.hyperlink_color = accent;
    base_visuals.window_stroke = Stroke::new(1.0, border);

    let border_stroke = Stroke::new(1.0, border);
    let hover_stroke = Stroke::new(1.4, border);
    let active_stroke = Stroke::new(1.4, accent);

    base_visuals.widgets = Widgets {
        noninteractive: WidgetVisuals {
            bg_fill: surface,
            weak_bg_fill: surface,
            bg_stroke: border_stroke,
            fg_stroke: Stroke::new(1.0, foreground),
            corner_radius: container_radius.into(),
            expansion: 0.0,
        },
        inactive: WidgetVisuals {
            bg_fill: control_fill,
            weak_bg_fill: control_fill,
            bg_stroke: border_stroke,
            fg_stroke: Stroke::new(1.0, foreground),
            corner_radius: control_radius.into(),
            expansion: 0.0,
        },
        hovered: WidgetVisuals {
            bg_fill: control_fill_hover,
            weak_bg_fill: control_fill_hover,
            bg_stroke: hover_stroke,
            fg_stroke: Stroke::new(1.0, foreground),
            corner_radius: control_radius.into(),
            expansion: 0.0,
        },
        active: WidgetVisuals {
            bg_fill: control_fill_active,
            weak_bg_fill: control_fill_active,
            bg_stroke: active_stroke,
            fg_stroke: Stroke::new(1.0, foreground),
            corner_radius: control_radius.into(),
            expansion: 0.0,
        },
        open: WidgetVisuals {
            bg_fill: control_fill_hover,
            weak_bg_fill: control_fill_hover,
            bg_stroke: active_stroke,
            fg_stroke: Stroke::new(1.0, foreground),
            corner_radius: control_radius.into(),
            expansion: 0.0,
        },
    };

    base_visuals.window_shadow = egui::epaint::Shadow::NONE;
    base_visuals.popup_shadow = egui::epaint::Shadow {
        offset: [0, 4],
        blur: 12,
        spread: 0,
        color: Color32::from_black_alpha(80),
    };

    base_visuals
}

/// Dark slate backdrop the tree was designed against.
pub fn dashboard_dark() -> Style {
    let mut style = Style::default();

    let foreground = Color32::from_hex("#f8fafc").unwrap();
    let background = Color32::from_hex("#0f172a").unwrap();
    let surface = Color32::from_hex("#1e293b").unwrap();
    let accent = Color32::from_hex("#3b82f6").unwrap();

    style.visuals = dashboard(foreground, background, surface, accent, Visuals::dark());
    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.animation_time = 0.12;
    style
}

pub fn dashboard_light() -> Style {
    let mut style = Style::default();

    let foreground = Color32::from_hex("#0f172a").unwrap();
    let background = Color32::from_hex("#ffffff").unwrap();
    let surface = Color32::from_hex("#f8fafc").unwrap();
    let accent = Color32::from_hex("#2563eb").unwrap();

    style.visuals = dashboard(foreground, background, surface, accent, Visuals::light());
    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.animation_time = 0.12;
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_interpolates_endpoints() {
        let black = Color32::from_rgb(0, 0, 0);
        let white = Color32::from_rgb(255, 255, 255);
        assert_eq!(blend(black, white, 0.0), black);
        assert_eq!(blend(black, white, 1.0), white);
        assert_eq!(blend(black, white, 0.5), Color32::from_rgb(128, 128, 128));
    }

    #[test]
    fn tree_style_adapts_to_theme() {
        let dark = CanopyTreeStyle::from(&dashboard_dark());
        let light = CanopyTreeStyle::from(&dashboard_light());
        assert_ne!(dark.connector, light.connector);
        // Box content colors are part of the data's color language and stay
        // fixed across themes.
        assert_eq!(dark.value_text, light.value_text);
    }
}
