use egui::{Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};

pub const COL_BG: Color32 = Color32::from_rgb(250, 250, 247);
pub const COL_SURFACE: Color32 = Color32::from_rgb(255, 255, 255);
pub const COL_BORDER: Color32 = Color32::from_rgb(221, 224, 218);
pub const COL_TEXT: Color32 = Color32::from_rgb(33, 37, 41);
pub const COL_TEXT_DIM: Color32 = Color32::from_rgb(108, 117, 125);
pub const COL_ACCENT: Color32 = Color32::from_rgb(46, 125, 50); // ledger green
pub const COL_WARN: Color32 = Color32::from_rgb(230, 145, 0);
pub const COL_ERROR: Color32 = Color32::from_rgb(198, 40, 40);

pub fn setup(ctx: &egui::Context) {
    let mut visuals = Visuals::light();
    visuals.window_fill = COL_BG;
    visuals.panel_fill = COL_BG;
    visuals.extreme_bg_color = COL_SURFACE;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_BORDER);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, COL_TEXT);
    visuals.widgets.inactive.bg_fill = COL_SURFACE;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, COL_BORDER);

    visuals.widgets.hovered.bg_fill = COL_ACCENT.linear_multiply(0.08);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, COL_ACCENT);

    visuals.widgets.active.bg_fill = COL_ACCENT;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, COL_SURFACE);

    visuals.selection.bg_fill = COL_ACCENT.linear_multiply(0.25);
    visuals.selection.stroke = Stroke::new(1.0, COL_ACCENT);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (
            TextStyle::Monospace,
            FontId::new(12.0, FontFamily::Monospace),
        ),
        (TextStyle::Button, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.visuals.button_frame = true;

    ctx.set_style(style);
}
