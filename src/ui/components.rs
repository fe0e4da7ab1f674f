//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::theme;
use eframe::egui;

/// Fraction of the bar a score fills, clamped to [0, 1]. NaN renders empty.
pub fn score_fraction(score: f64) -> f32 {
    if score.is_nan() {
        0.0
    } else {
        (score / 100.0).clamp(0.0, 1.0) as f32
    }
}

/// Right-hand label of a score bar, e.g. "72.3/100"
pub fn score_label(score: f64) -> String {
    format!("{:.1}/100", score)
}

/// Text painted inside the bar fill, e.g. "72"
pub fn score_fill_label(score: f64) -> String {
    format!("{:.0}", score)
}

/// Render one category score bar: name and score label on top, a filled bar
/// underneath whose width is proportional to score out of 100.
pub fn score_bar(ui: &mut egui::Ui, category: &str, score: f64) {
    ui.horizontal(|ui| {
        ui.add(
            egui::Label::new(
                egui::RichText::new(category)
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_SECONDARY),
            )
            .selectable(false),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(score_label(score))
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_MUTED),
                )
                .selectable(false),
            );
        });
    });

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), theme::SCORE_BAR_HEIGHT),
        egui::Sense::hover(),
    );
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_SURFACE);

        let fraction = score_fraction(score);
        if fraction > 0.0 {
            let fill_rect = egui::Rect::from_min_size(
                rect.min,
                egui::vec2(rect.width() * fraction, rect.height()),
            );
            painter.rect_filled(fill_rect, theme::RADIUS_DEFAULT, theme::score_color(score));

            // Rounded score inside the fill, when there is room for it
            let text = score_fill_label(score);
            let galley = painter.layout_no_wrap(
                text,
                egui::FontId::proportional(theme::FONT_SMALL),
                egui::Color32::from_rgb(0x1e, 0x10, 0x3c),
            );
            if galley.size().x + 8.0 < fill_rect.width() {
                painter.galley(
                    egui::pos2(
                        fill_rect.right() - galley.size().x - 5.0,
                        fill_rect.center().y - galley.size().y / 2.0,
                    ),
                    galley,
                    egui::Color32::WHITE,
                );
            }
        }
    }
    ui.add_space(theme::SPACING_SM);
}

/// Render a metric summary card (label on top, large value underneath)
pub fn metric_card(ui: &mut egui::Ui, width: f32, label: &str, value: &str) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(width, theme::METRIC_CARD_HEIGHT),
        egui::Sense::hover(),
    );
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter();
    painter.rect_filled(rect, theme::RADIUS_MEDIUM, theme::BG_ELEVATED);
    painter.text(
        egui::pos2(rect.center().x, rect.min.y + 20.0),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(theme::FONT_SECTION),
        theme::TEXT_DIM,
    );
    painter.text(
        egui::pos2(rect.center().x, rect.max.y - 26.0),
        egui::Align2::CENTER_CENTER,
        value,
        egui::FontId::proportional(24.0),
        theme::ACCENT,
    );
}

/// Weight shown as fraction and percentage, e.g. "0.150 (15.0%)"
pub fn weight_label(weight: f64) -> String {
    format!("{:.3} ({:.1}%)", weight, weight * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bar_labels_match_score() {
        assert_eq!(score_label(72.3), "72.3/100");
        assert_eq!(score_fill_label(72.3), "72");
        assert!((score_fraction(72.3) - 0.723).abs() < 1e-6);
    }

    #[test]
    fn score_fraction_is_clamped() {
        assert_eq!(score_fraction(-5.0), 0.0);
        assert_eq!(score_fraction(150.0), 1.0);
        assert_eq!(score_fraction(f64::NAN), 0.0);
    }

    #[test]
    fn weight_label_shows_fraction_and_percent() {
        assert_eq!(weight_label(0.15), "0.150 (15.0%)");
        assert_eq!(weight_label(0.0375), "0.038 (3.8%)");
    }
}
