//! Floating scroll-to-top control

use crate::{icons, theme};
use egui::{Align2, Context};

/// Floating button that fades in once the tracker's scroll-top flag is set
/// and reports clicks back to the page.
pub struct ScrollTopButton {
    alpha: f32,
}

impl ScrollTopButton {
    pub fn new() -> Self {
        Self { alpha: 0.0 }
    }

    /// Draw the button; returns true when it was clicked this frame.
    pub fn ui(&mut self, ctx: &Context, visible: bool) -> bool {
        let target = if visible { 1.0 } else { 0.0 };
        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        self.alpha += (target - self.alpha) * (dt * 8.0).min(1.0);
        if (self.alpha - target).abs() < 0.01 {
            self.alpha = target;
        } else {
            ctx.request_repaint();
        }

        if self.alpha <= 0.01 {
            return false;
        }

        let mut clicked = false;
        egui::Area::new("scroll_top_button")
            .anchor(Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
            .show(ctx, |ui| {
                let fill = theme::accent_color().gamma_multiply(self.alpha * 0.9);
                let text = egui::RichText::new(icons::UP)
                    .size(18.0)
                    .color(egui::Color32::WHITE.gamma_multiply(self.alpha));
                let button = egui::Button::new(text)
                    .fill(fill)
                    .rounding(egui::Rounding::same(18.0))
                    .min_size(egui::vec2(36.0, 36.0));
                if ui.add(button).on_hover_text("Back to top").clicked() {
                    clicked = true;
                }
            });

        clicked
    }
}

impl Default for ScrollTopButton {
    fn default() -> Self {
        Self::new()
    }
}
