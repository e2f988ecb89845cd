//! User interface components for the portfolio viewer
//!
//! This crate provides the egui-based building blocks: the theme, the reveal
//! animation widget, the navigation bar with its sliding highlight, and the
//! floating scroll-to-top control.

pub mod navbar;
pub mod reveal;
pub mod scroll_top;
pub mod theme;

use std::time::Instant;

/// Re-export commonly used types
pub use navbar::{NavAction, NavBar};
pub use reveal::{Reveal, RevealDirection, RevealStyle, Transition};
pub use scroll_top::ScrollTopButton;
pub use theme::{apply_theme, Theme};

/// How long an error banner stays up before expiring on its own.
const ERROR_BANNER_SECONDS: u64 = 8;

/// Error message to display
pub struct ErrorMessage {
    pub title: String,
    pub message: String,
    pub timestamp: Instant,
}

impl ErrorMessage {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            timestamp: Instant::now(),
        }
    }
}

/// Draw pending error banners along the top of the screen. Expired and
/// dismissed banners are removed from the list.
pub fn show_error_messages(ctx: &egui::Context, errors: &mut Vec<ErrorMessage>) {
    errors.retain(|e| e.timestamp.elapsed().as_secs() < ERROR_BANNER_SECONDS);
    if errors.is_empty() {
        return;
    }

    let mut dismissed: Option<usize> = None;
    egui::TopBottomPanel::top("error_banners")
        .frame(egui::Frame::none().fill(egui::Color32::from_rgb(60, 26, 26)))
        .show(ctx, |ui| {
            for (idx, error) in errors.iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.colored_label(theme::error_color(), &error.title);
                    ui.label(&error.message);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Dismiss").clicked() {
                            dismissed = Some(idx);
                        }
                    });
                });
            }
        });

    if let Some(idx) = dismissed {
        errors.remove(idx);
    }
    // Keep the banner timer ticking even without input events.
    ctx.request_repaint_after(std::time::Duration::from_millis(250));
}

/// Common icon definitions (plain text glyphs, no icon font)
pub mod icons {
    pub const MAIL: &str = "✉";
    pub const LINK: &str = "🔗";
    pub const UP: &str = "⬆";
}

/// Conversions between core geometry and egui geometry.
pub mod convert {
    use folio_core::Rect;

    pub fn to_core(rect: egui::Rect) -> Rect {
        Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom())
    }

    pub fn to_egui(rect: Rect) -> egui::Rect {
        egui::Rect::from_min_max(
            egui::pos2(rect.left, rect.top),
            egui::pos2(rect.right, rect.bottom),
        )
    }
}
