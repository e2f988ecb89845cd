//! Top navigation bar with the sliding active-link highlight

use crate::theme;
use ahash::AHashMap;
use egui::{Align, Color32, Layout, Rect, Rounding, Sense, Ui};
use folio_core::SectionId;

/// What the user asked the page to do from the nav bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavAction {
    None,
    /// Scroll smoothly to the given section.
    JumpTo(SectionId),
}

/// Placement of the sliding highlight pill, relative to the link container.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PillPlacement {
    left: f32,
    width: f32,
}

/// Compute the pill target for a link rect relative to its container.
fn pill_target(link: Rect, container: Rect) -> PillPlacement {
    PillPlacement {
        left: link.left() - container.left(),
        width: link.width(),
    }
}

/// Navigation bar widget. Link rects are recorded each frame; the pill
/// retargets whenever the active section changes and glides toward its
/// target from frame time.
pub struct NavBar {
    /// Link rects from the previous frame, keyed by section.
    link_rects: AHashMap<SectionId, Rect>,

    /// Current animated pill placement; `None` until the first activation.
    pill: Option<PillPlacement>,

    /// Where the pill is heading.
    pill_target: Option<PillPlacement>,
}

impl NavBar {
    pub fn new() -> Self {
        Self {
            link_rects: AHashMap::new(),
            pill: None,
            pill_target: None,
        }
    }

    /// Draw the bar. `sections` pairs each id with its display label;
    /// `active` is the tracker's current active section.
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        brand: &str,
        sections: &[(SectionId, &str)],
        active: Option<SectionId>,
        contact: SectionId,
    ) -> NavAction {
        let mut action = NavAction::None;

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(brand)
                    .size(18.0)
                    .strong()
                    .color(theme::accent_color()),
            );
            ui.add_space(24.0);

            let container = ui.available_rect_before_wrap();
            self.retarget(active, container);
            self.animate(ui);

            // Pill first so the link labels draw on top of it.
            if let Some(pill) = self.pill {
                let rect = Rect::from_min_size(
                    egui::pos2(container.left() + pill.left, container.top() + 2.0),
                    egui::vec2(pill.width, container.height() - 4.0),
                );
                ui.painter().rect_filled(
                    rect,
                    Rounding::same(6.0),
                    theme::accent_color().linear_multiply(0.25),
                );
            }

            for (section, label) in sections {
                let is_active = active == Some(*section);
                let text = if is_active {
                    egui::RichText::new(*label).color(theme::accent_color()).strong()
                } else {
                    egui::RichText::new(*label)
                };
                let response = ui.add(egui::Label::new(text).sense(Sense::click()));
                if response.clicked() {
                    action = NavAction::JumpTo(*section);
                }
                if response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                self.link_rects.insert(*section, response.rect);
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui
                    .button(egui::RichText::new("Get in touch").color(Color32::WHITE))
                    .clicked()
                {
                    action = NavAction::JumpTo(contact);
                }
            });
        });

        action
    }

    /// Update the pill target from the active link's recorded rect. A link
    /// that has not been laid out yet leaves the previous placement alone.
    fn retarget(&mut self, active: Option<SectionId>, container: Rect) {
        let Some(active) = active else {
            return;
        };
        let Some(link) = self.link_rects.get(&active) else {
            return;
        };
        let target = pill_target(*link, container);
        self.pill_target = Some(target);
        // First activation: snap instead of gliding in from nowhere.
        if self.pill.is_none() {
            self.pill = Some(target);
        }
    }

    fn animate(&mut self, ui: &Ui) {
        let (Some(current), Some(target)) = (self.pill.as_mut(), self.pill_target) else {
            return;
        };
        if *current == target {
            return;
        }
        let dt = ui.input(|i| i.stable_dt).min(0.1);
        let blend = (dt * 12.0).min(1.0);
        current.left += (target.left - current.left) * blend;
        current.width += (target.width - current.width) * blend;
        if (current.left - target.left).abs() < 0.5 && (current.width - target.width).abs() < 0.5 {
            *current = target;
        } else {
            ui.ctx().request_repaint();
        }
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new()
    }
}
