//! Skills section: badge grid with staggered pop reveals

use crate::{PageContext, PageRequest, SectionView, SKILLS};
use egui::{RichText, Ui};
use folio_core::{ElementId, SectionId};
use folio_ui::reveal::{Reveal, RevealDirection};
use folio_ui::theme;

pub struct SkillsView;

impl SectionView for SkillsView {
    fn id(&self) -> SectionId {
        SKILLS
    }

    fn title(&self) -> &str {
        "Skills"
    }

    fn ui(&mut self, ui: &mut Ui, ctx: &PageContext) -> PageRequest {
        let profile = ctx.profile.read();
        let host = ctx.reveal_host();

        ui.vertical_centered(|ui| {
            ui.set_max_width(720.0);
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);
                for (idx, skill) in profile.skills.iter().enumerate() {
                    Reveal::new(ElementId::new("skill").with(skill))
                        .direction(RevealDirection::Pop)
                        .stagger(idx, &host)
                        .show(ui, &host, |ui| {
                            badge(ui, skill);
                        });
                }
            });
        });

        PageRequest::None
    }
}

fn badge(ui: &mut Ui, label: &str) {
    egui::Frame::none()
        .fill(theme::card_fill())
        .stroke(egui::Stroke::new(1.0, theme::accent_color().linear_multiply(0.5)))
        .rounding(egui::Rounding::same(14.0))
        .inner_margin(egui::Margin::symmetric(14.0, 6.0))
        .show(ui, |ui| {
            ui.label(RichText::new(label).size(14.0));
        });
}
