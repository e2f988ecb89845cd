//! Professional experience section

use crate::{PageContext, PageRequest, SectionView, EXPERIENCE};
use egui::{RichText, Ui};
use folio_content::Job;
use folio_core::{ElementId, SectionId};
use folio_ui::reveal::{Reveal, RevealDirection};
use folio_ui::theme;

pub struct ExperienceView;

impl SectionView for ExperienceView {
    fn id(&self) -> SectionId {
        EXPERIENCE
    }

    fn title(&self) -> &str {
        "Professional Experience"
    }

    fn ui(&mut self, ui: &mut Ui, ctx: &PageContext) -> PageRequest {
        let profile = ctx.profile.read();
        let host = ctx.reveal_host();

        ui.vertical_centered(|ui| {
            ui.set_max_width(820.0);
            for (idx, job) in profile.experience.iter().enumerate() {
                // Twice the usual stagger step: job cards are tall.
                Reveal::new(ElementId::new("job").index(idx))
                    .direction(RevealDirection::Up)
                    .delay(idx as f32 * host.defaults.stagger_step * 2.0)
                    .show(ui, &host, |ui| {
                        job_card(ui, job);
                    });
                ui.add_space(12.0);
            }
        });

        PageRequest::None
    }
}

fn job_card(ui: &mut Ui, job: &Job) {
    egui::Frame::none()
        .fill(theme::card_fill())
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&job.title).size(17.0).strong());
            ui.label(
                RichText::new(&job.company)
                    .size(13.0)
                    .color(theme::muted_text_color()),
            );
            ui.label(
                RichText::new(&job.period)
                    .size(13.0)
                    .color(theme::muted_text_color()),
            );
            ui.add_space(6.0);
            ui.add(egui::Label::new(RichText::new(&job.description).size(14.0)).wrap(true));
        });
}
