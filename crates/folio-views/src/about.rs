//! About section

use crate::{PageContext, PageRequest, SectionView, ABOUT};
use egui::{RichText, Ui};
use folio_core::{ElementId, SectionId};
use folio_ui::reveal::{Reveal, RevealDirection};

pub struct AboutView;

impl SectionView for AboutView {
    fn id(&self) -> SectionId {
        ABOUT
    }

    fn title(&self) -> &str {
        "About Me"
    }

    fn ui(&mut self, ui: &mut Ui, ctx: &PageContext) -> PageRequest {
        let profile = ctx.profile.read();
        let host = ctx.reveal_host();

        Reveal::new(ElementId::new("about").with("body"))
            .direction(RevealDirection::Up)
            .delay(0.2)
            .show(ui, &host, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(720.0);
                    ui.add(egui::Label::new(RichText::new(&profile.about).size(15.0)).wrap(true));
                });
            });

        PageRequest::None
    }
}
