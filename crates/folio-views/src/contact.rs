//! Contact section

use crate::{PageContext, PageRequest, SectionView, CONTACT};
use egui::{RichText, Ui};
use folio_core::{ElementId, SectionId};
use folio_ui::reveal::{Reveal, RevealDirection};
use folio_ui::{icons, theme};

pub struct ContactView;

impl SectionView for ContactView {
    fn id(&self) -> SectionId {
        CONTACT
    }

    fn title(&self) -> &str {
        "Get In Touch"
    }

    fn ui(&mut self, ui: &mut Ui, ctx: &PageContext) -> PageRequest {
        let profile = ctx.profile.read();
        let host = ctx.reveal_host();

        Reveal::new(ElementId::new("contact").with("body"))
            .direction(RevealDirection::Up)
            .delay(0.2)
            .show(ui, &host, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(640.0);
                    if !profile.contact.blurb.is_empty() {
                        ui.add(
                            egui::Label::new(RichText::new(&profile.contact.blurb).size(15.0))
                                .wrap(true),
                        );
                        ui.add_space(10.0);
                    }
                    ui.label(
                        RichText::new(&profile.contact.email)
                            .size(16.0)
                            .strong()
                            .color(theme::accent_color()),
                    );
                    ui.add_space(16.0);

                    ui.horizontal(|ui| {
                        for link in &profile.contact.links {
                            let icon = if link.url.starts_with("mailto:") {
                                icons::MAIL
                            } else {
                                icons::LINK
                            };
                            if ui
                                .button(RichText::new(format!("{} {}", icon, link.label)))
                                .clicked()
                            {
                                ui.ctx().open_url(egui::OpenUrl::new_tab(&link.url));
                            }
                        }
                    });
                });
            });

        PageRequest::None
    }
}
