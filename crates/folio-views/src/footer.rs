//! Page footer

use crate::PageContext;
use chrono::Datelike;
use egui::{RichText, Ui};
use folio_core::ElementId;
use folio_ui::reveal::{Reveal, RevealDirection};
use folio_ui::theme;

pub fn footer_ui(ui: &mut Ui, ctx: &PageContext) {
    let profile = ctx.profile.read();
    let host = ctx.reveal_host();
    let year = chrono::Local::now().year();

    Reveal::new(ElementId::new("footer"))
        .direction(RevealDirection::Up)
        .show(ui, &host, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(
                    RichText::new(format!(
                        "Copyright © {}, all rights reserved by {}",
                        year, profile.name
                    ))
                    .size(13.0)
                    .color(theme::muted_text_color()),
                );
                ui.add_space(24.0);
            });
        });
}
