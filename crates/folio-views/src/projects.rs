//! Projects section: professional and personal card grids

use crate::{PageContext, PageRequest, SectionView, PROJECTS};
use egui::{RichText, Ui};
use folio_content::Project;
use folio_core::{ElementId, SectionId};
use folio_ui::reveal::{Reveal, RevealDirection};
use folio_ui::theme;

const GRID_COLUMNS: usize = 2;

pub struct ProjectsView;

impl SectionView for ProjectsView {
    fn id(&self) -> SectionId {
        PROJECTS
    }

    fn title(&self) -> &str {
        "Projects"
    }

    fn ui(&mut self, ui: &mut Ui, ctx: &PageContext) -> PageRequest {
        let profile = ctx.profile.read();

        ui.vertical_centered(|ui| {
            ui.set_max_width(900.0);

            subheading(ui, "Professional Projects");
            project_grid(ui, ctx, "pro_project", &profile.professional_projects);

            ui.add_space(24.0);
            subheading(ui, "Personal Projects");
            project_grid(ui, ctx, "own_project", &profile.personal_projects);
        });

        PageRequest::None
    }
}

fn subheading(ui: &mut Ui, text: &str) {
    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
        ui.label(RichText::new(text).size(19.0).strong());
        ui.add_space(8.0);
    });
}

fn project_grid(ui: &mut Ui, ctx: &PageContext, key: &str, projects: &[Project]) {
    let host = ctx.reveal_host();

    for (chunk_idx, row) in projects.chunks(GRID_COLUMNS).enumerate() {
        let row_start = chunk_idx * GRID_COLUMNS;
        ui.columns(GRID_COLUMNS, |columns| {
            for (col, project) in row.iter().enumerate() {
                let idx = row_start + col;
                Reveal::new(ElementId::new(key).index(idx))
                    .direction(RevealDirection::Up)
                    .stagger(idx, &host)
                    .show(&mut columns[col], &host, |ui| {
                        project_card(ui, project);
                    });
            }
        });
        ui.add_space(12.0);
    }
}

fn project_card(ui: &mut Ui, project: &Project) {
    egui::Frame::none()
        .fill(theme::card_fill())
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&project.title).size(16.0).strong());
            if let Some(company) = &project.company {
                ui.label(
                    RichText::new(company)
                        .size(13.0)
                        .color(theme::muted_text_color()),
                );
            }
            if let Some(period) = &project.period {
                ui.label(
                    RichText::new(period)
                        .size(13.0)
                        .color(theme::muted_text_color()),
                );
            }
            ui.add_space(6.0);
            ui.add(egui::Label::new(RichText::new(&project.description).size(14.0)).wrap(true));

            if let Some(link) = &project.link {
                ui.add_space(6.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button(&link.label).clicked() {
                        ui.ctx().open_url(egui::OpenUrl::new_tab(&link.url));
                    }
                });
            }
        });
}
