//! The page controller
//!
//! Owns the section views and the single page-wide scroll state, records
//! geometry during layout, and runs both trackers once per frame after
//! layout. All derived state (visibility flags, active section, scroll-top
//! flag) is read back by the widgets on the next pass.

use crate::footer::footer_ui;
use crate::hero::HeroView;
use crate::{
    about::AboutView, contact::ContactView, experience::ExperienceView, projects::ProjectsView,
    skills::SkillsView,
};
use crate::{nav_label, PageContext, PageRequest, SectionView, CONTACT};
use egui::{Context, RichText};
use folio_core::events::events::{ScrollTopToggled, SectionActivated};
use folio_core::{ElementId, GeometrySource, ScrollContext, SectionId};
use folio_ui::convert::to_core;
use folio_ui::reveal::{Reveal, RevealDirection, Transition};
use folio_ui::{NavAction, NavBar, ScrollTopButton};
use tracing::debug;

/// Gap left above a section's heading when jumping to it.
const JUMP_MARGIN: f32 = 20.0;

/// Scroll offset that puts `rect_top` just under the viewport top.
fn jump_target(rect_top: f32, viewport_top: f32, scroll_offset: f32) -> f32 {
    (scroll_offset + rect_top - viewport_top - JUMP_MARGIN).max(0.0)
}

pub struct PortfolioPage {
    hero: HeroView,
    views: Vec<Box<dyn SectionView>>,
    navbar: NavBar,
    scroll_top: ScrollTopButton,

    /// Scroll offset applied to the scroll area while animating a jump.
    scroll_offset: f32,
    scroll_target: Option<f32>,

    /// Last tracker context, for change-driven event publication.
    last_scroll: Option<ScrollContext>,

    /// Whole-page fade on startup.
    load_fade: Transition,
}

impl PortfolioPage {
    pub fn new() -> Self {
        let views: Vec<Box<dyn SectionView>> = vec![
            Box::new(AboutView),
            Box::new(SkillsView),
            Box::new(ExperienceView),
            Box::new(ProjectsView),
            Box::new(ContactView),
        ];

        Self {
            hero: HeroView::new(Vec::new()),
            views,
            navbar: NavBar::new(),
            scroll_top: ScrollTopButton::new(),
            scroll_offset: 0.0,
            scroll_target: None,
            last_scroll: None,
            load_fade: Transition::new(0.0, 1.0),
        }
    }

    pub fn ui(&mut self, egui_ctx: &Context, ctx: &PageContext) {
        let mut request = PageRequest::None;

        // Keyboard navigation: Home jumps to the top, End to the contact
        // section.
        egui_ctx.input(|i| {
            if i.key_pressed(egui::Key::Home) {
                self.scroll_target = Some(0.0);
            }
            if i.key_pressed(egui::Key::End) {
                request = PageRequest::JumpTo(CONTACT);
            }
        });

        // Navigation bar
        let brand = ctx.profile.read().name.clone();
        let sections: Vec<(SectionId, &str)> = ctx
            .sections
            .sections()
            .iter()
            .map(|s| (*s, nav_label(*s)))
            .collect();
        let active = ctx.sections.active_section();

        egui::TopBottomPanel::top("navbar").show(egui_ctx, |ui| {
            ui.add_space(4.0);
            match self.navbar.ui(ui, &brand, &sections, active, CONTACT) {
                NavAction::JumpTo(section) => request = PageRequest::JumpTo(section),
                NavAction::None => {}
            }
            ui.add_space(4.0);
        });

        // Advance an in-flight jump before the scroll area is built.
        let mut pinned_offset = None;
        if let Some(target) = self.scroll_target {
            let dt = egui_ctx.input(|i| i.stable_dt).min(0.1);
            let blend = (dt * 6.0).min(1.0);
            self.scroll_offset += (target - self.scroll_offset) * blend;
            if (self.scroll_offset - target).abs() < 1.0 {
                self.scroll_offset = target;
                self.scroll_target = None;
            }
            pinned_offset = Some(self.scroll_offset);
            egui_ctx.request_repaint();
        }

        // Every reveal and section rect is re-recorded during layout; ids
        // left untouched by this frame are swept afterwards.
        ctx.registry.write().begin_frame();

        // Page body
        let output = egui::CentralPanel::default()
            .show(egui_ctx, |ui| {
                let mut scroll_area = egui::ScrollArea::vertical().auto_shrink([false; 2]);
                if let Some(offset) = pinned_offset {
                    scroll_area = scroll_area.vertical_scroll_offset(offset);
                }

                scroll_area.show(ui, |ui| {
                    if let PageRequest::JumpTo(section) = self.hero.ui(ui, ctx) {
                        request = PageRequest::JumpTo(section);
                    }

                    for view in &mut self.views {
                        let section = view.id();
                        let title = view.title().to_string();
                        let host = ctx.reveal_host();

                        let scope = ui.scope(|ui| {
                            ui.add_space(40.0);
                            Reveal::new(ElementId::new("heading").with(section.as_str()))
                                .direction(RevealDirection::Up)
                                .show(ui, &host, |ui| {
                                    ui.vertical_centered(|ui| {
                                        ui.label(RichText::new(&title).size(26.0).strong());
                                    });
                                });
                            ui.add_space(16.0);
                            let view_request = view.ui(ui, ctx);
                            if view_request != PageRequest::None {
                                request = view_request;
                            }
                            ui.add_space(40.0);
                        });

                        ctx.registry
                            .write()
                            .record(section.element_id(), to_core(scope.response.rect));
                    }

                    footer_ui(ui, ctx);
                })
            })
            .inner;

        // Feed this frame's geometry to the trackers. Elements a profile
        // reload removed from the page are released so neither tracker
        // entries nor rects outlive their content.
        {
            let mut registry = ctx.registry.write();
            registry.set_viewport(to_core(output.inner_rect));
            registry.set_scroll_offset(output.state.offset.y);
            for id in registry.sweep_stale() {
                ctx.visibility.release(&id);
            }
        }
        self.scroll_offset = output.state.offset.y;

        {
            let registry = ctx.registry.read();
            ctx.visibility.process(&*registry);
            ctx.sections.on_scroll(&*registry);
        }

        self.publish_scroll_events(ctx);

        // Floating scroll-to-top control
        if self.scroll_top.ui(egui_ctx, ctx.sections.show_scroll_top()) {
            self.scroll_target = Some(0.0);
        }

        if let PageRequest::JumpTo(section) = request {
            self.jump_to(section, ctx);
        }

        self.load_fade_overlay(egui_ctx);
    }

    fn jump_to(&mut self, section: SectionId, ctx: &PageContext) {
        let registry = ctx.registry.read();
        // Section not laid out yet: ignore the jump rather than guessing.
        let Some(rect) = registry.element_rect(&section.element_id()) else {
            return;
        };
        let target = jump_target(
            rect.top,
            registry.viewport_rect().top,
            registry.scroll_offset(),
        );
        debug!(section = %section, target, "jumping to section");
        self.scroll_target = Some(target);
    }

    fn publish_scroll_events(&mut self, ctx: &PageContext) {
        let current = ctx.sections.context();
        let previous = self.last_scroll.replace(current);

        if let Some(section) = current.active {
            if previous.and_then(|p| p.active) != Some(section) {
                ctx.events.publish(SectionActivated { section });
            }
        }
        if previous.map(|p| p.show_scroll_top) != Some(current.show_scroll_top) {
            ctx.events.publish(ScrollTopToggled {
                visible: current.show_scroll_top,
            });
        }
    }

    /// Whole-page opacity ramp over the first second after startup.
    fn load_fade_overlay(&mut self, egui_ctx: &Context) {
        if self.load_fade.finished() {
            return;
        }
        let dt = egui_ctx.input(|i| i.stable_dt).min(0.1);
        self.load_fade.advance(dt);

        let cover = 1.0 - self.load_fade.progress();
        if cover > 0.0 {
            let painter = egui_ctx.layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("page_load_fade"),
            ));
            painter.rect_filled(
                egui_ctx.screen_rect(),
                0.0,
                egui::Color32::from_rgb(24, 27, 34).gamma_multiply(cover),
            );
        }
        egui_ctx.request_repaint();
    }
}

impl Default for PortfolioPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_target_accounts_for_scroll_and_margin() {
        // Section sits 500px below the viewport top while scrolled to 300.
        assert_eq!(jump_target(550.0, 50.0, 300.0), 780.0);
    }

    #[test]
    fn test_jump_target_clamps_to_page_top() {
        assert_eq!(jump_target(10.0, 50.0, 0.0), 0.0);
    }
}
