//! Hero banner with the cycling typewriter greeting

use crate::{PageContext, PageRequest, CONTACT};
use egui::{Color32, Pos2, RichText, Ui, Vec2};
use folio_core::{ElementId, RevealConfig};
use folio_ui::reveal::{Reveal, RevealDirection};
use folio_ui::theme;

/// Typewriter timing configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypewriterConfig {
    /// Seconds per typed character.
    pub type_interval: f32,

    /// Seconds a finished phrase is held before erasing.
    pub hold: f32,

    /// Seconds per erased character.
    pub erase_interval: f32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_interval: 0.08,
            hold: 1.0,
            erase_interval: 0.04,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Typing,
    Holding,
    Erasing,
}

/// Cycles through a list of phrases: type, hold, erase, next. Driven by
/// frame time; loops forever.
pub struct Typewriter {
    phrases: Vec<String>,
    config: TypewriterConfig,
    phrase: usize,
    shown_chars: usize,
    phase: Phase,
    timer: f32,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, config: TypewriterConfig) -> Self {
        Self {
            phrases,
            config,
            phrase: 0,
            shown_chars: 0,
            phase: Phase::Typing,
            timer: 0.0,
        }
    }

    /// Replace the phrase list (e.g. after a profile reload) and restart.
    pub fn set_phrases(&mut self, phrases: Vec<String>) {
        if phrases == self.phrases {
            return;
        }
        self.phrases = phrases;
        self.phrase = 0;
        self.shown_chars = 0;
        self.phase = Phase::Typing;
        self.timer = 0.0;
    }

    fn current_len(&self) -> usize {
        self.phrases
            .get(self.phrase)
            .map_or(0, |p| p.chars().count())
    }

    pub fn advance(&mut self, dt: f32) {
        if self.phrases.is_empty() {
            return;
        }
        self.timer += dt.max(0.0);

        loop {
            match self.phase {
                Phase::Typing => {
                    if self.timer < self.config.type_interval {
                        return;
                    }
                    self.timer -= self.config.type_interval;
                    self.shown_chars += 1;
                    if self.shown_chars >= self.current_len() {
                        self.shown_chars = self.current_len();
                        self.phase = Phase::Holding;
                        self.timer = 0.0;
                        return;
                    }
                }
                Phase::Holding => {
                    if self.timer < self.config.hold {
                        return;
                    }
                    self.timer -= self.config.hold;
                    self.phase = Phase::Erasing;
                }
                Phase::Erasing => {
                    if self.timer < self.config.erase_interval {
                        return;
                    }
                    self.timer -= self.config.erase_interval;
                    self.shown_chars = self.shown_chars.saturating_sub(1);
                    if self.shown_chars == 0 {
                        self.phrase = (self.phrase + 1) % self.phrases.len();
                        self.phase = Phase::Typing;
                        self.timer = 0.0;
                        return;
                    }
                }
            }
        }
    }

    /// The currently shown prefix of the active phrase.
    pub fn text(&self) -> String {
        self.phrases
            .get(self.phrase)
            .map(|p| p.chars().take(self.shown_chars).collect())
            .unwrap_or_default()
    }
}

/// Full-height banner above the first nav section.
pub struct HeroView {
    typewriter: Typewriter,
}

impl HeroView {
    pub fn new(greetings: Vec<String>) -> Self {
        Self {
            typewriter: Typewriter::new(greetings, TypewriterConfig::default()),
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, ctx: &PageContext) -> PageRequest {
        let mut request = PageRequest::None;
        let profile = ctx.profile.read();
        let host = ctx.reveal_host();

        self.typewriter.set_phrases(profile.greetings.clone());
        let dt = ui.input(|i| i.stable_dt).min(0.1);
        self.typewriter.advance(dt);
        // The greeting animates continuously while the hero is on screen.
        ui.ctx().request_repaint();

        ui.add_space(48.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                Reveal::new(ElementId::new("hero").with("greeting"))
                    .direction(RevealDirection::Right)
                    .show(ui, &host, |ui| {
                        ui.label(
                            RichText::new(format!("{}\u{2588}", self.typewriter.text()))
                                .size(40.0)
                                .strong(),
                        );
                        ui.horizontal_wrapped(|ui| {
                            ui.label(RichText::new("I'm ").size(40.0).strong());
                            ui.label(
                                RichText::new(&profile.name)
                                    .size(40.0)
                                    .strong()
                                    .color(theme::secondary_color()),
                            );
                        });
                    });

                ui.add_space(12.0);
                Reveal::new(ElementId::new("hero").with("headline"))
                    .direction(RevealDirection::Right)
                    .delay(0.2)
                    .show(ui, &host, |ui| {
                        ui.add(
                            egui::Label::new(
                                RichText::new(&profile.headline)
                                    .size(16.0)
                                    .color(theme::muted_text_color()),
                            )
                            .wrap(true),
                        );
                    });

                ui.add_space(16.0);
                Reveal::new(ElementId::new("hero").with("cta"))
                    .direction(RevealDirection::Pop)
                    .delay(0.4)
                    .show(ui, &host, |ui| {
                        if ui
                            .button(RichText::new("Get in touch").size(16.0))
                            .clicked()
                        {
                            request = PageRequest::JumpTo(CONTACT);
                        }
                    });
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                Reveal::new(ElementId::new("hero").with("monogram"))
                    .direction(RevealDirection::Up)
                    .delay(0.8)
                    .config(RevealConfig::once())
                    .show(ui, &host, |ui| {
                        draw_monogram(ui, &profile.name, 140.0);
                    });
            });
        });
        ui.add_space(48.0);

        request
    }
}

/// Painted stand-in for a profile photo: accent disc with the initials.
fn draw_monogram(ui: &mut Ui, name: &str, size: f32) {
    let (rect, _response) =
        ui.allocate_exact_size(Vec2::splat(size * 1.2), egui::Sense::hover());
    let painter = ui.painter();

    // Gentle floating animation.
    let time = ui.input(|i| i.time) as f32;
    let float_offset = (time * 0.8).sin() * 3.0;
    let center = rect.center() + Vec2::new(0.0, float_offset);

    painter.circle_filled(center, size * 0.5, theme::accent_color().linear_multiply(0.25));
    painter.circle_stroke(
        center,
        size * 0.5,
        egui::Stroke::new(2.0, theme::accent_color()),
    );

    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();
    painter.text(
        Pos2::new(center.x, center.y),
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::proportional(size * 0.35),
        Color32::WHITE,
    );
}
