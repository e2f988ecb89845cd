//! Reveal animation widget
//!
//! Wraps a block of content, registers it with the visibility tracker, and
//! drives the hidden → revealed style transition (opacity 0 → 1, translation
//! offset → 0) from frame time. The transition math is kept free of egui
//! types so it can be tested headlessly.

use egui::{Id, Sense, Ui};
use folio_core::{ElementId, GeometryRegistry, RevealConfig, RevealStyleDefaults, VisibilityTracker};
use parking_lot::RwLock;

/// Direction the content slides in from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealDirection {
    /// Slide up into place (starts below its resting position).
    #[default]
    Up,
    /// Slide down into place.
    Down,
    /// Slide in from the left.
    Left,
    /// Slide in from the right.
    Right,
    /// Scale-overshoot pop, no translation.
    Pop,
}

/// Resolved style for one frame of the transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub offset: (f32, f32),
    pub scale: f32,
}

/// Time-driven reveal transition. Progress runs 0 → 1 over `duration`
/// seconds once `delay` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    delay: f32,
    duration: f32,
    elapsed: f32,
}

impl Transition {
    pub fn new(delay: f32, duration: f32) -> Self {
        Self {
            delay,
            duration: duration.max(1e-3),
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Linear progress in 0.0..=1.0; held at 0.0 until the delay elapses.
    pub fn progress(&self) -> f32 {
        ((self.elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    pub fn finished(&self) -> bool {
        self.progress() >= 1.0
    }

    fn eased(&self) -> f32 {
        // Cubic ease-out
        let t = self.progress();
        1.0 - (1.0 - t).powi(3)
    }

    /// Style for this frame given a slide direction and full offset distance.
    pub fn style(&self, direction: RevealDirection, distance: f32) -> RevealStyle {
        let eased = self.eased();
        let remaining = (1.0 - eased) * distance;

        match direction {
            RevealDirection::Up => RevealStyle {
                opacity: eased,
                offset: (0.0, remaining),
                scale: 1.0,
            },
            RevealDirection::Down => RevealStyle {
                opacity: eased,
                offset: (0.0, -remaining),
                scale: 1.0,
            },
            RevealDirection::Left => RevealStyle {
                opacity: eased,
                offset: (-remaining, 0.0),
                scale: 1.0,
            },
            RevealDirection::Right => RevealStyle {
                opacity: eased,
                offset: (remaining, 0.0),
                scale: 1.0,
            },
            RevealDirection::Pop => RevealStyle {
                opacity: (self.progress() / 0.5).clamp(0.0, 1.0),
                offset: (0.0, 0.0),
                scale: pop_scale(self.progress()),
            },
        }
    }
}

/// Scale keyframes of the pop variant: 0.3 → 1.05 → 0.9 → 1.0.
fn pop_scale(t: f32) -> f32 {
    let lerp = |a: f32, b: f32, f: f32| a + (b - a) * f;
    if t < 0.5 {
        lerp(0.3, 1.05, t / 0.5)
    } else if t < 0.7 {
        lerp(1.05, 0.9, (t - 0.5) / 0.2)
    } else {
        lerp(0.9, 1.0, (t - 0.7) / 0.3)
    }
}

/// Everything a [`Reveal`] needs from the page: the tracker that owns the
/// visibility flags, the registry to report layout into, and the style
/// defaults.
pub struct RevealHost<'a> {
    pub tracker: &'a VisibilityTracker,
    pub registry: &'a RwLock<GeometryRegistry>,
    pub defaults: RevealStyleDefaults,
}

/// Widget wrapping a content block in a visibility-driven reveal.
pub struct Reveal {
    id: ElementId,
    config: RevealConfig,
    direction: RevealDirection,
    delay: f32,
}

impl Reveal {
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            config: RevealConfig::default(),
            direction: RevealDirection::default(),
            delay: 0.0,
        }
    }

    pub fn config(mut self, config: RevealConfig) -> Self {
        self.config = config;
        self
    }

    pub fn direction(mut self, direction: RevealDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Extra delay in seconds before the transition starts, used for
    /// staggered groups.
    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Stagger shorthand: delay by `index` steps of the host's stagger step.
    pub fn stagger(self, index: usize, host: &RevealHost<'_>) -> Self {
        let step = host.defaults.stagger_step;
        self.delay(index as f32 * step)
    }

    pub fn show<R>(
        self,
        ui: &mut Ui,
        host: &RevealHost<'_>,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> R {
        host.tracker.observe(self.id.clone(), self.config);
        let visible = host.tracker.is_visible(&self.id);

        // Transition state survives frames in egui's temp memory, keyed by
        // the element id.
        let egui_id = Id::new(("reveal", self.id.to_string()));
        let mut transition = ui
            .ctx()
            .data_mut(|d| d.get_temp::<Transition>(egui_id))
            .unwrap_or_else(|| Transition::new(self.delay, host.defaults.duration));

        let dt = ui.input(|i| i.stable_dt).min(0.1);
        if visible {
            transition.advance(dt);
        } else {
            // Not revealed (or left the viewport again): replay from the top
            // next time the element becomes visible.
            transition.reset();
        }
        ui.ctx().data_mut(|d| d.insert_temp(egui_id, transition));

        let style = transition.style(self.direction, host.defaults.distance);
        // Widgets cannot be scaled; the pop variant shows as a small lift.
        let pop_lift = (1.0 - style.scale) * 8.0;
        let offset = egui::vec2(style.offset.0, style.offset.1 + pop_lift);

        let outer = ui.available_rect_before_wrap();
        let mut content_ui = ui.child_ui(outer.translate(offset), *ui.layout());
        apply_alpha(&mut content_ui, style.opacity);
        let inner = add_contents(&mut content_ui);

        // Reserve layout space at the resting position regardless of the
        // current offset, so the animation never reflows surrounding content.
        let used = content_ui.min_rect().translate(-offset);
        ui.allocate_rect(used, Sense::hover());

        host.registry
            .write()
            .record(self.id, crate::convert::to_core(used));

        if visible && !transition.finished() {
            ui.ctx().request_repaint();
        }

        inner
    }
}

/// Fade the standard visuals of a child UI by `alpha`.
fn apply_alpha(ui: &mut Ui, alpha: f32) {
    if alpha >= 1.0 {
        return;
    }
    let visuals = ui.visuals_mut();
    let text = visuals.text_color().gamma_multiply(alpha);
    visuals.override_text_color = Some(text);
    visuals.hyperlink_color = visuals.hyperlink_color.gamma_multiply(alpha);
    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widget.bg_fill = widget.bg_fill.gamma_multiply(alpha);
        widget.weak_bg_fill = widget.weak_bg_fill.gamma_multiply(alpha);
        widget.bg_stroke.color = widget.bg_stroke.color.gamma_multiply(alpha);
        widget.fg_stroke.color = widget.fg_stroke.color.gamma_multiply(alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let mut transition = Transition::new(0.0, 0.6);
        let start = transition.style(RevealDirection::Up, 20.0);
        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.offset, (0.0, 20.0));

        transition.advance(10.0);
        let end = transition.style(RevealDirection::Up, 20.0);
        assert_eq!(end.opacity, 1.0);
        assert_eq!(end.offset, (0.0, 0.0));
        assert!(transition.finished());
    }

    #[test]
    fn test_progress_clamps() {
        let mut transition = Transition::new(0.0, 0.5);
        assert_eq!(transition.progress(), 0.0);
        transition.advance(100.0);
        assert_eq!(transition.progress(), 1.0);
    }

    #[test]
    fn test_delay_holds_progress_at_zero() {
        let mut transition = Transition::new(0.4, 0.6);
        transition.advance(0.3);
        assert_eq!(transition.progress(), 0.0);

        transition.advance(0.2);
        assert!(transition.progress() > 0.0);
    }

    #[test]
    fn test_reset_replays_from_the_top() {
        let mut transition = Transition::new(0.0, 0.6);
        transition.advance(1.0);
        assert!(transition.finished());

        transition.reset();
        assert_eq!(transition.progress(), 0.0);
    }

    #[test]
    fn test_direction_offsets() {
        let transition = Transition::new(0.0, 0.6);
        let d = 20.0;
        assert_eq!(transition.style(RevealDirection::Up, d).offset, (0.0, d));
        assert_eq!(transition.style(RevealDirection::Down, d).offset, (0.0, -d));
        assert_eq!(transition.style(RevealDirection::Left, d).offset, (-d, 0.0));
        assert_eq!(transition.style(RevealDirection::Right, d).offset, (d, 0.0));
        assert_eq!(transition.style(RevealDirection::Pop, d).offset, (0.0, 0.0));
    }

    #[test]
    fn test_pop_scale_keyframes() {
        assert!((pop_scale(0.0) - 0.3).abs() < 1e-6);
        assert!((pop_scale(0.5) - 1.05).abs() < 1e-6);
        assert!((pop_scale(0.7) - 0.9).abs() < 1e-6);
        assert!((pop_scale(1.0) - 1.0).abs() < 1e-6);
    }
}
