//! Section views and the page controller for the portfolio viewer

pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod page;
pub mod projects;
pub mod section;
pub mod skills;

use folio_content::Profile;
use folio_core::events::EventBus;
use folio_core::{
    GeometryRegistry, PageSettings, SectionId, SectionTracker, VisibilityTracker,
};
use folio_ui::reveal::RevealHost;
use parking_lot::RwLock;
use std::sync::Arc;

// Re-export commonly used types
pub use page::PortfolioPage;
pub use section::{PageRequest, SectionView};

/// The fixed navigation sections, in declaration order.
pub const ABOUT: SectionId = SectionId("about");
pub const SKILLS: SectionId = SectionId("skills");
pub const EXPERIENCE: SectionId = SectionId("experience");
pub const PROJECTS: SectionId = SectionId("projects");
pub const CONTACT: SectionId = SectionId("contact");

pub const SECTIONS: [SectionId; 5] = [ABOUT, SKILLS, EXPERIENCE, PROJECTS, CONTACT];

/// Navigation-link label for a section.
pub fn nav_label(section: SectionId) -> &'static str {
    match section.as_str() {
        "about" => "About",
        "skills" => "Skills",
        "experience" => "Experience",
        "projects" => "Projects",
        "contact" => "Contact",
        other => other,
    }
}

/// Context passed to views during rendering
#[derive(Clone)]
pub struct PageContext {
    /// The loaded profile; swapped wholesale on reload.
    pub profile: Arc<RwLock<Profile>>,

    /// Per-element visibility tracker driving the reveal effects.
    pub visibility: Arc<VisibilityTracker>,

    /// Scroll-spy over the fixed section list.
    pub sections: Arc<SectionTracker>,

    /// Geometry recorded during layout, consumed by the trackers.
    pub registry: Arc<RwLock<GeometryRegistry>>,

    /// System-wide event bus.
    pub events: Arc<EventBus>,

    /// Page-wide settings.
    pub settings: PageSettings,
}

impl PageContext {
    /// The reveal host views hand to [`folio_ui::Reveal`].
    pub fn reveal_host(&self) -> RevealHost<'_> {
        RevealHost {
            tracker: self.visibility.as_ref(),
            registry: self.registry.as_ref(),
            defaults: self.settings.reveal,
        }
    }
}
