//! The section view abstraction

use crate::PageContext;
use egui::Ui;
use folio_core::SectionId;

/// Something a view asked the page to do.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageRequest {
    #[default]
    None,
    /// Scroll smoothly to the given section.
    JumpTo(SectionId),
}

/// One named page section rendered inside the scrolling column.
pub trait SectionView {
    /// Navigation identifier of this section.
    fn id(&self) -> SectionId;

    /// Heading shown at the top of the section.
    fn title(&self) -> &str;

    /// Render the section body.
    fn ui(&mut self, ui: &mut Ui, ctx: &PageContext) -> PageRequest;
}
