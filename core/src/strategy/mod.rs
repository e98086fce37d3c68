//! Zoom strategies — interchangeable enter/exit mechanics.
//!
//! Two ways to give one window the whole screen: hide its siblings in
//! place, or relocate it to an isolated tab. The strategy also answers the
//! "are we zoomed?" question, because the two keep that state in different
//! places — an in-memory flag for sibling hiding, a tab-attached marker
//! for relocation. Selected once at setup, never re-dispatched per call.

mod hide_siblings;
mod tab_relocate;

pub use hide_siblings::HideSiblings;
pub use tab_relocate::{TabRelocate, ZOOM_TAB_MARKER};

use crate::host::Host;
use crate::types::config::ZoomSettings;

/// Whether the session is zoomed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomState {
    Unzoomed,
    Zoomed,
}

/// Concrete mechanics behind zoom in/out.
pub trait ZoomStrategy {
    /// Whether the session is currently zoomed, from this strategy's
    /// point of view (may consult the host's current tab).
    fn is_zoomed(&self, host: &dyn Host) -> bool;

    /// Zoom the focused window. Must be a no-op if already zoomed.
    fn enter(&mut self, host: &mut dyn Host);

    /// Undo the zoom. Must be a no-op if not zoomed.
    fn exit(&mut self, host: &mut dyn Host);

    /// Short name for status reporting.
    fn name(&self) -> &'static str;
}

/// Pick the strategy the settings ask for.
pub fn from_settings(settings: &ZoomSettings) -> Box<dyn ZoomStrategy> {
    if settings.relocate_to_tab {
        Box::new(TabRelocate::new())
    } else {
        Box::new(HideSiblings::new())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_select_sibling_hiding() {
        let strategy = from_settings(&ZoomSettings::default());
        assert_eq!(strategy.name(), "hide");
    }

    #[test]
    fn relocate_flag_selects_tab_relocation() {
        let settings = ZoomSettings {
            relocate_to_tab: true,
            ..ZoomSettings::default()
        };
        let strategy = from_settings(&settings);
        assert_eq!(strategy.name(), "tab");
    }
}
