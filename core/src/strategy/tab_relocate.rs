//! Tab relocation — zoom by opening the focused window in its own tab.
//!
//! The zoomed/unzoomed state is not a field here: it lives in a marker
//! attached to the isolated tab itself. "Are we zoomed?" therefore means
//! "does the *current* tab carry the marker", which gives every tab an
//! independent zoom state with no extra bookkeeping. Closing the isolated
//! tab returns the session to the previously active tab per host
//! semantics.

use std::collections::HashMap;

use crate::host::{best_effort, Host};
use crate::strategy::ZoomStrategy;
use crate::types::handles::{TabId, WindowId};

/// Marker value attached to tabs created by this strategy.
pub const ZOOM_TAB_MARKER: &str = "winzoom";

pub struct TabRelocate {
    /// Window shown in each isolated tab we opened, so exit knows which
    /// window to hand the preserved view state back to.
    zoomed_windows: HashMap<TabId, WindowId>,
}

impl TabRelocate {
    pub fn new() -> TabRelocate {
        TabRelocate {
            zoomed_windows: HashMap::new(),
        }
    }
}

impl Default for TabRelocate {
    fn default() -> Self {
        TabRelocate::new()
    }
}

impl ZoomStrategy for TabRelocate {
    fn is_zoomed(&self, host: &dyn Host) -> bool {
        match host.current_tab() {
            Ok(tab) => host.tab_marker(tab).as_deref() == Some(ZOOM_TAB_MARKER),
            Err(_) => false,
        }
    }

    fn enter(&mut self, host: &mut dyn Host) {
        if self.is_zoomed(host) {
            return;
        }
        let window = match best_effort("reading focused window", host.focused_window()) {
            Some(w) => w,
            None => return,
        };
        // Preserve cursor/scroll/folds before the window changes tabs.
        let view = best_effort("saving view state", host.save_view_state(window));

        let tab = match best_effort("opening zoom tab", host.open_isolated_tab(window)) {
            Some(t) => t,
            None => return,
        };
        best_effort("marking zoom tab", host.set_tab_marker(tab, ZOOM_TAB_MARKER));
        self.zoomed_windows.insert(tab, window);

        if let Some(view) = view {
            best_effort(
                "reapplying view state",
                host.apply_view_state(window, &view),
            );
        }
    }

    fn exit(&mut self, host: &mut dyn Host) {
        let tab = match best_effort("reading current tab", host.current_tab()) {
            Some(t) => t,
            None => return,
        };
        if host.tab_marker(tab).as_deref() != Some(ZOOM_TAB_MARKER) {
            return;
        }

        let window = self
            .zoomed_windows
            .remove(&tab)
            .or_else(|| best_effort("reading focused window", host.focused_window()));

        // Re-save the view: the cursor has usually moved while zoomed.
        let view = window.and_then(|w| best_effort("saving view state", host.save_view_state(w)));

        best_effort("closing zoom tab", host.close_tab(tab));

        if let (Some(window), Some(view)) = (window, view) {
            if host.window_exists(window) {
                best_effort(
                    "restoring view state",
                    host.apply_view_state(window, &view),
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "tab"
    }
}
