//! Layout snapshot — the recorded window arrangement a zoom reverses to.

use crate::host::{best_effort, Host};
use crate::types::handles::{TabId, WindowId};

/// Everything needed to undo a zoom: the windows that were visible, the
/// window that had focus, and the tab the arrangement belongs to.
///
/// Iteration order of `windows` follows the host's enumeration order;
/// semantics do not depend on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSnapshot {
    pub windows: Vec<WindowId>,
    pub focused: WindowId,
    pub tab: TabId,
}

impl LayoutSnapshot {
    /// Record the current arrangement from the host.
    ///
    /// Returns `None` when the host cannot report a focused window or a
    /// current tab — there is nothing meaningful to zoom in that case.
    pub fn capture(host: &dyn Host) -> Option<LayoutSnapshot> {
        let focused = best_effort("reading focused window", host.focused_window())?;
        let tab = best_effort("reading current tab", host.current_tab())?;
        Some(LayoutSnapshot {
            windows: host.visible_windows(),
            focused,
            tab,
        })
    }

    /// Windows in the snapshot other than the focused one.
    pub fn siblings(&self) -> impl Iterator<Item = WindowId> + '_ {
        let focused = self.focused;
        self.windows.iter().copied().filter(move |w| *w != focused)
    }
}
