//! Layout memory — owner of the single outstanding snapshot.
//!
//! At most one snapshot exists at a time: capture overwrites, restore
//! clears. Restore is tab-scoped and best-effort — it never panics,
//! never resurrects a closed window, and never forces a layout onto a
//! tab the user is no longer looking at.

use crate::host::{best_effort, Host};
use crate::layout::snapshot::LayoutSnapshot;

/// Holds zero or one [`LayoutSnapshot`].
#[derive(Debug, Default)]
pub struct LayoutMemory {
    snapshot: Option<LayoutSnapshot>,
}

impl LayoutMemory {
    pub fn new() -> LayoutMemory {
        LayoutMemory::default()
    }

    /// Record the current arrangement, replacing any previous snapshot.
    ///
    /// The caller guarantees this only runs from the unzoomed state, so an
    /// overwrite can only replace a snapshot that was already stale.
    /// Returns `false` when the host could not report enough state to
    /// capture anything.
    pub fn capture(&mut self, host: &dyn Host) -> bool {
        self.snapshot = LayoutSnapshot::capture(host);
        self.snapshot.is_some()
    }

    /// The outstanding snapshot, if any.
    pub fn snapshot(&self) -> Option<&LayoutSnapshot> {
        self.snapshot.as_ref()
    }

    /// Play the snapshot back: re-show every still-valid window, then
    /// return focus to the previously focused window if it survived.
    ///
    /// Skipped entirely (without error) when the owning tab is gone or the
    /// host is looking at a different tab. The snapshot is cleared in
    /// every case, restored or not.
    pub fn restore(&mut self, host: &mut dyn Host) {
        let snapshot = match self.snapshot.take() {
            Some(s) => s,
            None => return,
        };

        if !host.tab_exists(snapshot.tab) {
            log::info!("tab {} gone, dropping saved layout", snapshot.tab);
            return;
        }
        match best_effort("reading current tab", host.current_tab()) {
            Some(current) if current == snapshot.tab => {}
            _ => {
                log::info!(
                    "tab {} is no longer active, dropping saved layout",
                    snapshot.tab
                );
                return;
            }
        }

        for window in &snapshot.windows {
            if !host.window_exists(*window) {
                log::info!("window {} closed while zoomed, skipping", window);
                continue;
            }
            best_effort("re-showing window", host.set_window_visible(*window, true));
        }

        if host.window_exists(snapshot.focused) {
            best_effort("restoring focus", host.focus_window(snapshot.focused));
        }
    }
}
