//! Host adapter — the narrow surface winzoom requires from the editor.
//!
//! The core never talks to the editor directly; everything goes through
//! this trait so the state machine can be driven by a real host, a
//! simulated one, or a test double. Handles crossing this boundary may go
//! stale at any time (the user keeps editing while zoomed), so callers
//! treat every fallible method as best-effort.

use thiserror::Error;

use crate::types::config::BorderStyle;
use crate::types::handles::{TabId, ViewState, WindowId};

/// Failure reported by a host call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The window handle no longer refers to a live window.
    #[error("window {0} no longer exists")]
    InvalidWindow(WindowId),

    /// The tab handle no longer refers to a live tab.
    #[error("tab {0} no longer exists")]
    InvalidTab(TabId),

    /// Any other host-side failure, with the host's own description.
    #[error("host call failed: {0}")]
    Backend(String),
}

/// Editor capabilities winzoom depends on.
///
/// Semantics the core relies on:
///
/// - `set_window_visible(_, false)` hides a window without destroying its
///   content; re-showing it brings the same buffer back.
/// - `open_isolated_tab` shows the given window as the sole window of a
///   freshly created tab and switches to that tab. The window handle stays
///   the same in both tabs.
/// - `close_tab` returns the session to whichever tab was active before
///   the closed one was opened.
pub trait Host {
    /// Windows currently visible in the active tab, in host order.
    fn visible_windows(&self) -> Vec<WindowId>;

    /// The window that currently has focus.
    fn focused_window(&self) -> Result<WindowId, HostError>;

    /// The currently active tab.
    fn current_tab(&self) -> Result<TabId, HostError>;

    /// Whether the window handle still refers to a live window.
    fn window_exists(&self, window: WindowId) -> bool;

    /// Whether the tab handle still refers to a live tab.
    fn tab_exists(&self, tab: TabId) -> bool;

    /// Hide or show a window without touching its content.
    fn set_window_visible(&mut self, window: WindowId, visible: bool) -> Result<(), HostError>;

    /// Move focus to the given window.
    fn focus_window(&mut self, window: WindowId) -> Result<(), HostError>;

    /// Open a new tab containing only the given window and switch to it.
    fn open_isolated_tab(&mut self, window: WindowId) -> Result<TabId, HostError>;

    /// Close a tab; the host returns to the previously active tab.
    fn close_tab(&mut self, tab: TabId) -> Result<(), HostError>;

    /// Read a window's cursor/scroll/fold state.
    fn save_view_state(&self, window: WindowId) -> Result<ViewState, HostError>;

    /// Reapply a previously saved view state to a window.
    fn apply_view_state(&mut self, window: WindowId, view: &ViewState) -> Result<(), HostError>;

    /// Attach an opaque marker value to a tab.
    fn set_tab_marker(&mut self, tab: TabId, marker: &str) -> Result<(), HostError>;

    /// Read the marker attached to a tab, if any.
    fn tab_marker(&self, tab: TabId) -> Option<String>;

    /// Bind a key chord to a named command.
    fn bind_key(&mut self, chord: &str, command: &str);

    /// Register a named command with the host's command palette.
    fn register_command(&mut self, name: &str);

    /// Show a short informational message to the user.
    fn notify(&mut self, message: &str);

    /// Forward the cosmetic zoom border style. Presentation only.
    fn apply_border_style(&mut self, style: BorderStyle);
}

/// Attempt a host call and keep going on failure.
///
/// Restoration must never abort halfway because one handle went stale:
/// the failure is logged and the caller moves on to the next step.
pub fn best_effort<T>(what: &str, result: Result<T, HostError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{} failed, continuing: {}", what, e);
            None
        }
    }
}


#[cfg(test)]
pub(crate) mod mock {
    //! Recording in-memory host used across the core tests.

    use std::collections::HashMap;

    use super::*;

    pub(crate) struct MockHost {
        pub windows: Vec<(WindowId, bool)>,
        pub focused: Option<WindowId>,
        pub tabs: Vec<TabId>,
        pub current_tab: TabId,
        pub markers: HashMap<TabId, String>,
        pub views: HashMap<WindowId, ViewState>,
        pub notifications: Vec<String>,
        pub bindings: Vec<(String, String)>,
        pub commands: Vec<String>,
        pub borders: Vec<BorderStyle>,
        /// Windows whose visibility calls fail with a backend error.
        pub fail_visibility: Vec<WindowId>,
        /// Windows shown by open_isolated_tab, keyed by the new tab.
        pub isolated: HashMap<TabId, WindowId>,
        tab_history: Vec<TabId>,
        next_tab: u64,
    }

    impl MockHost {
        /// A host with `count` visible windows w1..wN in tab t1, focus on w1.
        pub fn with_windows(count: u64) -> MockHost {
            MockHost {
                windows: (1..=count).map(|i| (WindowId(i), true)).collect(),
                focused: (count > 0).then(|| WindowId(1)),
                tabs: vec![TabId(1)],
                current_tab: TabId(1),
                markers: HashMap::new(),
                views: HashMap::new(),
                notifications: Vec::new(),
                bindings: Vec::new(),
                commands: Vec::new(),
                borders: Vec::new(),
                fail_visibility: Vec::new(),
                isolated: HashMap::new(),
                tab_history: Vec::new(),
                next_tab: 2,
            }
        }

        /// Simulate the user closing a window (e.g. `:q` while zoomed).
        pub fn close_window(&mut self, window: WindowId) {
            self.windows.retain(|(w, _)| *w != window);
            if self.focused == Some(window) {
                self.focused = self.windows.first().map(|(w, _)| *w);
            }
        }

        /// Simulate the user switching to another (possibly new) tab.
        pub fn switch_tab(&mut self, tab: TabId) {
            if !self.tabs.contains(&tab) {
                self.tabs.push(tab);
            }
            self.current_tab = tab;
        }

        pub fn is_visible(&self, window: WindowId) -> bool {
            self.windows
                .iter()
                .any(|(w, visible)| *w == window && *visible)
        }

        pub fn visible_count(&self) -> usize {
            self.windows.iter().filter(|(_, visible)| *visible).count()
        }
    }

    impl Host for MockHost {
        fn visible_windows(&self) -> Vec<WindowId> {
            if let Some(window) = self.isolated.get(&self.current_tab) {
                return vec![*window];
            }
            self.windows
                .iter()
                .filter(|(_, visible)| *visible)
                .map(|(w, _)| *w)
                .collect()
        }

        fn focused_window(&self) -> Result<WindowId, HostError> {
            self.focused
                .ok_or_else(|| HostError::Backend("no focused window".into()))
        }

        fn current_tab(&self) -> Result<TabId, HostError> {
            Ok(self.current_tab)
        }

        fn window_exists(&self, window: WindowId) -> bool {
            self.windows.iter().any(|(w, _)| *w == window)
        }

        fn tab_exists(&self, tab: TabId) -> bool {
            self.tabs.contains(&tab)
        }

        fn set_window_visible(&mut self, window: WindowId, visible: bool) -> Result<(), HostError> {
            if self.fail_visibility.contains(&window) {
                return Err(HostError::Backend(format!("cannot touch {}", window)));
            }
            match self.windows.iter_mut().find(|(w, _)| *w == window) {
                Some((_, v)) => {
                    *v = visible;
                    Ok(())
                }
                None => Err(HostError::InvalidWindow(window)),
            }
        }

        fn focus_window(&mut self, window: WindowId) -> Result<(), HostError> {
            if !self.window_exists(window) {
                return Err(HostError::InvalidWindow(window));
            }
            self.focused = Some(window);
            Ok(())
        }

        fn open_isolated_tab(&mut self, window: WindowId) -> Result<TabId, HostError> {
            if !self.window_exists(window) {
                return Err(HostError::InvalidWindow(window));
            }
            let tab = TabId(self.next_tab);
            self.next_tab += 1;
            self.tabs.push(tab);
            self.isolated.insert(tab, window);
            self.tab_history.push(self.current_tab);
            self.current_tab = tab;
            self.focused = Some(window);
            Ok(tab)
        }

        fn close_tab(&mut self, tab: TabId) -> Result<(), HostError> {
            if !self.tab_exists(tab) {
                return Err(HostError::InvalidTab(tab));
            }
            self.tabs.retain(|t| *t != tab);
            self.markers.remove(&tab);
            self.isolated.remove(&tab);
            if self.current_tab == tab {
                self.current_tab = self
                    .tab_history
                    .pop()
                    .or_else(|| self.tabs.first().copied())
                    .unwrap_or(TabId(1));
            }
            Ok(())
        }

        fn save_view_state(&self, window: WindowId) -> Result<ViewState, HostError> {
            if !self.window_exists(window) {
                return Err(HostError::InvalidWindow(window));
            }
            Ok(self
                .views
                .get(&window)
                .cloned()
                .unwrap_or_else(|| ViewState::at(0, 0)))
        }

        fn apply_view_state(&mut self, window: WindowId, view: &ViewState) -> Result<(), HostError> {
            if !self.window_exists(window) {
                return Err(HostError::InvalidWindow(window));
            }
            self.views.insert(window, view.clone());
            Ok(())
        }

        fn set_tab_marker(&mut self, tab: TabId, marker: &str) -> Result<(), HostError> {
            if !self.tab_exists(tab) {
                return Err(HostError::InvalidTab(tab));
            }
            self.markers.insert(tab, marker.to_string());
            Ok(())
        }

        fn tab_marker(&self, tab: TabId) -> Option<String> {
            self.markers.get(&tab).cloned()
        }

        fn bind_key(&mut self, chord: &str, command: &str) {
            self.bindings.push((chord.to_string(), command.to_string()));
        }

        fn register_command(&mut self, name: &str) {
            self.commands.push(name.to_string());
        }

        fn notify(&mut self, message: &str) {
            self.notifications.push(message.to_string());
        }

        fn apply_border_style(&mut self, style: BorderStyle) {
            self.borders.push(style);
        }
    }
}
