//! Simulated editor host — an in-memory session the CLI drives commands
//! against.
//!
//! Implements the full `Host` surface over plain vectors and maps: named
//! windows with visibility, a tab list with history for close-returns,
//! per-tab markers, and per-window view state. `render()` prints the
//! session so a scripted run ends with a picture of what the user would
//! see.

use std::collections::HashMap;
use std::fmt::Write as _;

use winzoom_core::host::{Host, HostError};
use winzoom_core::types::config::BorderStyle;
use winzoom_core::types::handles::{TabId, ViewState, WindowId};

struct SimWindow {
    id: WindowId,
    name: String,
    visible: bool,
}

pub struct SimHost {
    windows: Vec<SimWindow>,
    focused: Option<WindowId>,
    tabs: Vec<TabId>,
    current_tab: TabId,
    tab_history: Vec<TabId>,
    /// Window shown by each isolated tab.
    isolated: HashMap<TabId, WindowId>,
    markers: HashMap<TabId, String>,
    views: HashMap<WindowId, ViewState>,
    pub notifications: Vec<String>,
    pub bindings: Vec<(String, String)>,
    pub commands: Vec<String>,
    pub border: Option<BorderStyle>,
    next_tab: u64,
}

impl SimHost {
    /// A session with `count` visible windows w1..wN in one tab, focus on
    /// w1.
    pub fn session(count: u64) -> SimHost {
        SimHost {
            windows: (1..=count)
                .map(|i| SimWindow {
                    id: WindowId(i),
                    name: format!("window-{}", i),
                    visible: true,
                })
                .collect(),
            focused: (count > 0).then(|| WindowId(1)),
            tabs: vec![TabId(1)],
            current_tab: TabId(1),
            tab_history: Vec::new(),
            isolated: HashMap::new(),
            markers: HashMap::new(),
            views: HashMap::new(),
            notifications: Vec::new(),
            bindings: Vec::new(),
            commands: Vec::new(),
            border: None,
            next_tab: 2,
        }
    }

    /// Simulate the user closing a window.
    pub fn close_window(&mut self, window: WindowId) {
        self.windows.retain(|w| w.id != window);
        if self.focused == Some(window) {
            self.focused = self.windows.iter().find(|w| w.visible).map(|w| w.id);
        }
    }

    pub fn visible_count(&self) -> usize {
        self.windows.iter().filter(|w| w.visible).count()
    }

    pub fn is_visible(&self, window: WindowId) -> bool {
        self.windows.iter().any(|w| w.id == window && w.visible)
    }

    pub fn active_tab(&self) -> TabId {
        self.current_tab
    }

    /// Human-readable picture of the session for the end of a scripted
    /// run.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let marker = self
            .markers
            .get(&self.current_tab)
            .map(|m| format!(" [{}]", m))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "tab {}{} ({} tabs open)",
            self.current_tab,
            marker,
            self.tabs.len()
        );
        for window in &self.windows {
            let shown = if self.isolated.contains_key(&self.current_tab) {
                self.isolated[&self.current_tab] == window.id
            } else {
                window.visible
            };
            let _ = writeln!(
                out,
                "  {} {:<12} {}{}",
                window.id,
                window.name,
                if shown { "visible" } else { "hidden" },
                if self.focused == Some(window.id) {
                    ", focused"
                } else {
                    ""
                },
            );
        }
        out
    }
}

impl Host for SimHost {
    fn visible_windows(&self) -> Vec<WindowId> {
        if let Some(window) = self.isolated.get(&self.current_tab) {
            return vec![*window];
        }
        self.windows
            .iter()
            .filter(|w| w.visible)
            .map(|w| w.id)
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
        self.windows.iter().any(|w| w.id == window)
    }

    fn tab_exists(&self, tab: TabId) -> bool {
        self.tabs.contains(&tab)
    }

    fn set_window_visible(&mut self, window: WindowId, visible: bool) -> Result<(), HostError> {
        match self.windows.iter_mut().find(|w| w.id == window) {
            Some(w) => {
                w.visible = visible;
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
        self.border = Some(style);
    }
}
