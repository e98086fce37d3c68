//! Opaque host handles — windows, tabs, and per-window view state.
//!
//! Handles are created and destroyed by the editor host; winzoom only ever
//! references them. A handle held across a zoom may go stale at any time,
//! so every use is preceded by a host-side existence check.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a single visible pane in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// Identifier for a workspace/tab grouping of windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(pub u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Snapshot of a window's scroll/cursor/fold state.
///
/// The tab-relocation strategy saves this before moving a window into an
/// isolated tab, and reapplies it after the tab is torn down so the user
/// lands exactly where they left off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Cursor row (0-based).
    pub cursor_row: u32,
    /// Cursor column (0-based).
    pub cursor_col: u32,
    /// First line visible at the top of the viewport.
    pub first_visible_line: u32,
    /// Closed fold ranges as (start_line, end_line) pairs.
    #[serde(default)]
    pub folds: Vec<(u32, u32)>,
}

impl ViewState {
    /// A view positioned at the given cursor location with no folds.
    pub fn at(cursor_row: u32, cursor_col: u32) -> ViewState {
        ViewState {
            cursor_row,
            cursor_col,
            first_visible_line: 0,
            folds: Vec::new(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_id_display() {
        assert_eq!(WindowId(3).to_string(), "w3");
        assert_eq!(TabId(1).to_string(), "t1");
    }

    #[test]
    fn view_state_round_trip() {
        let view = ViewState {
            cursor_row: 12,
            cursor_col: 4,
            first_visible_line: 8,
            folds: vec![(20, 30)],
        };
        let json = serde_json::to_string(&view).unwrap();
        let back: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
    }

    #[test]
    fn view_state_folds_default_to_empty() {
        let raw = r#"{"cursor_row":1,"cursor_col":2,"first_visible_line":0}"#;
        let view: ViewState = serde_json::from_str(raw).unwrap();
        assert!(view.folds.is_empty());
    }
}
