use serde::{Deserialize, Serialize};

/// Cosmetic border drawn by the host around the zoomed window.
///
/// Presentation-only: the style is forwarded to the host once at setup and
/// never consulted by the zoom state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    None,
    Single,
    Double,
    Rounded,
    Solid,
    Shadow,
}

impl Default for BorderStyle {
    fn default() -> Self {
        BorderStyle::None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomSettings {
    /// Key chord bound to the toggle command. `None` (or blank) disables
    /// the binding; the named command stays registered either way.
    #[serde(default)]
    pub keybinding: Option<String>,
    /// Border drawn around the zoomed window. Default: none.
    #[serde(default = "default_border")]
    pub border: BorderStyle,
    /// Strategy selector: `true` relocates the focused window to an
    /// isolated tab, `false` (default) hides its siblings in place.
    #[serde(default)]
    pub relocate_to_tab: bool,
}

fn default_border() -> BorderStyle {
    BorderStyle::default()
}

impl Default for ZoomSettings {
    fn default() -> Self {
        ZoomSettings {
            keybinding: None,
            border: default_border(),
            relocate_to_tab: false,
        }
    }
}

impl ZoomSettings {
    /// Parse settings from a YAML document.
    pub fn from_yaml(raw: &str) -> Result<ZoomSettings, String> {
        serde_yaml::from_str(raw).map_err(|e| format!("Failed to parse zoom settings: {}", e))
    }

    /// The configured key chord, with blank strings treated as unset.
    pub fn keybinding(&self) -> Option<&str> {
        self.keybinding
            .as_deref()
            .map(str::trim)
            .filter(|chord| !chord.is_empty())
    }
}
