//! Command — the typed interface for all winzoom operations.
//!
//! Hosts and the CLI talk to the controller through these tagged values;
//! the key binding and the command palette entry both resolve to
//! `zoom.toggle`.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "command")]
pub enum Command {
    #[serde(rename = "zoom.toggle")]
    Toggle,

    #[serde(rename = "zoom.in")]
    ZoomIn,

    #[serde(rename = "zoom.out")]
    ZoomOut,

    #[serde(rename = "status")]
    Status {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
    },

    #[serde(rename = "help")]
    Help {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        topic: Option<String>,
    },
}
