//! Zoom controller — the toggle state machine over a chosen strategy.
//!
//! Two states (unzoomed, zoomed), two transitions, both idempotent:
//! calling `zoom_in` while zoomed (or `zoom_out` while unzoomed) is a
//! defined no-op, never an error. The controller owns its strategy and
//! settings, so independent controller instances never interfere.

use crate::command::Command;
use crate::host::Host;
use crate::response::Response;
use crate::strategy::{self, ZoomStrategy};
use crate::types::config::ZoomSettings;

/// Command name registered with the host's palette and key binding.
pub const TOGGLE_COMMAND: &str = "zoom.toggle";

/// Notification shown after entering zoom.
pub const MSG_ZOOM_ENABLED: &str = "zoom enabled";
/// Notification shown after leaving zoom.
pub const MSG_ZOOM_DISABLED: &str = "zoom disabled";

pub struct ZoomController {
    strategy: Box<dyn ZoomStrategy>,
    settings: ZoomSettings,
}

impl ZoomController {
    /// Wire the extension into the host and pick the strategy.
    ///
    /// Registers the `zoom.toggle` command, binds the configured key chord
    /// (skipped when none is set), and forwards the cosmetic border style.
    /// Applied once per session; the machine starts unzoomed.
    pub fn setup(host: &mut dyn Host, settings: ZoomSettings) -> ZoomController {
        host.register_command(TOGGLE_COMMAND);
        if let Some(chord) = settings.keybinding() {
            log::info!("binding '{}' to {}", chord, TOGGLE_COMMAND);
            host.bind_key(chord, TOGGLE_COMMAND);
        }
        host.apply_border_style(settings.border);

        let strategy = strategy::from_settings(&settings);
        log::info!("zoom controller ready, strategy '{}'", strategy.name());
        ZoomController { strategy, settings }
    }

    /// Return a reference to the current settings.
    pub fn settings(&self) -> &ZoomSettings {
        &self.settings
    }

    /// Whether the session is currently zoomed.
    pub fn is_zoomed(&self, host: &dyn Host) -> bool {
        self.strategy.is_zoomed(host)
    }

    /// Unzoomed → Zoomed. No-op when already zoomed.
    pub fn zoom_in(&mut self, host: &mut dyn Host) {
        if self.strategy.is_zoomed(host) {
            return;
        }
        self.strategy.enter(host);
        // The strategy may decline (nothing to capture); only a real
        // transition notifies.
        if self.strategy.is_zoomed(host) {
            log::info!("zoomed in");
            host.notify(MSG_ZOOM_ENABLED);
        }
    }

    /// Zoomed → Unzoomed. No-op when already unzoomed.
    pub fn zoom_out(&mut self, host: &mut dyn Host) {
        if !self.strategy.is_zoomed(host) {
            return;
        }
        self.strategy.exit(host);
        if !self.strategy.is_zoomed(host) {
            log::info!("zoomed out");
            host.notify(MSG_ZOOM_DISABLED);
        }
    }

    /// Dispatch on the current state.
    pub fn toggle(&mut self, host: &mut dyn Host) {
        if self.strategy.is_zoomed(host) {
            self.zoom_out(host);
        } else {
            self.zoom_in(host);
        }
    }

    /// The single dispatch method for the typed command surface.
    pub fn execute(&mut self, cmd: Command, host: &mut dyn Host) -> Response {
        match cmd {
            Command::Toggle => {
                self.toggle(host);
                Response::ok(self.state_line(host))
            }
            Command::ZoomIn => {
                self.zoom_in(host);
                Response::ok(self.state_line(host))
            }
            Command::ZoomOut => {
                self.zoom_out(host);
                Response::ok(self.state_line(host))
            }
            Command::Status { format } => self.cmd_status(format, host),
            Command::Help { topic } => Response::ok(crate::help::help_text(topic.as_deref())),
        }
    }

    fn cmd_status(&self, format: Option<String>, host: &dyn Host) -> Response {
        if format.as_deref() == Some("json") {
            let body = serde_json::json!({
                "zoomed": self.is_zoomed(host),
                "strategy": self.strategy.name(),
            });
            return Response::ok(body.to_string());
        }
        Response::ok(self.state_line(host))
    }

    fn state_line(&self, host: &dyn Host) -> String {
        if self.is_zoomed(host) {
            "zoomed".into()
        } else {
            "unzoomed".into()
        }
    }
}
