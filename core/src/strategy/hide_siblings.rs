//! Sibling hiding — zoom by hiding every window except the focused one.
//!
//! Owns the layout memory and the in-process zoomed flag. Hiding changes
//! visibility only; buffers and window content stay alive so the reverse
//! operation is a pure visibility flip.

use crate::host::{best_effort, Host};
use crate::layout::LayoutMemory;
use crate::strategy::{ZoomState, ZoomStrategy};
use crate::types::handles::WindowId;

pub struct HideSiblings {
    memory: LayoutMemory,
    state: ZoomState,
}

impl HideSiblings {
    pub fn new() -> HideSiblings {
        HideSiblings {
            memory: LayoutMemory::new(),
            state: ZoomState::Unzoomed,
        }
    }
}

impl Default for HideSiblings {
    fn default() -> Self {
        HideSiblings::new()
    }
}

impl ZoomStrategy for HideSiblings {
    fn is_zoomed(&self, _host: &dyn Host) -> bool {
        self.state == ZoomState::Zoomed
    }

    fn enter(&mut self, host: &mut dyn Host) {
        if self.state == ZoomState::Zoomed {
            // Re-entrancy guard: a second capture would leak the first.
            return;
        }
        if !self.memory.capture(&*host) {
            log::warn!("could not capture layout, staying unzoomed");
            return;
        }
        let siblings: Vec<WindowId> = match self.memory.snapshot() {
            Some(snapshot) => snapshot.siblings().collect(),
            None => return,
        };
        for window in siblings {
            best_effort("hiding window", host.set_window_visible(window, false));
        }
        self.state = ZoomState::Zoomed;
    }

    fn exit(&mut self, host: &mut dyn Host) {
        if self.state == ZoomState::Unzoomed {
            return;
        }
        self.memory.restore(host);
        self.state = ZoomState::Unzoomed;
    }

    fn name(&self) -> &'static str {
        "hide"
    }
}
