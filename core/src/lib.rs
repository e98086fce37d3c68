//! winzoom-core — temporarily maximize one editor window, then put the
//! layout back.
//!
//! The crate is host-agnostic: everything it needs from the editor goes
//! through the [`host::Host`] trait. On top of that sit the layout memory
//! (capture/restore of a window arrangement), two interchangeable zoom
//! strategies (hide siblings in place, or relocate to an isolated tab),
//! and the [`controller::ZoomController`] state machine exposing
//! `setup`/`toggle`/`zoom_in`/`zoom_out`.

pub mod command;
pub mod controller;
pub mod help;
pub mod host;
pub mod layout;
pub mod response;
pub mod strategy;
pub mod types;

pub use command::Command;
pub use controller::ZoomController;
pub use host::{Host, HostError};
pub use response::Response;
pub use types::config::{BorderStyle, ZoomSettings};
pub use types::handles::{TabId, ViewState, WindowId};
