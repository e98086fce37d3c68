//! Layout memory — capture and reversal of a window arrangement.
//!
//! The `snapshot` module records which windows were visible, which one had
//! focus, and which tab owned them. The `memory` module holds the single
//! outstanding snapshot and plays it back defensively: windows closed while
//! zoomed are skipped, and restoration is silently abandoned when the user
//! has moved to a different tab.

pub mod memory;
pub mod snapshot;

pub use memory::LayoutMemory;
pub use snapshot::LayoutSnapshot;
