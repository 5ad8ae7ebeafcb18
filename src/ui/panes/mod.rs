//! TUI pane rendering modules
//!
//! Stateless render functions for each part of the scene. They borrow the
//! controller's state read-only for the duration of one frame.
//!
//! # Pane Modules
//!
//! - [`buttons`]: the command button row
//! - [`pile`]: stack elements with max/min highlighting
//! - [`entry`]: value entry box shown while typing a number
//! - [`status`]: status bar with pile statistics and keybindings
//!
//! Every pane takes the frame's [`SceneLayout`](crate::ui::layout::SceneLayout)
//! so drawing uses exactly the rectangles that mouse presses are tested
//! against.

pub mod buttons;
pub mod entry;
pub mod pile;
pub mod status;

// Re-export render functions for convenience
pub use buttons::{render_button_bar, ButtonBarData};
pub use entry::render_entry_box;
pub use pile::{render_pile_pane, PileRenderData};
pub use status::{render_status_bar, StatusRenderData};
