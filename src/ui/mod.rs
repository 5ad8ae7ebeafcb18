//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into these layers:
//!
//! - **[`app`]**: frame loop, quit handling, mouse hover tracking
//! - **[`controller`]**: maps one press or key to at most one pile mutation
//! - **[`input`]**: numeric text entry for the add command
//! - **[`layout`]**: per-frame rectangles and hit-testing
//! - **[`panes`]**: stateless render functions (buttons, pile, entry box, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it and call
//! [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod controller;
pub mod input;
pub mod layout;
pub mod panes;
pub mod theme;

pub use app::App;
pub use controller::InteractionController;
