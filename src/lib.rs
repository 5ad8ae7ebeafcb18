//! # Introduction
//!
//! PileTTY shows a bounded stack of integers (the "pile") as stacked bars in
//! the terminal. Buttons along the top push, pop and toggle highlighting of
//! the largest and smallest values; clicking a bar removes that element.
//! The UI is built with [ratatui](https://docs.rs/ratatui) and
//! [crossterm](https://docs.rs/crossterm).
//!
//! ## Frame loop
//!
//! ```text
//! draw scene → poll one event → controller mutates pile → draw scene → ...
//! ```
//!
//! 1. [`memory`]: the fixed-capacity [`memory::BoundedStack`] and its
//!    [`memory::StackError`].
//! 2. [`ui`]: the [`ui::InteractionController`] that owns the pile, the
//!    per-frame layout and hit-testing, and the render panes.
//!
//! ## Controls
//!
//! Mouse: click a button, or click a bar to remove it.
//! Keys: `a` add, `d` pop, `x` toggle max, `n` toggle min, `q`/`Esc` quit.
//! While entering a value: digits and `-`, Backspace, Enter to push, Esc to
//! cancel.

pub mod memory;
pub mod ui;
