//! Data model for the visualization
//!
//! - [`stack`]: the fixed-capacity [`BoundedStack`] of integers
//! - [`errors`]: [`StackError`], why a mutation was refused
//!
//! Nothing here knows about terminals or input; the UI layer owns one
//! [`BoundedStack`] and lends it to the render pass each frame.

pub mod errors;
pub mod stack;

pub use errors::StackError;
pub use stack::{BoundedStack, CAPACITY};
