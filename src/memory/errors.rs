//! Error types for stack mutations
//!
//! [`StackError`] describes why a mutation on a
//! [`BoundedStack`](super::stack::BoundedStack) was refused. A refused
//! mutation never changes the stack, so these errors are informational: the UI
//! turns them into a status message and carries on.

use std::fmt;

/// Reasons a stack mutation was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// Push onto a stack that already holds `capacity` elements
    Full { capacity: usize },

    /// Pop from a stack with no elements
    Empty,

    /// Removal at an index that is not occupied
    IndexOutOfBounds { index: usize, len: usize },
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::Full { capacity } => {
                write!(f, "Pile is full ({} elements)", capacity)
            }
            StackError::Empty => write!(f, "Pile is empty"),
            StackError::IndexOutOfBounds { index, len } => {
                write!(f, "No element at index {} (pile holds {})", index, len)
            }
        }
    }
}

impl std::error::Error for StackError {}
