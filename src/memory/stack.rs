//! Fixed-capacity integer stack
//!
//! This module provides the data structure behind the visualization:
//! - [`BoundedStack`]: a last-in-first-out container of `i32` with a
//!   compile-time capacity and an index-based removal extension
//!
//! # Capacity
//!
//! Storage is a fixed array; nothing is ever allocated. A push onto a full
//! stack is refused and leaves the contents untouched.
//!
//! # Queries on an empty stack
//!
//! [`pop`](BoundedStack::pop), [`peek`](BoundedStack::peek),
//! [`max`](BoundedStack::max) and [`min`](BoundedStack::min) return `None`
//! when the stack is empty, so every `i32` (including `-1`) is a legitimate
//! stored value.

use super::errors::StackError;

/// Number of elements the visualized pile can hold
pub const CAPACITY: usize = 10;

/// A last-in-first-out stack of at most `N` integers
#[derive(Debug, Clone)]
pub struct BoundedStack<const N: usize = CAPACITY> {
    slots: [i32; N],
    len: usize, // slots[..len] are populated, slots[len - 1] is the top
}

impl<const N: usize> BoundedStack<N> {
    pub fn new() -> Self {
        BoundedStack {
            slots: [0; N],
            len: 0,
        }
    }

    /// Push a value onto the top. Refused when the stack is full.
    pub fn push(&mut self, value: i32) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Full { capacity: N });
        }
        self.slots[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the top value
    pub fn pop(&mut self) -> Option<i32> {
        let value = self.peek()?;
        self.len -= 1;
        Some(value)
    }

    /// Get the top value without removing it
    pub fn peek(&self) -> Option<i32> {
        self.values().last().copied()
    }

    /// Remove the element at `index` (0 = bottom), shifting everything above
    /// it down by one position.
    pub fn remove_at(&mut self, index: usize) -> Result<i32, StackError> {
        if index >= self.len {
            return Err(StackError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        let value = self.slots[index];
        self.slots.copy_within(index + 1..self.len, index);
        self.len -= 1;
        Ok(value)
    }

    /// Largest stored value
    pub fn max(&self) -> Option<i32> {
        self.values().iter().copied().max()
    }

    /// Smallest stored value
    pub fn min(&self) -> Option<i32> {
        self.values().iter().copied().min()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        N
    }

    /// Index of the highest occupied slot, `None` when empty
    pub fn top(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    /// Get the value at `index` (0 = bottom)
    pub fn get(&self, index: usize) -> Option<i32> {
        self.values().get(index).copied()
    }

    /// Populated slots, bottom to top (for UI display)
    pub fn values(&self) -> &[i32] {
        &self.slots[..self.len]
    }
}

// Slots past `len` hold stale values and take no part in equality
impl<const N: usize> PartialEq for BoundedStack<N> {
    fn eq(&self, other: &Self) -> bool {
        self.values() == other.values()
    }
}

impl<const N: usize> Eq for BoundedStack<N> {}

impl<const N: usize> Default for BoundedStack<N> {
    fn default() -> Self {
        Self::new()
    }
}
