//! Input-to-mutation mapping
//!
//! [`InteractionController`] owns the one [`BoundedStack`] of the session
//! together with the highlight flags and the pending text entry. Each call to
//! [`press`](InteractionController::press) or
//! [`key`](InteractionController::key) applies at most one mutation.
//!
//! # Entry mode
//!
//! The add command does not push right away: it opens the entry box. While
//! entering, digits and `-` are collected, Backspace deletes, Enter pushes the
//! parsed value and Esc abandons the entry. Mouse presses keep working in both
//! modes, except inside the entry box, which hides the scene beneath it.
//!
//! Refused mutations (push on a full pile, pop on an empty one) leave the
//! stack untouched and only update the status message.

use super::input::PendingInput;
use super::layout::{contains, Command, SceneLayout};
use crate::memory::{BoundedStack, StackError};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Owner of all mutable scene state
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    stack: BoundedStack,
    highlight_max: bool,
    highlight_min: bool,
    input: PendingInput,
    status_message: String,
}

impl InteractionController {
    pub fn new() -> Self {
        InteractionController {
            status_message: String::from("Ready!"),
            ..Default::default()
        }
    }

    /// Handle a primary-button press at a cell.
    ///
    /// Buttons and elements are tested independently; the layout keeps them
    /// apart, so in practice one press hits at most one of them. While
    /// entering, the entry box covers whatever lies beneath it and presses
    /// inside it do nothing.
    pub fn press(&mut self, column: u16, row: u16, layout: &SceneLayout) {
        if self.input.is_entering() && contains(layout.entry, column, row) {
            return;
        }

        if let Some(command) = layout.button_at(column, row) {
            self.run(command);
        }

        if let Some(index) = layout.element_at(column, row) {
            match self.stack.remove_at(index) {
                Ok(value) => self.status_message = format!("Removed {} at index {}", value, index),
                Err(e) => self.status_message = e.to_string(),
            }
        }
    }

    /// Handle a key press. Returns true if the key was consumed.
    pub fn key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        if self.input.is_entering() {
            return self.entry_key(key.code);
        }

        match key.code {
            KeyCode::Char('a') | KeyCode::Char('+') => self.run(Command::Add),
            KeyCode::Char('d') | KeyCode::Char('p') => self.run(Command::Remove),
            KeyCode::Char('x') => self.run(Command::HighlightMax),
            KeyCode::Char('n') => self.run(Command::HighlightMin),
            _ => return false,
        }
        true
    }

    fn entry_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(c) => self.input.push_char(c),
            KeyCode::Backspace => {
                self.input.backspace();
                true
            }
            KeyCode::Enter => {
                let value = self.input.commit();
                self.push(value);
                true
            }
            KeyCode::Esc => {
                self.input.cancel();
                self.status_message = String::from("Entry cancelled");
                true
            }
            _ => false,
        }
    }

    /// Execute a button command
    pub fn run(&mut self, command: Command) {
        match command {
            Command::Add => {
                if self.stack.is_full() {
                    self.status_message = StackError::Full {
                        capacity: self.stack.capacity(),
                    }
                    .to_string();
                }
                self.input.begin();
            }
            Command::Remove => match self.stack.pop() {
                Some(value) => self.status_message = format!("Popped {}", value),
                None => self.status_message = StackError::Empty.to_string(),
            },
            Command::HighlightMax => {
                self.highlight_max = !self.highlight_max;
                self.status_message = flag_message("Max", self.highlight_max);
            }
            Command::HighlightMin => {
                self.highlight_min = !self.highlight_min;
                self.status_message = flag_message("Min", self.highlight_min);
            }
        }
    }

    fn push(&mut self, value: i32) {
        match self.stack.push(value) {
            Ok(()) => self.status_message = format!("Pushed {}", value),
            Err(e) => self.status_message = e.to_string(),
        }
    }

    pub fn stack(&self) -> &BoundedStack {
        &self.stack
    }

    pub fn highlight_max(&self) -> bool {
        self.highlight_max
    }

    pub fn highlight_min(&self) -> bool {
        self.highlight_min
    }

    pub fn input(&self) -> &PendingInput {
        &self.input
    }

    pub fn is_entering(&self) -> bool {
        self.input.is_entering()
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }
}

fn flag_message(name: &str, on: bool) -> String {
    if on {
        format!("Highlighting {}", name)
    } else {
        format!("{} highlight off", name)
    }
}
