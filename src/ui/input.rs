//! Numeric text entry for the "add" command
//!
//! [`PendingInput`] collects digits and minus signs typed after the add
//! button was pressed. Nothing reaches the stack until [`PendingInput::commit`].

/// Longest text the entry box accepts
pub const MAX_INPUT_LEN: usize = 15;

/// In-progress numeric entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingInput {
    text: String,
    is_entering: bool,
}

impl PendingInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter entry mode. Text typed earlier in the same entry is kept.
    pub fn begin(&mut self) {
        self.is_entering = true;
    }

    /// Append a digit or `-`. Returns false if the character was rejected.
    pub fn push_char(&mut self, c: char) -> bool {
        if !is_entry_char(c) || self.text.len() >= MAX_INPUT_LEN {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Drop the last typed character
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Parse the typed text and leave entry mode.
    ///
    /// Empty, malformed or out-of-range text yields `0`.
    pub fn commit(&mut self) -> i32 {
        let value = self.text.parse::<i32>().unwrap_or(0);
        self.cancel();
        value
    }

    /// Leave entry mode without producing a value
    pub fn cancel(&mut self) {
        self.text.clear();
        self.is_entering = false;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_entering(&self) -> bool {
        self.is_entering
    }
}

fn is_entry_char(c: char) -> bool {
    c.is_ascii_digit() || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> PendingInput {
        let mut input = PendingInput::new();
        input.begin();
        for c in text.chars() {
            input.push_char(c);
        }
        input
    }

    #[test]
    fn test_commit_negative() {
        let mut input = typed("-12");
        assert_eq!(input.commit(), -12);
        assert!(!input.is_entering());
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_commit_defaults_to_zero() {
        assert_eq!(PendingInput::new().commit(), 0);
        assert_eq!(typed("1-2").commit(), 0);
        assert_eq!(typed("--").commit(), 0);
        assert_eq!(typed("99999999999").commit(), 0);
    }

    #[test]
    fn test_rejects_non_numeric() {
        let mut input = typed("");
        assert!(!input.push_char('a'));
        assert!(!input.push_char(' '));
        assert!(input.push_char('7'));
        assert_eq!(input.text(), "7");
    }

    #[test]
    fn test_length_bound() {
        let input = typed("12345678901234567890");
        assert_eq!(input.text().len(), MAX_INPUT_LEN);
        assert_eq!(input.text(), "123456789012345");
    }

    #[test]
    fn test_backspace() {
        let mut input = typed("42");
        input.backspace();
        assert_eq!(input.text(), "4");
        input.backspace();
        input.backspace();
        assert_eq!(input.text(), "");
        assert!(input.is_entering());
    }

    #[test]
    fn test_cancel() {
        let mut input = typed("5");
        input.cancel();
        assert!(!input.is_entering());
        assert_eq!(input.text(), "");
    }
}
