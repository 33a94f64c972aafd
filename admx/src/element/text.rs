//! Text and multi-line text elements

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::DEFAULT_MAX_LENGTH;

/// Single-line text element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextElement {
    required: bool,
    max_length: u32,
    expandable: bool,
    soft: bool,
}

impl TextElement {
    pub const fn new() -> Self {
        Self {
            required: false,
            max_length: DEFAULT_MAX_LENGTH,
            expandable: false,
            soft: false,
        }
    }

    pub const fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub const fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    pub const fn with_expandable(mut self, expandable: bool) -> Self {
        self.expandable = expandable;
        self
    }

    pub const fn with_soft(mut self, soft: bool) -> Self {
        self.soft = soft;
        self
    }

    pub const fn required(&self) -> bool {
        self.required
    }

    /// Maximum length in characters
    pub const fn max_length(&self) -> u32 {
        self.max_length
    }

    /// Value is written as REG_EXPAND_SZ
    pub const fn expandable(&self) -> bool {
        self.expandable
    }

    pub const fn soft(&self) -> bool {
        self.soft
    }

    /// Check a value against the length limit
    pub fn accepts(&self, value: &str) -> bool {
        value.chars().count() <= self.max_length as usize
    }
}

impl Default for TextElement {
    fn default() -> Self {
        Self::new()
    }
}

/// Multi-line text element (REG_MULTI_SZ)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiTextElement {
    required: bool,
    max_length: u32,
    max_strings: u32,
    soft: bool,
}

impl MultiTextElement {
    pub const fn new() -> Self {
        Self {
            required: false,
            max_length: DEFAULT_MAX_LENGTH,
            max_strings: 0,
            soft: false,
        }
    }

    pub const fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub const fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    pub const fn with_max_strings(mut self, max_strings: u32) -> Self {
        self.max_strings = max_strings;
        self
    }

    pub const fn with_soft(mut self, soft: bool) -> Self {
        self.soft = soft;
        self
    }

    pub const fn required(&self) -> bool {
        self.required
    }

    pub const fn max_length(&self) -> u32 {
        self.max_length
    }

    /// Maximum number of strings, 0 for no limit
    pub const fn max_strings(&self) -> u32 {
        self.max_strings
    }

    pub const fn soft(&self) -> bool {
        self.soft
    }

    /// Check a set of lines against the string count and length limits
    pub fn accepts<S: AsRef<str>>(&self, lines: &[S]) -> bool {
        if self.max_strings != 0 && lines.len() > self.max_strings as usize {
            return false;
        }
        lines
            .iter()
            .all(|line| line.as_ref().chars().count() <= self.max_length as usize)
    }
}

impl Default for MultiTextElement {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_length() {
        assert_eq!(TextElement::new().max_length(), 1023);
        assert_eq!(MultiTextElement::new().max_length(), 1023);
        assert_eq!(MultiTextElement::new().max_strings(), 0);
    }

    #[test]
    fn test_text_length_limit() {
        let text = TextElement::new().with_max_length(3).with_expandable(true);
        assert!(text.accepts("abc"));
        assert!(!text.accepts("abcd"));
        assert!(text.expandable());
    }

    #[test]
    fn test_multi_text_limits() {
        let multi = MultiTextElement::new().with_max_strings(2).with_max_length(4);
        assert!(multi.accepts(&["a", "bcde"]));
        assert!(!multi.accepts(&["a", "b", "c"]));
        assert!(!multi.accepts(&["abcde"]));

        let unlimited = MultiTextElement::new();
        let many = vec!["x"; 100];
        assert!(unlimited.accepts(&many));
    }
}
