//! The document styling surface: class tokens on a single root element.

use std::fmt;

/// An ordered set of class tokens the theme provider writes to.
///
/// The provider only ever touches the `light` and `dark` tokens.
pub trait StyleRoot {
    /// Adds `token` if not already present.
    fn add(&mut self, token: &str);

    /// Removes `token` if present.
    fn remove(&mut self, token: &str);

    fn contains(&self, token: &str) -> bool;

    /// Current tokens in insertion order.
    fn tokens(&self) -> Vec<String>;
}

/// In-memory class list, mirroring an element's `classList`.
///
/// # Example
///
/// ```rust
/// use popup_theme::{ClassList, StyleRoot};
///
/// let mut root = ClassList::from_tokens(["popup", "dark"]);
/// root.remove("dark");
/// root.add("light");
/// assert_eq!(root.to_string(), "popup light");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for token in tokens {
            list.add(token.as_ref());
        }
        list
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl StyleRoot for ClassList {
    fn add(&mut self, token: &str) {
        if !self.contains(token) {
            self.tokens.push(token.to_string());
        }
    }

    fn remove(&mut self, token: &str) {
        self.tokens.retain(|t| t != token);
    }

    fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    fn tokens(&self) -> Vec<String> {
        self.tokens.clone()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_set_like() {
        let mut list = ClassList::new();
        list.add("dark");
        list.add("dark");
        assert_eq!(list.tokens(), vec!["dark"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut list = ClassList::from_tokens(["popup"]);
        list.remove("light");
        assert_eq!(list.tokens(), vec!["popup"]);
    }

    #[test]
    fn test_order_preserved() {
        let mut list = ClassList::from_tokens(["a", "b"]);
        list.add("c");
        list.remove("a");
        list.add("a");
        assert_eq!(list.to_string(), "b c a");
    }
}
