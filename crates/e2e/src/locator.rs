//! Element locators
//!
//! A locator is a value describing how to find an element, not a
//! handle to one: it is lowered to Playwright selector syntax at
//! action time, so a re-rendered page never invalidates it. Page
//! objects build locators through the strategy constructors and never
//! touch raw selector syntax.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Strategy {
    /// ARIA role with a case-insensitive accessible-name match.
    Role { role: &'static str, name: String },
    /// Visible text, case-insensitive substring.
    Text(String),
    /// Input placeholder attribute.
    Placeholder(String),
    /// Raw CSS, for elements with no accessible handle.
    Css(String),
    /// Element id.
    Id(String),
}

/// A lazily-resolved element query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    strategy: Strategy,
    /// Restrict to elements containing this text.
    has_text: Option<String>,
    /// Pick the n-th match instead of requiring uniqueness.
    nth: Option<usize>,
}

impl Locator {
    fn new(strategy: Strategy) -> Self {
        Self { strategy, has_text: None, nth: None }
    }

    pub fn role(role: &'static str, name: impl Into<String>) -> Self {
        Self::new(Strategy::Role { role, name: name.into() })
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Strategy::Text(text.into()))
    }

    pub fn placeholder(placeholder: impl Into<String>) -> Self {
        Self::new(Strategy::Placeholder(placeholder.into()))
    }

    pub fn css(selector: impl Into<String>) -> Self {
        Self::new(Strategy::Css(selector.into()))
    }

    pub fn id(id: impl Into<String>) -> Self {
        Self::new(Strategy::Id(id.into()))
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.has_text = Some(text.into());
        self
    }

    pub fn first(self) -> Self {
        self.nth(0)
    }

    pub fn nth(mut self, index: usize) -> Self {
        self.nth = Some(index);
        self
    }

    /// Lower to a Playwright selector string.
    pub fn to_selector(&self) -> String {
        let mut selector = match &self.strategy {
            Strategy::Role { role, name } => format!(r#"role={role}[name="{name}"i]"#),
            Strategy::Text(text) => format!(r#"text="{text}""#),
            Strategy::Placeholder(placeholder) => format!(r#"[placeholder="{placeholder}"]"#),
            Strategy::Css(css) => css.clone(),
            Strategy::Id(id) => format!("#{id}"),
        };
        if let Some(text) = &self.has_text {
            // CSS engine filter; only meaningful on css-based strategies.
            selector = format!(r#"{selector}:has-text("{text}")"#);
        }
        if let Some(index) = self.nth {
            selector = format!("{selector} >> nth={index}");
        }
        selector
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_selector())
    }
}
