//! The small subset of CSS selectors used to address like targets.
//!
//! A selector is a single compound selector: an optional tag name followed by
//! any number of `#id` and `.class` parts, e.g. `#msg-1`, `.likes` or
//! `button#msg-1.liked`. Combinators, attribute selectors and pseudo classes
//! are not supported.

use std::{fmt::Display, str::FromStr};

use crate::html::Element;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    tag: Option<String>,
    ids: Vec<String>,
    classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("selector is empty")]
    Empty,
    #[error("empty name after `{0}`")]
    EmptyName(char),
    #[error("unsupported character `{0}` in selector")]
    Unsupported(char),
}

impl Selector {
    pub fn id(id: impl ToString) -> Self {
        Self {
            ids: vec![id.to_string()],
            ..Default::default()
        }
    }

    pub fn class(class: impl ToString) -> Self {
        Self {
            classes: vec![class.to_string()],
            ..Default::default()
        }
    }

    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !tag.eq_ignore_ascii_case(element.name()) {
                return false;
            }
        }

        self.ids.iter().all(|id| element.id() == Some(id.as_str()))
            && self.classes.iter().all(|class| element.has_class(class))
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut selector = Selector::default();
        let mut chars = s.chars().peekable();

        // leading tag name
        let mut tag = String::new();
        while let Some(c) = chars.next_if(|c| is_name_char(*c)) {
            tag.push(c);
        }
        if !tag.is_empty() {
            selector.tag = Some(tag);
        }

        while let Some(prefix) = chars.next() {
            if prefix != '#' && prefix != '.' {
                return Err(SelectorError::Unsupported(prefix));
            }

            let mut name = String::new();
            while let Some(c) = chars.next_if(|c| is_name_char(*c)) {
                name.push(c);
            }
            if name.is_empty() {
                return Err(SelectorError::EmptyName(prefix));
            }

            if prefix == '#' {
                selector.ids.push(name);
            } else {
                selector.classes.push(name);
            }
        }

        Ok(selector)
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(tag) = &self.tag {
            f.write_str(tag)?;
        }
        for id in &self.ids {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }

        Ok(())
    }
}
