//! Interactive-element matching for hover detection.
//!
//! Input events carry whatever element the pointer is over, which is often a
//! span or icon nested inside the button that matters. Matching therefore
//! walks from the target up through its ancestors, the same way
//! `Element.closest` does.

use crate::core::constants::DEFAULT_INTERACTIVE_SELECTORS;

/// The minimal view of a page element that hover matching needs.
pub trait TargetNode: Sized {
    /// Case-insensitive tag name comparison.
    fn has_tag(&self, tag: &str) -> bool;
    fn has_class(&self, class: &str) -> bool;
    fn parent(&self) -> Option<Self>;
}

/// A simple selector: a tag name (`button`) or a class (`.btn`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Tag(String),
    Class(String),
}

impl Selector {
    /// Parse one selector. Anything beyond a bare tag or a single class
    /// (combinators, ids, attributes) is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let (class, name) = match raw.strip_prefix('.') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return None;
        }
        Some(if class {
            Selector::Class(name.to_string())
        } else {
            Selector::Tag(name.to_ascii_lowercase())
        })
    }

    /// Parse a comma-separated selector list, skipping (and logging) the
    /// entries that are not supported.
    pub fn parse_list(list: &str) -> Vec<Selector> {
        list.split(',')
            .filter(|s| !s.trim().is_empty())
            .filter_map(|s| {
                let parsed = Selector::parse(s);
                if parsed.is_none() {
                    log::warn!("[hover] ignoring unsupported selector {:?}", s.trim());
                }
                parsed
            })
            .collect()
    }

    pub fn defaults() -> Vec<Selector> {
        Selector::parse_list(DEFAULT_INTERACTIVE_SELECTORS)
    }

    pub fn matches<T: TargetNode>(&self, node: &T) -> bool {
        match self {
            Selector::Tag(tag) => node.has_tag(tag),
            Selector::Class(class) => node.has_class(class),
        }
    }
}

/// The nearest of `target` and its ancestors matching any selector.
pub fn closest<T: TargetNode + Clone>(target: &T, selectors: &[Selector]) -> Option<T> {
    let mut node = Some(target.clone());
    while let Some(current) = node {
        if selectors.iter().any(|s| s.matches(&current)) {
            return Some(current);
        }
        node = current.parent();
    }
    None
}

pub fn is_interactive<T: TargetNode + Clone>(target: &T, selectors: &[Selector]) -> bool {
    closest(target, selectors).is_some()
}
