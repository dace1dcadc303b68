use std::collections::HashMap;

use super::Attribute;

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Attributes {
    attributes: HashMap<String, Attribute>,
}

impl Attributes {
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn insert(&mut self, key: impl ToString, attribute: impl Into<Attribute>) {
        let key = key.to_string();

        // HTML doesn't allow repeated attribute keys.
        // Browsers take the first one and ignore all the rest, so we'll throw an error.
        // https://stackoverflow.com/a/43859478
        debug_assert!(
            !self.attributes.contains_key(&key),
            "trying to override attribute {}",
            key
        );

        self.attributes.insert(key, attribute.into());
    }

    pub fn get(&self, key: &str) -> Option<&Attribute> {
        self.attributes.get(key)
    }

    /// Iterator over the whitespace separated entries of the `class` attribute
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get("class")
            .map(Attribute::as_str)
            .unwrap_or_default()
            .split_ascii_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }

        let mut list = self.classes().collect::<Vec<_>>();
        list.push(class);
        let value = list.join(" ");

        self.attributes.insert("class".to_string(), Attribute::Text(value));
    }

    /// Removes every occurrence of `class`.
    ///
    /// The attribute is kept even if it ends up empty, same as the browser does.
    pub fn remove_class(&mut self, class: &str) {
        if !self.has_class(class) {
            return;
        }

        let value = self
            .classes()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");

        self.attributes.insert("class".to_string(), Attribute::Text(value));
    }

    pub(crate) fn render(&self, output: &mut String) {
        // sorted so the output is stable
        let mut list = Vec::from_iter(self.attributes.iter());
        list.sort_by_key(|a| a.0);

        for (i, (key, attr)) in list.iter().enumerate() {
            if i != 0 {
                output.push(' ');
            }

            output.push_str(key);

            if matches!(attr, Attribute::Empty) {
                continue;
            }

            output.push_str("=\"");
            attr.render(output);
            output.push('"');
        }
    }
}
