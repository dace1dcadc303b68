use super::{Attributes, Content, VOID_ELEMENTS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) content: Content,
    pub(crate) attributes: Attributes,
}

impl Element {
    pub(crate) fn optimize(&mut self) {
        self.content.optimize();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> Option<&str> {
        self.attributes.get("id").map(|a| a.as_str())
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attributes.has_class(class)
    }

    /// Text content of this element and all of it's descendants
    pub fn text(&self) -> String {
        let mut output = String::new();
        self.content.text(&mut output);
        output
    }

    /// Replaces all the children of this element with a single text node
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    /// Visits this element and every descendant, in document order
    pub(crate) fn for_each<'a>(&'a self, f: &mut impl FnMut(&'a Element)) {
        f(self);
        self.content.for_each_element(f);
    }

    pub(crate) fn for_each_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        f(self);
        self.content.for_each_element_mut(f);
    }

    pub(crate) fn render(&self, output: &mut String) {
        output.push('<');
        output.push_str(&self.name);

        if !self.attributes.is_empty() {
            output.push(' ');
            self.attributes.render(output);
        }

        // void elements cannot have a closing tag
        if VOID_ELEMENTS.contains(&self.name.as_str()) {
            output.push_str(" />");
            return;
        }

        output.push('>');

        self.content.render(output);

        output.push_str("</");
        output.push_str(&self.name);
        output.push('>');
    }
}
