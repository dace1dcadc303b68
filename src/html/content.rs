use super::element::Element;

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum Content {
    #[default]
    Empty,
    /// Already escaped HTML, rendered as is
    Raw(String),
    /// Plain text, escaped when rendering
    Text(String),
    Element(Box<Element>),
    List(Vec<Content>),
}

impl Content {
    /// Turns this Content into it's canonical form
    ///
    /// For example, a `Content::List` with an empty list will be transformed into a `Content::Empty`.
    pub(crate) fn optimize(&mut self) {
        match self {
            Content::Empty => {}
            Content::Raw(_) => {}
            Content::Text(_) => {}
            Content::Element(element) => element.optimize(),
            Content::List(list) => {
                for item in list.iter_mut() {
                    item.optimize();
                }

                Self::optimize_list(list);

                match list.len() {
                    0 => *self = Content::Empty,
                    // if there is a single element in the list, promote it
                    1 => *self = list.remove(0),
                    _ => {}
                }
            }
        }
    }

    fn optimize_list(list: &mut Vec<Content>) {
        // flatten nested lists, they've already been optimized
        let mut flat = Vec::with_capacity(list.len());
        for item in list.drain(..) {
            match item {
                Content::Empty => {}
                Content::List(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        *list = flat;

        // adjacent text contents should be merged
        let mut i = 0;
        while i + 1 < list.len() {
            if matches!(list[i], Content::Text(_) | Content::Raw(_))
                && matches!(list[i + 1], Content::Text(_) | Content::Raw(_))
            {
                let mut next = list.remove(i + 1);

                next.text_to_raw();
                list[i].text_to_raw();

                if let (Content::Raw(current), Content::Raw(next)) = (&mut list[i], next) {
                    current.push_str(&next);
                }

                continue;
            }

            i += 1;
        }
    }

    fn text_to_raw(&mut self) {
        if let Content::Text(string) = self {
            *self = Content::Raw(html_escape::encode_text(string).to_string());
        }
    }

    /// Appends the text content of this node and its descendants, like `textContent` does
    pub(crate) fn text(&self, output: &mut String) {
        match self {
            Content::Empty => {}
            Content::Raw(raw) => output.push_str(&html_escape::decode_html_entities(raw)),
            Content::Text(text) => output.push_str(text),
            Content::Element(element) => element.content.text(output),
            Content::List(list) => {
                for item in list {
                    item.text(output);
                }
            }
        }
    }

    pub(crate) fn for_each_element<'a>(&'a self, f: &mut impl FnMut(&'a Element)) {
        match self {
            Content::Element(element) => element.for_each(f),
            Content::List(list) => {
                for item in list {
                    item.for_each_element(f);
                }
            }
            Content::Empty | Content::Raw(_) | Content::Text(_) => {}
        }
    }

    pub(crate) fn for_each_element_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        match self {
            Content::Element(element) => element.for_each_mut(f),
            Content::List(list) => {
                for item in list {
                    item.for_each_element_mut(f);
                }
            }
            Content::Empty | Content::Raw(_) | Content::Text(_) => {}
        }
    }

    pub(crate) fn render(&self, output: &mut String) {
        match self {
            Content::Empty => {}
            Content::Raw(raw) => output.push_str(raw),
            Content::Text(escaped) => output.push_str(&html_escape::encode_text(escaped)),
            Content::Element(child) => child.render(output),
            Content::List(list) => {
                for content in list {
                    content.render(output);
                }
            }
        }
    }
}

impl From<()> for Content {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}
impl From<String> for Content {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
impl<'a> From<&'a str> for Content {
    fn from(value: &'a str) -> Self {
        Self::Text(value.to_string())
    }
}
impl From<Element> for Content {
    fn from(element: Element) -> Self {
        Self::Element(Box::new(element))
    }
}
impl From<Vec<Content>> for Content {
    fn from(value: Vec<Content>) -> Self {
        Self::List(value)
    }
}
