use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::{
    html::{Element, DOCTYPE_HTML},
    patch::Patch,
    selector::Selector,
};

/// The server side copy of a page.
///
/// Elements are addressed with selectors, the same way the page's scripts
/// address them. Mutations apply to every matching element and are published
/// as [`Patch`]es to everyone who [subscribed](Document::subscribe).
pub struct Document {
    root: Element,
    subscribers: Vec<UnboundedSender<Patch>>,
}

impl Document {
    pub fn new(mut root: Element) -> Self {
        root.optimize();

        Self {
            root,
            subscribers: Vec::new(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Receiver for every change made to this document from now on
    pub fn subscribe(&mut self) -> UnboundedReceiver<Patch> {
        let (tx, rx) = unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// All elements matching `selector`, in document order.
    ///
    /// A selector that can't be parsed matches nothing.
    pub fn query(&self, selector: &str) -> Vec<&Element> {
        let Some(selector) = parse_selector(selector) else {
            return vec![];
        };

        let mut found = vec![];
        self.root.for_each(&mut |el| {
            if selector.matches(el) {
                found.push(el);
            }
        });
        found
    }

    /// Combined text of all the matching elements
    pub fn text(&self, selector: &str) -> String {
        self.query(selector)
            .into_iter()
            .map(Element::text)
            .collect()
    }

    /// True if any of the matching elements has `class`
    pub fn has_class(&self, selector: &str, class: &str) -> bool {
        self.query(selector).iter().any(|el| el.has_class(class))
    }

    pub fn set_text(&mut self, selector: &str, text: impl ToString) {
        let text = text.to_string();

        self.for_each_match_mut(selector, |el| el.set_text(text.clone()));

        self.publish(Patch::Text {
            selector: selector.to_string(),
            text,
        });
    }

    pub fn swap_class(&mut self, selector: &str, remove: &str, add: &str) {
        self.for_each_match_mut(selector, |el| {
            let attributes = el.attributes_mut();
            attributes.remove_class(remove);
            attributes.add_class(add);
        });

        self.publish(Patch::SwapClass {
            selector: selector.to_string(),
            remove: remove.to_string(),
            add: add.to_string(),
        });
    }

    /// Renders the document as HTML.
    ///
    /// Documents rooted at an `<html>` element get a doctype.
    pub fn render(&self) -> String {
        let mut output = String::new();

        if self.root.name() == "html" {
            output.push_str(DOCTYPE_HTML);
        }
        self.root.render(&mut output);

        output
    }

    fn for_each_match_mut(&mut self, selector: &str, mut f: impl FnMut(&mut Element)) {
        let Some(selector) = parse_selector(selector) else {
            return;
        };

        self.root.for_each_mut(&mut |el| {
            if selector.matches(el) {
                f(el);
            }
        });
    }

    fn publish(&mut self, patch: Patch) {
        // drop subscribers that went away
        self.subscribers.retain(|tx| tx.send(patch.clone()).is_ok());
    }
}

impl From<Element> for Document {
    fn from(root: Element) -> Self {
        Self::new(root)
    }
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match selector.parse() {
        Ok(selector) => Some(selector),
        Err(error) => {
            tracing::warn!(selector, %error, "unsupported selector, matching nothing");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::html::{button, div, span};

    use super::*;

    fn document() -> Document {
        Document::new(div(
            vec![
                span("5", crate::attrs!("class" => "likes")).into(),
                button("", crate::attrs!("id" => "msg-1", "class" => "not-liked")).into(),
                button("", crate::attrs!("id" => "msg-2", "class" => "liked")).into(),
            ],
            Default::default(),
        ))
    }

    #[test]
    fn test_query() {
        let doc = document();

        assert_eq!(1, doc.query("#msg-1").len());
        assert_eq!(2, doc.query("button").len());
        assert!(doc.query("#msg-3").is_empty());
        assert!(doc.query("div > span").is_empty());
    }

    #[test]
    fn test_text_and_classes() {
        let doc = document();

        assert_eq!("5", doc.text(".likes"));
        assert_eq!("", doc.text(".missing"));
        assert!(doc.has_class("#msg-1", "not-liked"));
        assert!(doc.has_class("button", "liked"));
        assert!(!doc.has_class("#msg-1", "liked"));
    }

    #[test]
    fn test_mutations_publish_patches() {
        let mut doc = document();
        let mut rx = doc.subscribe();

        doc.set_text(".likes", 6);
        doc.swap_class("#msg-1", "not-liked", "liked");

        assert_eq!(
            "<div><span class=\"likes\">6</span><button class=\"liked\" id=\"msg-1\"></button><button class=\"liked\" id=\"msg-2\"></button></div>",
            doc.render()
        );

        assert_eq!(
            Ok(Patch::Text {
                selector: ".likes".to_string(),
                text: "6".to_string()
            }),
            rx.try_recv()
        );
        assert_eq!(
            Ok(Patch::SwapClass {
                selector: "#msg-1".to_string(),
                remove: "not-liked".to_string(),
                add: "liked".to_string(),
            }),
            rx.try_recv()
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_no_match_is_a_no_op() {
        let mut doc = document();
        let before = doc.render();

        doc.swap_class("#msg-9", "liked", "not-liked");
        doc.set_text("[bad", "1");

        assert_eq!(before, doc.render());
    }

    #[test]
    fn test_dropped_subscribers_are_forgotten() {
        let mut doc = document();
        drop(doc.subscribe());

        doc.set_text(".likes", 1);

        assert!(doc.subscribers.is_empty());
    }
}
