use std::fmt::Write;

/// A change made to a [`Document`](crate::document::Document).
///
/// Patches are what a live page needs to apply to stay in sync with the
/// server side document, either as JSON or as a script.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum Patch {
    /// Text content of every element matching `selector` was replaced
    Text { selector: String, text: String },
    /// Class `remove` was taken off and `add` put on every element matching `selector`
    SwapClass {
        selector: String,
        remove: String,
        add: String,
    },
}

impl Patch {
    pub fn selector(&self) -> &str {
        match self {
            Patch::Text { selector, .. } => selector,
            Patch::SwapClass { selector, .. } => selector,
        }
    }

    /// The patch as it's sent to live pages
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// JS that applies this patch to a browser document
    pub fn script(&self) -> String {
        let mut output = String::new();
        self.write_script(&mut output);
        output
    }

    pub(crate) fn write_script(&self, output: &mut String) {
        // writing into a String can't fail
        let _ = write!(
            output,
            "document.querySelectorAll('{}').forEach(el => {{ ",
            quote(self.selector())
        );

        let _ = match self {
            Patch::Text { text, .. } => write!(output, "el.textContent = '{}';", quote(text)),
            Patch::SwapClass { remove, add, .. } => write!(
                output,
                "el.classList.remove('{}'); el.classList.add('{}');",
                quote(remove),
                quote(add)
            ),
        };

        output.push_str(" });");

        #[cfg(debug_assertions)]
        output.push('\n');
    }
}

/// Script that applies all the patches in order
pub fn script<'a>(patches: impl IntoIterator<Item = &'a Patch>) -> String {
    let mut output = String::new();
    for patch in patches {
        patch.write_script(&mut output);
    }
    output
}

fn quote(text: &str) -> std::borrow::Cow<'_, str> {
    html_escape::encode_script_single_quoted_text(text)
}
