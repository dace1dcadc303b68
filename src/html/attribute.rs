#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    /// Attribute without a value, like `disabled`
    #[default]
    Empty,
    Text(String),
}

impl Attribute {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Text(text) => text,
        }
    }

    pub(crate) fn render(&self, output: &mut String) {
        match self {
            Self::Empty => {}
            Self::Text(text) => {
                output.push_str(&html_escape::encode_double_quoted_attribute(text))
            }
        }
    }
}

impl From<String> for Attribute {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
impl<'a> From<&'a str> for Attribute {
    fn from(value: &'a str) -> Self {
        Self::Text(value.to_string())
    }
}
impl From<()> for Attribute {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}
