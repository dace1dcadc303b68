use std::{fmt::Display, str::FromStr};

/// A like button on the page and the message it likes.
///
/// Written as `"<selector>,<message id>"`, which is how pages bind the
/// handler, e.g. `doLike('#msg-1,1')`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct LikeTarget {
    pub selector: String,
    pub message_id: String,
}

impl LikeTarget {
    pub const SEPARATOR: char = ',';

    pub fn new(selector: impl ToString, message_id: impl ToString) -> Self {
        Self {
            selector: selector.to_string(),
            message_id: message_id.to_string(),
        }
    }

    /// Splits the handler argument.
    ///
    /// Pieces past the second are ignored and a missing message id is empty,
    /// so this never fails.
    pub fn parse(args: &str) -> Self {
        let mut it = args.split(Self::SEPARATOR);

        Self {
            selector: it.next().unwrap_or_default().to_string(),
            message_id: it.next().unwrap_or_default().to_string(),
        }
    }
}

impl FromStr for LikeTarget {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Display for LikeTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.selector, Self::SEPARATOR, self.message_id)
    }
}
