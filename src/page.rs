use crate::{
    counter::LikeCount,
    document::Document,
    handler::LikeToggleHandler,
    html::{body, button, div, head, html, li, p, span, title, ul, Content, Element},
    marker::LikeState,
    target::LikeTarget,
};

/// A message as shown in a likes list
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MessageSummary {
    pub id: String,
    pub text: String,
    pub liked: bool,
}

impl MessageSummary {
    pub fn new(id: impl ToString, text: impl ToString, liked: bool) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            liked,
        }
    }

    /// Id of the like button element for this message
    pub fn element_id(&self) -> String {
        format!("msg-{}", self.id)
    }

    pub fn target(&self) -> LikeTarget {
        LikeTarget::new(format!("#{}", self.element_id()), &self.id)
    }

    pub fn state(&self) -> LikeState {
        if self.liked {
            LikeState::Liked
        } else {
            LikeState::NotLiked
        }
    }
}

/// A page listing messages, each with a like button, and the page's like count.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct LikesPage {
    pub title: String,
    pub count: i64,
    pub messages: Vec<MessageSummary>,
}

impl LikesPage {
    /// Name of the page script function the buttons call
    pub const ON_CLICK: &'static str = "doLike";

    /// Page counting how many of `messages` are liked
    pub fn new(title: impl ToString, messages: Vec<MessageSummary>) -> Self {
        let count = messages.iter().filter(|m| m.liked).count() as i64;

        Self {
            title: title.to_string(),
            count,
            messages,
        }
    }

    /// The like count and message list, without the surrounding document
    pub fn content(&self) -> Element {
        let counter = p(
            vec![
                span(
                    LikeCount::from(self.count).to_string(),
                    crate::attrs!("class" => class_name(LikeToggleHandler::COUNTER_SELECTOR)),
                )
                .into(),
                Content::Text(" likes".to_string()),
            ],
            Default::default(),
        );

        let items = self
            .messages
            .iter()
            .map(|message| {
                let onclick = format!(
                    "{}('{}')",
                    Self::ON_CLICK,
                    html_escape::encode_script_single_quoted_text(&message.target().to_string())
                );

                Content::from(li(
                    vec![
                        p(message.text.as_str(), Default::default()).into(),
                        button(
                            "like",
                            crate::attrs!(
                                "id" => message.element_id(),
                                "class" => message.state().class(),
                                "onclick" => onclick,
                            ),
                        )
                        .into(),
                    ],
                    Default::default(),
                ))
            })
            .collect::<Vec<Content>>();

        div(
            vec![counter.into(), ul(items, Default::default()).into()],
            crate::attrs!("class" => "likes-page"),
        )
    }

    /// The full page
    pub fn render(&self) -> Element {
        html(
            vec![
                head(title(self.title.as_str(), Default::default()), Default::default()).into(),
                body(self.content(), Default::default()).into(),
            ],
            Default::default(),
        )
    }

    pub fn into_document(self) -> Document {
        Document::new(self.render())
    }
}

fn class_name(selector: &str) -> &str {
    selector.trim_start_matches('.')
}
