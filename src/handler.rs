use std::sync::Arc;

use tracing::debug;

use crate::{
    config::Config,
    counter::LikeCount,
    document::Document,
    error::Result,
    marker::LikeState,
    notify::{Dispatch, HttpNotifier, LikeNotifier},
    target::LikeTarget,
    transition::{toggle, LikeView},
};

/// Toggles like buttons on a [`Document`] and reports each toggle to the server.
#[derive(Clone)]
pub struct LikeToggleHandler {
    notifier: Arc<dyn LikeNotifier>,
}

impl LikeToggleHandler {
    /// Selector of the element(s) displaying the page's like count
    pub const COUNTER_SELECTOR: &'static str = ".likes";

    pub fn new(notifier: impl LikeNotifier) -> Self {
        Self {
            notifier: Arc::new(notifier),
        }
    }

    /// Handler reporting to the endpoint described by `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(HttpNotifier::new(config)?))
    }

    /// Toggles the target described by `args`, `"<selector>,<message id>"`.
    ///
    /// See [`LikeToggleHandler::handle_target`].
    pub fn handle(&self, document: &mut Document, args: &str) -> Dispatch {
        self.handle_target(document, &LikeTarget::parse(args))
    }

    /// Flips the target's marker, moves the counter with it, and sends the
    /// notification in the background.
    ///
    /// The document is updated before the request goes out and is left as is
    /// whatever the request's outcome. The returned [`Dispatch`] can be
    /// dropped.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn handle_target(&self, document: &mut Document, target: &LikeTarget) -> Dispatch {
        let before = read_view(document, &target.selector);
        let after = toggle(before);

        document.set_text(Self::COUNTER_SELECTOR, after.count);
        document.swap_class(&target.selector, before.state.class(), after.state.class());

        debug!(
            selector = %target.selector,
            message_id = %target.message_id,
            state = %after.state,
            count = %after.count,
            "toggled like"
        );

        Dispatch::spawn(
            &target.message_id,
            self.notifier.notify(&target.message_id),
        )
    }
}

/// Reads the current marker of `selector` and the page counter
pub fn read_view(document: &Document, selector: &str) -> LikeView {
    let has_not_liked = document.has_class(selector, LikeState::NOT_LIKED_CLASS);

    LikeView {
        state: LikeState::from_not_liked_marker(has_not_liked),
        count: LikeCount::parse(&document.text(LikeToggleHandler::COUNTER_SELECTOR)),
    }
}
