use crate::{counter::LikeCount, marker::LikeState};

/// What the page shows for a like target: its marker and the page counter.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct LikeView {
    pub state: LikeState,
    pub count: LikeCount,
}

impl LikeView {
    pub fn new(state: LikeState, count: impl Into<LikeCount>) -> Self {
        Self {
            state,
            count: count.into(),
        }
    }
}

/// Flips the marker and moves the counter along with it.
pub fn toggle(view: LikeView) -> LikeView {
    let count = match view.state {
        LikeState::NotLiked => view.count.incremented(),
        LikeState::Liked => view.count.decremented(),
    };

    LikeView {
        state: view.state.opposite(),
        count,
    }
}
