use std::fmt::Display;

/// Whether a like target is currently liked.
///
/// On the page this is one of two mutually exclusive classes on the target
/// element, see [`LikeState::class`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LikeState {
    Liked,
    NotLiked,
}

impl LikeState {
    pub const LIKED_CLASS: &'static str = "liked";
    pub const NOT_LIKED_CLASS: &'static str = "not-liked";

    pub fn class(self) -> &'static str {
        match self {
            Self::Liked => Self::LIKED_CLASS,
            Self::NotLiked => Self::NOT_LIKED_CLASS,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Liked => Self::NotLiked,
            Self::NotLiked => Self::Liked,
        }
    }

    /// Reads the state off a target.
    ///
    /// Only the `not-liked` marker is checked: anything that doesn't carry it,
    /// including a target that matched nothing, counts as liked.
    pub fn from_not_liked_marker(has_not_liked: bool) -> Self {
        if has_not_liked {
            Self::NotLiked
        } else {
            Self::Liked
        }
    }
}

impl Display for LikeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.class())
    }
}
