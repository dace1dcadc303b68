//! Like buttons for server rendered pages.
//!
//! A page is kept server side as a [`Document`]. Calling
//! [`LikeToggleHandler::handle`] with a `"<selector>,<message id>"` argument
//! flips the target between `liked` and `not-liked`, moves the `.likes`
//! counter along with it, and reports the toggle to the server's `/do_like`
//! endpoint in the background. The changes made to the document are
//! published as [`Patch`]es that a live page can apply.
//!
//! ```no_run
//! use likes::{Config, LikeToggleHandler, LikesPage, MessageSummary};
//!
//! # async fn run() -> likes::Result<()> {
//! let handler = LikeToggleHandler::from_config(&Config::from_env()?)?;
//!
//! let mut document = LikesPage::new(
//!     "Liked warbles",
//!     vec![MessageSummary::new(1, "hello", false)],
//! )
//! .into_document();
//!
//! handler.handle(&mut document, "#msg-1,1");
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate serde;

pub mod config;
pub mod counter;
pub mod document;
pub mod error;
pub mod handler;
pub mod html;
pub mod marker;
pub mod notify;
pub mod page;
pub mod patch;
pub mod selector;
pub mod target;
pub mod transition;

pub use config::Config;
pub use counter::LikeCount;
pub use document::Document;
pub use error::{Error, Result};
pub use handler::LikeToggleHandler;
pub use marker::LikeState;
pub use notify::{Dispatch, HttpNotifier, LikeNotifier, Outcome};
pub use page::{LikesPage, MessageSummary};
pub use patch::Patch;
pub use target::LikeTarget;
pub use transition::{toggle, LikeView};
