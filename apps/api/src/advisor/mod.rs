// Chat advisor: rule-based Response Matcher, canned replies and the
// append-only chat session.

pub mod handlers;
pub mod replies;
pub mod rules;
pub mod session;

pub use session::{ChatService, ReplyDelay};
