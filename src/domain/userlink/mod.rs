//! User link resolution
//!
//! Turns a username from a list page link into either a redirect to the
//! account page of the matching directory entry or an error outcome.

mod resolver;
mod target;

pub use resolver::{UserLinkOutcome, UserLinkResolver};
pub use target::RedirectTarget;
