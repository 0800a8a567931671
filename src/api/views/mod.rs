//! HTML views
//!
//! Everything interpolated into markup goes through [`html_escape`].

mod escape;
mod pages;
mod status;

pub use escape::html_escape;
pub use pages::{render_error_page, render_redirect_page};
pub use status::{StatusKind, StatusMessage};
