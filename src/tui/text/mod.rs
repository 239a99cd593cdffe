//! Text utilities: fragment styling and line wrapping for the page display.

mod spans;
mod wrap;

pub(crate) use spans::fragment_spans;
pub(crate) use wrap::{wrap_message, wrap_spans};
