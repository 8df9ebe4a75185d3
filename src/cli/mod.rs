//! .

pub mod args;
mod error;
pub mod models;
mod render;
pub(crate) mod resolve;

pub use args::{OptionValue, ParsedCommand, parse};
pub use error::{RequestError, RequestResult};
pub use models::{Font, Format, Invocation, RenderRequest, Theme};
pub use render::{EXIT_FAILURE, EXIT_SUCCESS, render, report};
pub use resolve::usage;
