//! Open Graph image previews from the command line.

pub mod app;
pub mod cli;
pub mod error;
pub mod logging;
pub mod plugin;
pub mod preview;
