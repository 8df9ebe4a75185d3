//! .

use og_preview::{app, cli, logging, preview::Previewer};

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    let tokens: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let previewer = Previewer::detect();
    let result = app::run(&tokens[..], &previewer).await;

    cli::render(result)
}
