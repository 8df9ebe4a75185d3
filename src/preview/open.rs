//! .

use std::{io, path::Path, process::Stdio};
use tokio::process::Command;

/// Hand `path` to the platform's default viewer and wait for the launcher.
pub async fn open_path(path: &Path) -> io::Result<()> {
    let mut cmd = launcher(path);
    let status = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await?;

    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("launcher exited with {status}")))
    }
}

#[cfg(target_os = "macos")]
fn launcher(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(windows)]
fn launcher(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    // The empty argument is the window title `start` expects first.
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", windows)))]
fn launcher(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}
