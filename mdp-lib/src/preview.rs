//! Opens a rendered page in a browser.

use crate::error::MdpError;
use log::info;
use std::path::Path;
use std::process::Command;
use std::thread;
use std::time::Duration;

/// How long to wait after launching the browser before the file may be removed.
pub const PREVIEW_DELAY: Duration = Duration::from_secs(2);

/// Launches `browser`, looked up on `$PATH`, with `file` as its only argument.
///
/// The browser process is not waited on. This returns after `delay`, which
/// gives the browser time to open the file before the caller deletes it.
pub fn preview(file: &Path, browser: &str, delay: Duration) -> Result<(), MdpError> {
    let browser_path = which::which(browser).map_err(|source| MdpError::BrowserNotFound {
        browser: browser.to_string(),
        source,
    })?;

    info!(
        "Opening {} with {}",
        file.display(),
        browser_path.display()
    );

    Command::new(&browser_path)
        .arg(file)
        .spawn()
        .map_err(|source| MdpError::BrowserLaunch {
            path: browser_path.clone(),
            source,
        })?;

    thread::sleep(delay);
    Ok(())
}
