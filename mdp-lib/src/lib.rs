//! Core library for mdp: renders a Markdown file into a sanitized HTML page,
//! saves it to a temporary file and optionally previews it in a browser.

pub mod content;
pub mod error;
pub mod output;
pub mod preview;
pub mod template;

use crate::content::parse_content;
use crate::error::MdpError;
use crate::output::save_html;
use crate::preview::{preview, PREVIEW_DELAY};
use log::{debug, warn};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

/// Browser used when none is named.
pub const DEFAULT_BROWSER: &str = "firefox";

/// Everything a single preview run needs.
#[derive(Debug, Clone)]
pub struct Config {
    /// The Markdown file to render.
    pub input: PathBuf,
    /// Alternate page template; the built-in one is used when `None`.
    pub template: Option<PathBuf>,
    /// Leave the rendered file on disk instead of opening it.
    pub skip_preview: bool,
    /// Browser executable name, resolved on `$PATH`.
    pub browser: String,
    /// Wait after launching the browser before the rendered file is removed.
    pub delay: Duration,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            template: None,
            skip_preview: false,
            browser: DEFAULT_BROWSER.to_string(),
            delay: PREVIEW_DELAY,
        }
    }
}

/// Runs the whole pipeline and prints the rendered file's path to `out`.
///
/// Returns the path of the rendered file when it was kept, that is when
/// preview is skipped. Otherwise the file is removed before returning,
/// whether or not the preview succeeded.
pub fn run(config: &Config, out: &mut impl Write) -> Result<Option<PathBuf>, MdpError> {
    let input = fs::read(&config.input).map_err(|source| MdpError::ReadInput {
        path: config.input.clone(),
        source,
    })?;

    let file_name = config.input.display().to_string();
    let html = parse_content(&input, config.template.as_deref(), &file_name)?;
    let temp_path = save_html(&html)?;

    writeln!(out, "{}", temp_path.display()).map_err(MdpError::PrintPath)?;

    if config.skip_preview {
        let kept = temp_path.keep().map_err(|err| MdpError::KeepOutput {
            path: err.path.to_path_buf(),
            source: err.error,
        })?;
        debug!("Preview skipped, keeping {}", kept.display());
        return Ok(Some(kept));
    }

    let result = preview(&temp_path, &config.browser, config.delay);

    let path = temp_path.to_path_buf();
    if let Err(err) = temp_path.close() {
        warn!("Could not remove {}: {err}", path.display());
    }

    result.map(|()| None)
}
