//! Defines the command-line interface for the application.

use clap::Parser;
use mdp_lib::DEFAULT_BROWSER;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mdp",
    version,
    about = "Render a Markdown file to sanitized HTML and preview it in a browser."
)]
pub struct Cli {
    /// Markdown file to preview.
    // Optional here so a missing file is reported by mdp itself, with exit code 1.
    #[arg(short, long, value_name = "FILE_PATH")]
    pub file: Option<PathBuf>,

    /// Skip auto-preview and keep the generated HTML file.
    #[arg(short, long)]
    pub skip_preview: bool,

    /// Alternate template file. It receives `title` and `body` (use `{{ body | safe }}`).
    #[arg(short, long, value_name = "TEMPLATE_PATH")]
    pub template: Option<PathBuf>,

    /// Browser to preview in, looked up on $PATH.
    #[arg(short, long, value_name = "BROWSER", default_value = DEFAULT_BROWSER)]
    pub browser: String,
}
