//! Errors raised while reading, rendering, saving or previewing a Markdown page.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when any stage of the preview pipeline fails.
pub enum MdpError {
    #[error("No input file given. Use -f/--file to name the Markdown file to preview.")]
    MissingInput,

    #[error("Failed to access input file '{}'", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse template '{name}'")]
    TemplateParse {
        name: String,
        #[source]
        source: tera::Error,
    },

    #[error("Failed to execute template '{name}'")]
    TemplateRender {
        name: String,
        #[source]
        source: tera::Error,
    },

    #[error("Failed to create temporary file")]
    TempFile(#[source] io::Error),

    #[error("Failed to write HTML to '{}'", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to print the output file path")]
    PrintPath(#[source] io::Error),

    #[error("Failed to keep temporary file '{}'", path.display())]
    KeepOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to find browser '{browser}' during $PATH lookup")]
    BrowserNotFound {
        browser: String,
        #[source]
        source: which::Error,
    },

    #[error("Failed to launch browser '{}'", path.display())]
    BrowserLaunch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
