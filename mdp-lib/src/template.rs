//! HTML page templates wrapping the rendered Markdown body.

use crate::error::MdpError;
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tera::{Context, Tera};

/// The page template used when no alternate template is given.
///
/// `title` is auto-escaped; `body` is already sanitized HTML and is emitted
/// through the `safe` filter.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <title>{{ title }}</title>
  </head>
  <body>
{{ body | safe }}
  </body>
</html>
"#;

// Every template is added from raw source under this `.html` name, so Tera
// escapes `title` whatever extension the user's template file has.
const PAGE: &str = "page.html";

/// Values substituted into a page template.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub title: String,
    /// Sanitized HTML fragment.
    pub body: String,
}

/// A parsed page template, ready to render [`Content`].
pub struct PageTemplate {
    name: String,
    tera: Tera,
}

impl PageTemplate {
    /// Parses the embedded [`DEFAULT_TEMPLATE`].
    pub fn default_page() -> Result<Self, MdpError> {
        Self::from_source("mdp", DEFAULT_TEMPLATE)
    }

    /// Parses a template from raw source. `name` identifies it in logs and errors.
    pub fn from_source(name: &str, source: &str) -> Result<Self, MdpError> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE, source)
            .map_err(|source| MdpError::TemplateParse {
                name: name.to_string(),
                source,
            })?;

        Ok(Self {
            name: name.to_string(),
            tera,
        })
    }

    /// Reads and parses a template file. A missing or unreadable file is
    /// reported as a parse failure, like a syntax error would be.
    pub fn from_file(path: &Path) -> Result<Self, MdpError> {
        debug!("Loading template from {}", path.display());
        let name = path.display().to_string();

        // Read here rather than through `Tera::add_template_file`, which would
        // pick auto-escaping from the file's own extension.
        let source = fs::read_to_string(path).map_err(|err| MdpError::TemplateParse {
            name: name.clone(),
            source: tera::Error::chain(format!("Couldn't read template '{name}'"), err),
        })?;

        Self::from_source(&name, &source)
    }

    /// Loads `path` when given, the default template otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, MdpError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::default_page(),
        }
    }

    /// Name used in log lines and errors: the file path, or `mdp` for the default.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self, content: &Content) -> Result<String, MdpError> {
        let render_error = |source| MdpError::TemplateRender {
            name: self.name.clone(),
            source,
        };

        let context = Context::from_serialize(content).map_err(render_error)?;
        self.tera.render(PAGE, &context).map_err(render_error)
    }
}
