//! Converts Markdown source into a sanitized, templated HTML page.

use crate::error::MdpError;
use crate::template::{Content, PageTemplate};
use comrak::{markdown_to_html as render_commonmark, Options};
use log::debug;
use std::path::Path;

/// Prefix of every page title; the input file name follows it.
pub const TITLE_PREFIX: &str = "Markdown Preview | ";

/// Renders Markdown to an unsanitized HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    // Raw HTML is passed through here and filtered by `sanitize`.
    options.render.r#unsafe = true;

    render_commonmark(markdown, &options)
}

/// Strips everything outside ammonia's allow-list: `<script>` and `<style>`
/// elements with their content, event handler attributes, `javascript:` URLs
/// and so on.
pub fn sanitize(html: &str) -> String {
    ammonia::clean(html)
}

/// Builds the page title shown for `file_name`.
pub fn page_title(file_name: &str) -> String {
    format!("{TITLE_PREFIX}{file_name}")
}

/// Runs the content pipeline on raw Markdown bytes and returns the rendered page.
///
/// Invalid UTF-8 sequences are replaced rather than rejected. When `template`
/// is given it replaces the default page template; failing to load it fails
/// the whole operation.
pub fn parse_content(
    input: &[u8],
    template: Option<&Path>,
    file_name: &str,
) -> Result<Vec<u8>, MdpError> {
    let markdown = String::from_utf8_lossy(input);
    let html = markdown_to_html(&markdown);
    let body = sanitize(&html);
    debug!(
        "Rendered {} bytes of Markdown into {} bytes of sanitized HTML",
        input.len(),
        body.len()
    );

    let page = PageTemplate::load(template)?;
    debug!("Rendering page with template {}", page.name());
    let content = Content {
        title: page_title(file_name),
        body,
    };

    Ok(page.render(&content)?.into_bytes())
}
