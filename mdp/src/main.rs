//! `mdp`: render a Markdown file to a sanitized HTML page and open it in a browser.

mod app;
mod cli;

fn main() -> anyhow::Result<()> {
    app::run()
}
