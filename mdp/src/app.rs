use crate::cli::Cli;
use clap::Parser;
use log::debug;
use mdp_lib::error::MdpError;
use mdp_lib::Config;
use std::io;

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let Cli {
        file,
        skip_preview,
        template,
        browser,
    } = Cli::parse();

    let input = file.ok_or(MdpError::MissingInput)?;

    let mut config = Config::new(input);
    config.template = template;
    config.skip_preview = skip_preview;
    config.browser = browser;
    debug!("Resolved configuration: {config:?}");

    let stdout = io::stdout();
    mdp_lib::run(&config, &mut stdout.lock())?;
    Ok(())
}
