use anyhow::{bail, Context};
use colored::Colorize;
use regform_core::RegformConfig;
use std::path::Path;

use crate::output::OutputFormat;
use crate::ConfigCommands;

pub fn handle(
    action: ConfigCommands,
    path: Option<&Path>,
    settings: &RegformConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Init => {
            let Some(path) = path else {
                bail!("no configuration directory on this platform; pass --config");
            };
            if path.exists() {
                bail!("{} already exists", path.display());
            }
            crate::config::init(path)?;
            println!("{} {}", "Created".green().bold(), path.display());
        }
        ConfigCommands::Show => {
            if format.is_table() {
                print!("{}", toml::to_string_pretty(settings).context("encoding configuration")?);
            } else {
                format.print_value(settings)?;
            }
        }
        ConfigCommands::Path => match path {
            Some(path) => println!("{}", path.display()),
            None => bail!("no configuration directory on this platform"),
        },
    }
    Ok(())
}
