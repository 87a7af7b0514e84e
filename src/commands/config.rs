use crate::core::config::CONFIG_KEYS;
use crate::core::Config;
use anyhow::{Context, Result};
use colored::Colorize;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("show", _)) => show(),
        Some(("set", sub_matches)) => set(sub_matches),
        Some(("reset", _)) => reset(),
        Some(("path", _)) => {
            println!("{}", Config::get_config_path()?.display());
            Ok(())
        }
        _ => {
            println!("Use 'mac-assist config --help' for more information.");
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".white().bold());
    for key in CONFIG_KEYS {
        let value = config.get(key).unwrap_or_default();
        println!("  {:<22} {}", key.cyan(), value);
    }
    println!(
        "{}",
        format!("  (file: {})", Config::get_config_path()?.display()).dimmed()
    );

    Ok(())
}

fn set(matches: &clap::ArgMatches) -> Result<()> {
    let key = matches
        .get_one::<String>("key")
        .context("Key argument is required")?;
    let value = matches
        .get_one::<String>("value")
        .context("Value argument is required")?;

    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    println!(
        "{} {} = {}",
        "✓".green().bold(),
        key.cyan(),
        config.get(key).unwrap_or_default()
    );

    if key == "disk_path" && !std::path::Path::new(value).exists() {
        println!(
            "{}",
            format!("⚠️  Warning: Path '{}' does not exist", value).yellow()
        );
        println!(
            "{}",
            "Disk reports will say the usage could not be retrieved until it does.".dimmed()
        );
    }

    Ok(())
}

fn reset() -> Result<()> {
    let mut config = Config::load()?;
    config.reset_to_defaults();
    config.save()?;

    println!("{}", "✓ Configuration reset to defaults".green().bold());
    Ok(())
}
