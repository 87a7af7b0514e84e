use anyhow::Result;
use clap::ArgMatches;

use crate::core::MetricKind;

/// Print raw reports without involving a language model
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = super::resolve_config(matches)?;
    let monitor = super::build_monitor(&config)?;

    let kinds: Vec<String> = match matches.get_many::<String>("kinds") {
        Some(values) => values.cloned().collect(),
        None => MetricKind::ALL.iter().map(|k| k.to_string()).collect(),
    };

    for kind in &kinds {
        println!("{}", monitor.get_report(kind));
    }

    Ok(())
}
