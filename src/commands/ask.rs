use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::assistant::Answer;
use crate::ui;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let question = matches
        .get_many::<String>("question")
        .context("Question argument is required")?
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    let config = super::resolve_config(matches)?;
    let assistant = super::build_assistant(&config)?;

    match assistant.answer(&question) {
        Answer::Composed { reports, reply } => {
            if matches.get_flag("show-reports") {
                ui::dimmed(&reports);
            }
            ui::reply(&reply);
        }
        other => ui::reply(other.text()),
    }

    Ok(())
}
