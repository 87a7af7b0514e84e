use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::assistant::{is_exit_command, Assistant};
use crate::platform::describe_host;
use crate::ui;

const PROMPT: &str = "You: ";

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = super::resolve_config(matches)?;
    let assistant = super::build_assistant(&config)?;

    ctrlc::set_handler(|| {
        println!();
        ui::reply("Session terminated.");
        std::process::exit(0);
    })
    .context("Failed to install Ctrl-C handler")?;

    print_banner(&assistant);

    let stdin = io::stdin();
    run_session(&assistant, &mut stdin.lock())
}

fn print_banner(assistant: &Assistant) {
    println!();
    ui::bold("=== Hello !! Ask me about my battery, disk and memory metrics ===");
    ui::dimmed(&format!(
        "Host: {} | monitoring {}",
        describe_host(),
        assistant.monitor().path().display()
    ));
    println!(
        "Type {} or {} to end the session.\n",
        "exit".yellow(),
        "quit".yellow()
    );
}

/// Answer questions from `input` until an exit command or end of input
pub fn run_session<R: BufRead>(assistant: &Assistant, input: &mut R) -> Result<()> {
    loop {
        let question = match ui::read_line(PROMPT, input).context("Failed to read input")? {
            Some(question) => question,
            None => {
                println!();
                ui::reply("Session terminated.");
                return Ok(());
            }
        };

        if question.is_empty() {
            continue;
        }

        if is_exit_command(&question) {
            println!();
            ui::reply("Goodbye!");
            return Ok(());
        }

        let answer = assistant.answer(&question);
        ui::reply(answer.text());
    }
}
