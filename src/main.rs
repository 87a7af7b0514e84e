use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use mac_assist::commands;
use mac_assist::core::config::CONFIG_KEYS;

fn cli() -> Command {
    Command::new("mac-assist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Ask natural-language questions about your disk, memory and battery")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("path")
                .long("path")
                .value_name("PATH")
                .help("Filesystem path whose disk usage is reported (default: /)")
                .global(true),
        )
        .arg(
            Arg::new("ollama-url")
                .long("ollama-url")
                .value_name("URL")
                .help("Base URL of the Ollama server")
                .global(true),
        )
        .arg(
            Arg::new("classifier-model")
                .long("classifier-model")
                .value_name("MODEL")
                .help("Model used to understand questions")
                .global(true),
        )
        .arg(
            Arg::new("composer-model")
                .long("composer-model")
                .value_name("MODEL")
                .help("Model used to phrase answers")
                .global(true),
        )
        .subcommand(Command::new("chat").about("Interactive question and answer session (default)"))
        .subcommand(
            Command::new("ask")
                .about("Answer a single question and exit")
                .arg(
                    Arg::new("question")
                        .help("The question to answer")
                        .required(true)
                        .num_args(1..),
                )
                .arg(
                    Arg::new("show-reports")
                        .long("show-reports")
                        .help("Also print the raw reports the answer is based on")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Print raw metric reports without a language model")
                .arg(
                    Arg::new("kinds")
                        .help("Metrics to report: disk, battery, memory (default: all)")
                        .num_args(1..),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Manage configuration (use 'mac-assist config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("show").about("Show current configuration"))
                .subcommand(
                    Command::new("set")
                        .about("Set a configuration value")
                        .arg(
                            Arg::new("key")
                                .help("Configuration key")
                                .required(true)
                                .value_parser(CONFIG_KEYS)
                                .index(1),
                        )
                        .arg(
                            Arg::new("value")
                                .help("New value")
                                .required(true)
                                .index(2),
                        ),
                )
                .subcommand(Command::new("reset").about("Restore default configuration"))
                .subcommand(Command::new("path").about("Print the configuration file location")),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    mac_assist::init_logging(matches.get_flag("verbose"));

    if matches.get_flag("version") {
        return commands::version();
    }

    match matches.subcommand() {
        Some(("chat", sub_matches)) => commands::chat(sub_matches),
        Some(("ask", sub_matches)) => commands::ask(sub_matches),
        Some(("report", sub_matches)) => commands::report(sub_matches),
        Some(("config", sub_matches)) => commands::config::execute(sub_matches),
        Some(("version", _)) => commands::version(),
        _ => commands::chat(&matches),
    }
}
