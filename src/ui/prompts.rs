// UI prompts and user interaction module

use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Name shown in front of every reply
pub const ASSISTANT_NAME: &str = "Mac Assist";

/// Print `prompt` and read one line.
///
/// Returns `Ok(None)` at end of input.
pub fn read_line<R: BufRead>(prompt: &str, input: &mut R) -> io::Result<Option<String>> {
    print!("{}", prompt.white().bold());
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Print a reply from the assistant
pub fn reply(message: &str) {
    println!("{} {}\n", format!("{}:", ASSISTANT_NAME).cyan().bold(), message);
}

/// Display a warning message
pub fn warn(message: &str) {
    println!("{}", format!("⚠️  Warning: {}", message).yellow().bold());
}

/// Display a dimmed/secondary message
pub fn dimmed(message: &str) {
    println!("{}", message.dimmed());
}

/// Display a bold white message
pub fn bold(message: &str) {
    println!("{}", message.white().bold());
}
