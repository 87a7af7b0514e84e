// UI and formatting module

pub mod prompts;

// Re-export commonly used items for cleaner imports
pub use prompts::{bold, dimmed, read_line, reply, warn};
