//! Colored output helpers for CLI
//!
//! Provides consistent, colored terminal output for the support console.
//! Chat lines are built as strings so the session loop can write them to
//! any writer; status lines print straight to the terminal.

use owo_colors::OwoColorize;

/// Label printed before each reply
pub const SUPPORT_LABEL: &str = "Acme Co Support:";

/// Label printed before each user prompt
pub const USER_LABEL: &str = "User:";

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the session banner
    pub fn banner(&self, model: &str) {
        if self.colored {
            println!(
                "\n   {} {}",
                "Acme Co Customer Support".bright_cyan().bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
            );
            println!("   {} {}", "model:".dimmed(), model.bright_white());
        } else {
            println!(
                "\n   Acme Co Customer Support v{}\n   model: {}",
                env!("CARGO_PKG_VERSION"),
                model
            );
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print a hint/tip message
    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("  {}", message.dimmed().italic());
        } else {
            println!("  [TIP] {}", message);
        }
    }

    /// Prompt shown while waiting for user input
    pub fn user_prompt(&self) -> String {
        if self.colored {
            format!("\n{} ", USER_LABEL.bright_white().bold())
        } else {
            format!("\n{} ", USER_LABEL)
        }
    }

    /// A reply line
    pub fn reply(&self, reply: &str) -> String {
        if self.colored {
            format!("\n{} {}", SUPPORT_LABEL.bright_cyan().bold(), reply)
        } else {
            format!("\n{} {}", SUPPORT_LABEL, reply)
        }
    }

    /// Notice that the model used a tool
    pub fn tool_notice(&self, tool: &str) -> String {
        if self.colored {
            format!("  {} {}", "⚙".dimmed(), format!("using the {} tool", tool).dimmed())
        } else {
            format!("  [TOOL] using the {} tool", tool)
        }
    }

    /// A turn that failed without ending the session
    pub fn failure(&self, message: &str) -> String {
        if self.colored {
            format!("\n{} {}", "✗".red().bold(), message.red())
        } else {
            format!("\n[ERROR] {}", message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_new() {
        let output = Output::new();
        assert!(output.colored);
    }

    #[test]
    fn test_output_no_color() {
        let output = Output::no_color();
        assert!(!output.colored);
    }

    #[test]
    fn test_output_default() {
        let output = Output::default();
        assert!(output.colored);
    }

    #[test]
    fn test_plain_chat_lines() {
        let output = Output::no_color();
        assert_eq!(output.user_prompt(), "\nUser: ");
        assert_eq!(output.reply("Hi there"), "\nAcme Co Support: Hi there");
        assert_eq!(output.tool_notice("get_user"), "  [TOOL] using the get_user tool");
        assert_eq!(output.failure("boom"), "\n[ERROR] boom");
    }

    #[test]
    fn test_colored_reply_keeps_text() {
        let output = Output::new();
        let line = output.reply("Your order shipped.");
        assert!(line.contains("Your order shipped."));
        assert!(line.contains("Acme Co Support"));
    }

    #[test]
    fn test_output_methods_no_panic() {
        // Smoke test - ensure none of the printing methods panic
        for output in [Output::no_color(), Output::new()] {
            output.banner("claude-3-5-sonnet-20241022");
            output.info("test info");
            output.error("test error");
            output.hint("hint message");
        }
    }
}
