use crate::error::{RespStatError, UserFriendlyError};
use console::{style, Emoji, Term};

// Emojis with text fallbacks
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");

/// Human-facing messages on stderr. Stdout is reserved for record output.
pub struct Diagnostics {
    use_colors: bool,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            use_colors: Term::stderr().features().colors_supported(),
        }
    }

    #[cfg(test)]
    pub(crate) fn plain() -> Self {
        Self { use_colors: false }
    }

    /// Prints the error, the usage synopsis for usage-family errors, and a suggestion if any.
    pub fn print_user_friendly_error(&self, error: &RespStatError, usage: Option<&str>) {
        for line in self.render_error(error, usage) {
            eprintln!("{}", line);
        }
    }

    pub fn render_error(&self, error: &RespStatError, usage: Option<&str>) -> Vec<String> {
        let mut lines = vec![self.format_error(&error.user_message())];

        if error.is_usage() {
            if let Some(usage) = usage {
                lines.push(String::new());
                lines.push(usage.trim_end().to_string());
            }
        }

        if let Some(suggestion) = error.suggestion() {
            lines.push(String::new());
            lines.push(self.format_suggestion(&suggestion));
        }

        lines
    }

    fn format_error(&self, message: &str) -> String {
        if self.use_colors {
            format!("{}{}", CROSS, style(message).red().bold())
        } else {
            format!("Error: {}", message)
        }
    }

    fn format_suggestion(&self, suggestion: &str) -> String {
        if self.use_colors {
            format!("{}{}", INFO, style(format!("Suggestion: {}", suggestion)).cyan())
        } else {
            format!("Suggestion: {}", suggestion)
        }
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}
