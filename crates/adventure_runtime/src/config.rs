//! Front-end configuration.

/// Prompt shown before each command.
pub const DEFAULT_PROMPT: &str = "▶ ";

/// Settings for the interactive shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Prompt shown before each command.
    pub prompt: String,
    /// Whether to print the logo and welcome line on startup.
    pub show_banner: bool,
    /// Whether to emit ANSI colors.
    pub color: bool,
    /// Maximum number of history entries kept by the line editor.
    pub history_size: usize,
    /// Explicit `tracing` filter directive. `None` defers to `RUST_LOG`.
    pub log_filter: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_banner: true,
            color: true,
            history_size: 1000,
            log_filter: None,
        }
    }
}

impl ReplConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// No banner, no colors. Suited to piped input and transcripts.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            show_banner: false,
            color: false,
            ..Self::default()
        }
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to enable/disable the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to enable/disable ANSI colors.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Builder method to set history size.
    #[must_use]
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// Builder method to set the log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }
}
