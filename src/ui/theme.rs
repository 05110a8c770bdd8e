//! Visual theme and styling.

use console::Style;

/// Quizdeck's visual theme.
#[derive(Debug, Clone)]
pub struct QuizTheme {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub header: Style,
    pub dim: Style,
    pub highlight: Style,
    /// Correct answers in listings.
    pub correct: Style,
}

impl Default for QuizTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizTheme {
    /// Colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            correct: Style::new().green().bold(),
        }
    }

    /// Theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            correct: Style::new(),
        }
    }

    /// Pick colored or plain based on the environment.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("○ {}", msg)))
    }

    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check whether colors should be used.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}
