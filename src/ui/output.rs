//! Output verbosity.

use std::str::FromStr;

use crate::config::schema;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also show ids and answer details.
    Verbose,
    /// Show progress and status.
    #[default]
    Normal,
    /// Show results and errors only.
    Quiet,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl From<schema::OutputMode> for OutputMode {
    fn from(mode: schema::OutputMode) -> Self {
        match mode {
            schema::OutputMode::Verbose => Self::Verbose,
            schema::OutputMode::Normal => Self::Normal,
            schema::OutputMode::Quiet => Self::Quiet,
        }
    }
}

impl OutputMode {
    /// Whether status lines (headers, progress, successes) are shown.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Whether spinners are drawn.
    pub fn shows_spinners(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Whether record details are shown.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
