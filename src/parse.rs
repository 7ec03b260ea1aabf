use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Why a parse finished without doing all of its work.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Disruption {
    #[error("simulated latency of {latency:?} interrupted after {elapsed:?}")]
    Interrupted { elapsed: Duration, latency: Duration },
}

/// Outcome of [`Document::parse`](crate::Document::parse)
///
/// A parse never fails outright. When the work is cut short the text is still
/// returned, tagged with the [`Disruption`] that interrupted it, and the caller
/// chooses whether that matters: [`Parse::text`] and the `Display` impl ignore
/// it, [`Parse::into_result`] turns it into an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parse {
    Completed(String),
    Disrupted { text: String, cause: Disruption },
}

impl Parse {
    /// The parsed text, regardless of how the parse ended
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Completed(text) | Self::Disrupted { text, .. } => text,
        }
    }

    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Completed(text) | Self::Disrupted { text, .. } => text,
        }
    }

    #[must_use]
    pub fn disruption(&self) -> Option<&Disruption> {
        match self {
            Self::Completed(_) => None,
            Self::Disrupted { cause, .. } => Some(cause),
        }
    }

    #[must_use]
    pub fn is_disrupted(&self) -> bool {
        self.disruption().is_some()
    }

    /// Treat a disrupted parse as a failure
    pub fn into_result(self) -> Result<String, Disruption> {
        match self {
            Self::Completed(text) => Ok(text),
            Self::Disrupted { cause, .. } => Err(cause),
        }
    }
}

impl fmt::Display for Parse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
