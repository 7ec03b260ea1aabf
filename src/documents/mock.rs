use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::Document;
use crate::interrupt::Interrupt;
use crate::parse::Parse;

/// Text returned by every [`MockDocument::parse`]
pub const PLACEHOLDER: &str = "Mocked paerce";

/// Default simulated parse latency
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(200);

pub struct MockDocumentBuilder {
    latency: Duration,
    path: Option<String>,
    interrupt: Option<Arc<Interrupt>>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MockDocumentBuildError {
    #[error("document path must not be empty")]
    EmptyPath,
}

impl MockDocumentBuilder {
    /// Initialize a `MockDocumentBuilder`
    #[must_use]
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            path: None,
            interrupt: None,
        }
    }

    /// Specify how long each parse blocks for
    #[must_use]
    pub fn set_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Set the storage path reported by [`Document::path`]
    #[must_use]
    pub fn set_path<S: Into<String>>(mut self, path: S) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Share an existing [`Interrupt`] instead of creating a fresh one.
    ///
    /// One raise on a shared handle disrupts every document waiting on it.
    #[must_use]
    pub fn set_interrupt(mut self, interrupt: Arc<Interrupt>) -> Self {
        self.interrupt = Some(interrupt);
        self
    }

    pub fn build(self) -> Result<MockDocument, MockDocumentBuildError> {
        if self.path.as_deref().is_some_and(str::is_empty) {
            return Err(MockDocumentBuildError::EmptyPath);
        }

        Ok(MockDocument {
            path: self.path,
            latency: self.latency,
            interrupt: self.interrupt.unwrap_or_default(),
        })
    }
}

impl Default for MockDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Leaf document that pretends to parse
///
/// Each [`parse`](Document::parse) blocks the calling thread for the configured
/// latency and then hands back [`PLACEHOLDER`]. Raising the document's
/// [`Interrupt`] ends the wait early: the disruption is logged and returned as
/// [`Parse::Disrupted`], never propagated as a failure.
#[derive(Debug)]
pub struct MockDocument {
    path: Option<String>,
    latency: Duration,
    interrupt: Arc<Interrupt>,
}

impl MockDocument {
    /// A document with the default latency and no path
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: None,
            latency: DEFAULT_LATENCY,
            interrupt: Arc::default(),
        }
    }

    #[must_use]
    pub fn builder() -> MockDocumentBuilder {
        MockDocumentBuilder::new()
    }

    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Handle for disrupting this document's parses from elsewhere
    #[must_use]
    pub fn interrupt(&self) -> &Arc<Interrupt> {
        &self.interrupt
    }
}

impl Default for MockDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MockDocument {
    fn parse(&self) -> Parse {
        match self.interrupt.wait(self.latency) {
            Ok(()) => Parse::Completed(PLACEHOLDER.to_owned()),
            Err(cause) => {
                tracing::warn!(error = %cause, "mock parse disrupted, continuing");
                Parse::Disrupted {
                    text: PLACEHOLDER.to_owned(),
                    cause,
                }
            }
        }
    }

    fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}
