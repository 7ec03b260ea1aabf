use std::time::Duration;

use instant::Instant;

use crate::Document;
use crate::parse::Parse;

/// Receives the elapsed time of every timed parse
pub trait Reporter {
    fn report(&self, elapsed: Duration);
}

impl<F> Reporter for F
where
    F: Fn(Duration),
{
    fn report(&self, elapsed: Duration) {
        self(elapsed);
    }
}

/// Prints `Time <whole seconds>` to stdout
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutReporter;

impl StdoutReporter {
    fn line(elapsed: Duration) -> String {
        format!("Time {}", elapsed.as_secs())
    }
}

impl Reporter for StdoutReporter {
    fn report(&self, elapsed: Duration) {
        println!("{}", Self::line(elapsed));
    }
}

/// Decorator measuring how long the inner [`Document::parse`] takes
///
/// The inner result is returned untouched and [`Document::path`] is forwarded
/// without reporting anything.
#[derive(Clone, Debug)]
pub struct TimingDocument<D, R = StdoutReporter> {
    document: D,
    reporter: R,
}

impl<D> TimingDocument<D> {
    pub fn new(document: D) -> Self {
        Self::with_reporter(document, StdoutReporter)
    }
}

impl<D, R> TimingDocument<D, R> {
    pub fn with_reporter(document: D, reporter: R) -> Self {
        Self { document, reporter }
    }

    pub fn inner(&self) -> &D {
        &self.document
    }

    pub fn into_inner(self) -> D {
        self.document
    }
}

impl<D, R> Document for TimingDocument<D, R>
where
    D: Document,
    R: Reporter,
{
    fn parse(&self) -> Parse {
        let start = Instant::now();
        let parsed = self.document.parse();
        let elapsed = start.elapsed();

        tracing::debug!(?elapsed, disrupted = parsed.is_disrupted(), "timed parse");
        self.reporter.report(elapsed);
        parsed
    }

    fn path(&self) -> Option<&str> {
        self.document.path()
    }
}
