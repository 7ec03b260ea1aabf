/*!
Document parsing behind a single trait, with timing and caching layered on as
decorators.

A [`Document`] can `parse` itself and report the storage `path` it came from.
[`MockDocument`] is the only leaf: it blocks for a short, configurable latency
and returns a fixed placeholder. Decorators implement the same trait by
forwarding to an inner document:

- [`TimingDocument`] reports how long each parse took.
- [`CachingDocument`] runs the inner parse once and serves the stored result
  afterwards.

```rust
use docdeco::{CachingDocument, Document, MockDocument, PLACEHOLDER, TimingDocument};

let mock = MockDocument::new();

// prints `Time 0`
let timed = TimingDocument::new(&mock);
assert_eq!(timed.parse().text(), PLACEHOLDER);

// only the first call waits on the mock
let cached = CachingDocument::new(&mock);
assert_eq!(cached.parse(), cached.parse());
```

----

Chains can also be built with the [`DocumentExt`] adapters, innermost first:

```rust
use std::time::Duration;
use docdeco::{Document, DocumentExt, MockDocument};

let mock = MockDocument::builder()
    .set_latency(Duration::from_millis(10))
    .set_path("gs://bucket/report.pdf")
    .build()?;

let chain = mock.cached().timed();
assert_eq!(chain.path(), Some("gs://bucket/report.pdf"));
assert_eq!(chain.parse(), chain.parse());
# Ok::<(), docdeco::MockDocumentBuildError>(())
```

----

A parse never fails. If the mock's [`Interrupt`] is raised while it waits, the
wait ends early and the parse comes back as [`Parse::Disrupted`]. Callers that
care can turn that into an error with [`Parse::into_result`]:

```rust
use docdeco::{Disruption, Document, MockDocument};

let mock = MockDocument::new();
mock.interrupt().raise();

let parsed = mock.parse();
assert!(parsed.is_disrupted());
assert!(matches!(parsed.into_result(), Err(Disruption::Interrupted { .. })));
```
*/

#![cfg_attr(docsrs, feature(doc_cfg))]

use std::sync::Arc;

#[doc(inline)]
pub use documents::{
    CachingDocument, DEFAULT_LATENCY, MockDocument, MockDocumentBuildError, MockDocumentBuilder,
    PLACEHOLDER, Reporter, StdoutReporter, TimingDocument,
};
pub use interrupt::Interrupt;
pub use parse::{Disruption, Parse};

pub mod documents;
mod interrupt;
mod parse;

/// Something that can be parsed and located
pub trait Document {
    /// Parse the document
    ///
    /// There is no error channel: work that was cut short still yields text,
    /// marked as [`Parse::Disrupted`].
    fn parse(&self) -> Parse;

    /// The storage path of the document, if one was assigned
    fn path(&self) -> Option<&str>;
}

impl<D: Document + ?Sized> Document for &D {
    fn parse(&self) -> Parse {
        (**self).parse()
    }

    fn path(&self) -> Option<&str> {
        (**self).path()
    }
}

impl<D: Document + ?Sized> Document for Box<D> {
    fn parse(&self) -> Parse {
        (**self).parse()
    }

    fn path(&self) -> Option<&str> {
        (**self).path()
    }
}

impl<D: Document + ?Sized> Document for Arc<D> {
    fn parse(&self) -> Parse {
        (**self).parse()
    }

    fn path(&self) -> Option<&str> {
        (**self).path()
    }
}

/// Adapters for wrapping any [`Document`] in a decorator
pub trait DocumentExt: Document + Sized {
    /// Report the duration of every parse on stdout
    fn timed(self) -> TimingDocument<Self> {
        TimingDocument::new(self)
    }

    /// Report the duration of every parse to `reporter`
    fn timed_with<R: Reporter>(self, reporter: R) -> TimingDocument<Self, R> {
        TimingDocument::with_reporter(self, reporter)
    }

    /// Memoize the first parse
    fn cached(self) -> CachingDocument<Self> {
        CachingDocument::new(self)
    }
}

impl<D: Document> DocumentExt for D {}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use googletest::{
        assert_that,
        matchers::{eq, none, some},
    };

    use super::*;

    fn quick_mock() -> MockDocument {
        MockDocument::builder()
            .set_latency(Duration::from_millis(5))
            .set_path("gs://bucket/doc")
            .build()
            .unwrap()
    }

    #[googletest::test]
    fn smart_pointers_delegate() {
        let boxed: Box<dyn Document> = Box::new(quick_mock());
        assert_that!(boxed.parse().text(), eq(PLACEHOLDER));
        assert_that!(boxed.path(), some(eq("gs://bucket/doc")));

        let shared = Arc::new(MockDocument::new());
        let timed = Arc::clone(&shared).timed();
        assert_that!(timed.path(), none());
    }

    #[googletest::test]
    fn adapters_compose_into_a_chain() {
        let mock = quick_mock();
        let chain = (&mock).timed().cached().timed();

        assert_that!(chain.parse().text(), eq(PLACEHOLDER));
        assert_that!(chain.path(), some(eq("gs://bucket/doc")));
        assert_that!(chain.inner().is_primed(), eq(true));
    }

    #[googletest::test]
    fn timed_with_uses_the_given_reporter() {
        let reports = std::cell::Cell::new(0usize);
        let chain = quick_mock().cached().timed_with(|_: Duration| {
            reports.set(reports.get() + 1);
        });

        let _ = chain.parse();
        let _ = chain.parse();
        assert_that!(reports.get(), eq(2usize));
    }
}
