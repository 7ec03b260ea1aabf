use moka::sync::Cache;

use crate::Document;
use crate::parse::Parse;

/// Decorator memoizing the first [`Document::parse`] of the inner document
///
/// Holds a single slot for the lifetime of the decorator: the first parse is
/// stored, disrupted or not, and every later parse is served from it without
/// touching the inner document. Nothing is ever evicted or invalidated.
/// [`Document::path`] is always forwarded.
#[derive(Debug)]
pub struct CachingDocument<D> {
    document: D,
    slot: Cache<(), Parse>,
}

impl<D> CachingDocument<D> {
    pub fn new(document: D) -> Self {
        Self {
            document,
            slot: Cache::builder().initial_capacity(1).build(),
        }
    }

    /// Whether a parse result has been stored yet
    #[must_use]
    pub fn is_primed(&self) -> bool {
        self.slot.contains_key(&())
    }

    pub fn inner(&self) -> &D {
        &self.document
    }

    pub fn into_inner(self) -> D {
        self.document
    }
}

impl<D> Document for CachingDocument<D>
where
    D: Document,
{
    fn parse(&self) -> Parse {
        if let Some(parsed) = self.slot.get(&()) {
            tracing::trace!("parse served from cache");
            return parsed;
        }

        // `get_with` runs the init closure once even if several callers race here
        self.slot.get_with((), || {
            tracing::trace!("parse not cached, delegating");
            self.document.parse()
        })
    }

    fn path(&self) -> Option<&str> {
        self.document.path()
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod test_CachingDocument {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use googletest::{
        assert_that,
        matchers::{eq, none, some},
    };

    use super::*;
    use crate::documents::{MockDocument, PLACEHOLDER};
    use crate::parse::Disruption;

    #[derive(Default)]
    struct Counting {
        calls: AtomicUsize,
    }

    impl Counting {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Document for Counting {
        fn parse(&self) -> Parse {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            Parse::Completed(format!("call {call}"))
        }

        fn path(&self) -> Option<&str> {
            Some("counted")
        }
    }

    #[googletest::test]
    fn inner_parse_runs_once() {
        let counting = Counting::default();
        let cached = CachingDocument::new(&counting);

        assert_that!(cached.is_primed(), eq(false));
        for _ in 0..5 {
            assert_that!(cached.parse().text(), eq("call 0"));
        }
        assert_that!(cached.is_primed(), eq(true));
        assert_that!(counting.calls(), eq(1usize));
    }

    #[googletest::test]
    fn path_is_not_cached() {
        let counting = Counting::default();
        let cached = CachingDocument::new(&counting);
        assert_that!(cached.path(), some(eq("counted")));
        assert_that!(cached.is_primed(), eq(false));
        assert_that!(counting.calls(), eq(0usize));

        let mock = MockDocument::new();
        assert_that!(CachingDocument::new(&mock).path(), none());
    }

    #[googletest::test]
    fn separate_decorators_keep_separate_slots() {
        let counting = Counting::default();
        let first = CachingDocument::new(&counting);
        let second = CachingDocument::new(&counting);

        assert_that!(first.parse().text(), eq("call 0"));
        assert_that!(second.parse().text(), eq("call 1"));
        assert_that!(first.parse().text(), eq("call 0"));
        assert_that!(counting.calls(), eq(2usize));
    }

    #[googletest::test]
    fn disrupted_parse_is_cached_as_is() {
        let mock = MockDocument::builder()
            .set_latency(Duration::from_secs(30))
            .build()
            .unwrap();
        mock.interrupt().raise();
        let cached = CachingDocument::new(&mock);

        let first = cached.parse();
        assert_that!(first.text(), eq(PLACEHOLDER));
        assert!(matches!(
            first.disruption(),
            Some(Disruption::Interrupted { .. })
        ));
        assert_eq!(cached.parse(), first);
    }

    #[googletest::test]
    fn into_inner_gives_back_the_document() {
        let cached = CachingDocument::new(Counting::default());
        let _ = cached.parse();
        assert_that!(cached.inner().calls(), eq(1usize));
        assert_that!(cached.into_inner().calls(), eq(1usize));
    }
}
