mod caching;
mod mock;
mod timing;

pub use crate::documents::caching::CachingDocument;
pub use crate::documents::mock::{
    DEFAULT_LATENCY, MockDocument, MockDocumentBuildError, MockDocumentBuilder, PLACEHOLDER,
};
pub use crate::documents::timing::{Reporter, StdoutReporter, TimingDocument};
