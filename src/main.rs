use docdeco::{CachingDocument, Document, MockDocument, TimingDocument};

pub fn main() {
    // stdout is reserved for the demo output
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let mock = MockDocument::new();

    let timed = TimingDocument::new(&mock);
    println!("{}", timed.parse());

    let cached = CachingDocument::new(&mock);
    println!("{}", cached.parse());
}
