//! Fetch padapatha pages, pull the Sanskrit fragments out of them, and
//! write the collected document.

pub mod driver;
pub mod extract;
pub mod fetch;
pub mod output;

pub use driver::{acquire_range, AcquireOptions, RunSummary};
pub use extract::Extractor;
pub use fetch::{build_client, fetch_page, FetchOutcome};
