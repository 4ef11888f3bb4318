/// Core functionality modules
///
/// Contains the main business logic: knowing the package managers,
/// scanning history files, and driving a full extraction.

pub mod extractor;
pub mod managers;
pub mod package_set;
pub mod processor;

pub use extractor::{ExtractionReport, Extractor};
pub use managers::{match_prefix, resolve_available, PackageManager};
pub use package_set::PackageSet;
pub use processor::{open_history, HistoryFile, HistoryProcessor, ScanOutcome, ScanStats};
