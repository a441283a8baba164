pub mod audit;
pub mod detect;
pub mod graph;
pub mod report;

pub use audit::{AuditOptions, execute_audit, fetch_all_pages, pages_needed};
pub use detect::{ClassificationResult, Validity, classify};
pub use graph::{MenuGraph, assemble};
pub use report::{MenuEntry, MenuReport, report};
