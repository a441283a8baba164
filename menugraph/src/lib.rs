pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{AuditSettings, handle_audit, init_logging, level_for_verbosity, write_report};

// Re-export the audit pipeline from menugraph-core
pub use menugraph_core::{MenuReport, execute_audit};
