//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (in [`models`]);
//! wrapper types here provide contextual formatting for collections,
//! operation results, and the exported requirements sheet. All formatters
//! produce markdown for rich terminal display.
//!
//! - [`collections`]: collection wrapper types (TaskSummaries)
//! - [`results`]: operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: status and confirmation messages (OperationStatus)
//! - [`sheet`]: export rendering of a finished worksheet
//! - [`datetime`]: date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod sheet;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::TaskSummaries;
pub use datetime::LocalDateTime;
pub use models::step_header;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use sheet::RequirementsSheet;
pub use status::OperationStatus;
