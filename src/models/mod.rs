pub mod commit;
pub mod entry;
pub mod row;

pub use commit::{CommitRecord, LogRecord};
pub use entry::{Estimate, EstimatedEntry, FallbackReason};
pub use row::TabularRow;
