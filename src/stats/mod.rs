//! Per-category statistics: the record type and the aggregation fold.

mod aggregate;
mod record;

pub use aggregate::aggregate;
pub use record::StatsRecord;
