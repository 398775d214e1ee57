//! Metric intake and query models.

mod histogram;
mod intake_type;
mod metadata;
mod scalar;
mod series;

pub use histogram::HistogramBucket;
pub use intake_type::MetricIntakeType;
pub use metadata::{MetricMetadata, MetricOrigin};
pub use scalar::{DataColumn, DataColumnType, GroupColumn, GroupColumnType, ScalarColumn};
pub use series::{MetricPoint, MetricResource, MetricSeries};
