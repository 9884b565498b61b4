/// Customer demographic aggregations (by state, by city)
pub mod demographics;

/// Calendar month buckets and validated month ranges
pub mod month;

/// Order trend aggregations over time
pub mod orders;

/// Payment method aggregations over time
pub mod payments;

/// Text rendering of aggregation output for terminal display
pub mod summary;
