//! CLI argument value types

mod metric_arg;
mod output_format;

#[cfg(test)]
mod tests;

pub use metric_arg::MetricArg;
pub use output_format::OutputFormat;
