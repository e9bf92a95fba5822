mod dedup;
mod report_builder;

pub use dedup::unique_in_order;
pub use report_builder::ReportBuilder;
