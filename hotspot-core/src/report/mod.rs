mod build;
mod row;
mod template;
mod write;

#[cfg(test)]
mod tests;

pub use build::build_rows;
pub use row::ReportRow;
pub use template::{ReportTemplate, TABLE_PLACEHOLDER};
pub use write::{report_exists, report_path, write_report};
