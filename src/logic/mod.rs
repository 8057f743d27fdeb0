pub mod coverage;
pub mod report;
pub mod rules;

#[cfg(test)]
pub(crate) mod test_support;

pub use coverage::{CoverageProvider, HostReportedCoverage};
pub use report::DailyReport;
pub use rules::SprinklerEngine;
