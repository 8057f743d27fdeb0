pub mod engine;
pub mod fertilization;
pub mod irrigation;
pub mod pet_bowl;

pub use engine::SprinklerEngine;

use super::coverage::CoverageProvider;
use super::report::DailyReport;
use crate::config::Config;
use crate::models::Location;

/// Which locations a rule visits during the daily pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Only the top-level locations the host lists.
    TopLevel,
    /// Top-level locations plus the interiors of structures on outdoor ones.
    WithInteriors,
}

impl RuleScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleScope::TopLevel => "top-level locations",
            RuleScope::WithInteriors => "top-level locations and interiors",
        }
    }
}

/// Trait for sprinkler rules applied to one location at a time
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Where the rule runs today, or `None` if the config switches it off
    fn scope(&self, config: &Config) -> Option<RuleScope>;

    /// Apply the rule to a single location
    fn apply(
        &self,
        location: &mut Location,
        coverage: &dyn CoverageProvider,
        report: &mut DailyReport,
    );
}
