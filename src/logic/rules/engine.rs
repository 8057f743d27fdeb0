use super::{irrigation::PotIrrigationRule, pet_bowl::PetBowlRule, Rule, RuleScope};
use crate::config::Config;
use crate::logic::coverage::CoverageProvider;
use crate::logic::report::DailyReport;
use crate::models::Location;

pub struct SprinklerEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl SprinklerEngine {
    pub fn new() -> Self {
        // Pots (and interiors) before bowls, per location.
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(PotIrrigationRule), Box::new(PetBowlRule)];

        Self { rules }
    }

    /// Run the start-of-day pass over every top-level location.
    ///
    /// `config` is the snapshot taken when the day started; nothing the pass
    /// does feeds back into it. With `enable_mod` off no location is touched.
    pub fn run_daily_pass(
        &self,
        locations: &mut [Location],
        config: Config,
        coverage: &dyn CoverageProvider,
    ) -> DailyReport {
        if !config.enable_mod {
            tracing::info!("EnableMod is off - skipping sprinkler pass");
            return DailyReport::skipped();
        }

        let mut report = DailyReport::new();

        for location in locations.iter_mut() {
            report.locations_visited += 1;

            for rule in &self.rules {
                let Some(scope) = rule.scope(&config) else {
                    continue;
                };

                tracing::trace!(rule = rule.id(), location = %location.name, "Applying rule");
                rule.apply(location, coverage, &mut report);

                if scope == RuleScope::WithInteriors && location.outdoors {
                    for interior in location.indoor_locations_mut() {
                        report.locations_visited += 1;
                        tracing::trace!(rule = rule.id(), location = %interior.name, "Applying rule indoors");
                        rule.apply(interior, coverage, &mut report);
                    }
                }
            }
        }

        tracing::info!("{}", report.summary());
        report
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }

    /// Each rule with where it would run under `config`.
    pub fn plan(&self, config: &Config) -> Vec<(&'static str, Option<RuleScope>)> {
        if !config.enable_mod {
            return self.rules.iter().map(|r| (r.name(), None)).collect();
        }
        self.rules
            .iter()
            .map(|r| (r.name(), r.scope(config)))
            .collect()
    }
}

impl Default for SprinklerEngine {
    fn default() -> Self {
        Self::new()
    }
}
