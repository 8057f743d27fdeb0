use super::fertilization::try_fertilize;
use super::{Rule, RuleScope};
use crate::config::Config;
use crate::logic::coverage::CoverageProvider;
use crate::logic::report::DailyReport;
use crate::models::{Location, PlacedObject};

/// Pot irrigation rule
///
/// Every pot sitting on a tile a sprinkler covers gets watered, whatever its
/// current state. Each watering is followed by an Enricher feed attempt with
/// the sprinkler that did the watering.
///
/// Empty tiles and non-pot occupants are skipped. A pot under several
/// sprinklers is watered once per sprinkler; only the first feed can land.
pub struct PotIrrigationRule;

impl Rule for PotIrrigationRule {
    fn id(&self) -> &'static str {
        "pot_irrigation"
    }

    fn name(&self) -> &'static str {
        "Garden Pot Irrigation"
    }

    fn scope(&self, config: &Config) -> Option<RuleScope> {
        if config.water_indoors {
            Some(RuleScope::WithInteriors)
        } else {
            Some(RuleScope::TopLevel)
        }
    }

    fn apply(
        &self,
        location: &mut Location,
        coverage: &dyn CoverageProvider,
        report: &mut DailyReport,
    ) {
        for origin in location.sprinkler_tiles() {
            // Lift the sprinkler out so its Enricher and the pots can be borrowed together.
            let mut sprinkler = match location.objects.remove(&origin) {
                Some(PlacedObject::Sprinkler(sprinkler)) => sprinkler,
                Some(other) => {
                    location.objects.insert(origin, other);
                    continue;
                }
                None => continue,
            };
            report.sprinklers_evaluated += 1;

            for tile in coverage.coverage_tiles(origin, &sprinkler) {
                let Some(pot) = location
                    .objects
                    .get_mut(&tile)
                    .and_then(PlacedObject::as_pot_mut)
                else {
                    continue;
                };

                pot.water();
                report.pot_waterings += 1;
                tracing::debug!(location = %location.name, %tile, "Watered pot");

                if let Some(item_id) = try_fertilize(pot, &mut sprinkler) {
                    report.record_fertilizer(&item_id);
                }
            }

            location
                .objects
                .insert(origin, PlacedObject::Sprinkler(sprinkler));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::test_support::*;
    use crate::models::{Attachment, ItemStack, Pot, Sprinkler, Tile};

    fn run(location: &mut Location) -> DailyReport {
        let mut report = DailyReport::new();
        PotIrrigationRule.apply(location, &cardinal_coverage, &mut report);
        report
    }

    #[test]
    fn enricher_scenario_waters_and_feeds() {
        let mut farm = Location::new("Farm", true)
            .with_object((5, 5), enriched_sprinkler(vec![ItemStack::new("(O)368", 3)]))
            .with_object((5, 6), pot());

        let report = run(&mut farm);

        let pot = farm.pot_at((5, 6)).unwrap();
        assert!(pot.soil.watered);
        assert_eq!(pot.soil.fertilizer.as_deref(), Some("(O)368"));
        assert_eq!(enricher_stack(&farm, (5, 5)), Some(2));
        assert_eq!(report.pot_waterings, 1);
        assert_eq!(report.pots_fertilized, 1);
    }

    #[test]
    fn empty_enricher_still_waters() {
        let mut farm = Location::new("Farm", true)
            .with_object((5, 5), enriched_sprinkler(Vec::new()))
            .with_object((5, 6), pot());

        run(&mut farm);

        let pot = farm.pot_at((5, 6)).unwrap();
        assert!(pot.soil.watered);
        assert!(pot.soil.fertilizer.is_none());
    }

    #[test]
    fn uncovered_pots_are_untouched() {
        let mut farm = Location::new("Farm", true)
            .with_object((5, 5), enriched_sprinkler(vec![ItemStack::new("(O)368", 3)]))
            .with_object((6, 6), pot())
            .with_object((5, 7), pot());

        let report = run(&mut farm);

        assert_eq!(farm.pot_at((6, 6)), Some(&Pot::default()));
        assert_eq!(farm.pot_at((5, 7)), Some(&Pot::default()));
        assert_eq!(enricher_stack(&farm, (5, 5)), Some(3));
        assert_eq!(report.pot_waterings, 0);
    }

    #[test]
    fn already_watered_pot_is_watered_again() {
        let mut watered = Pot::default();
        watered.soil.watered = true;
        let mut farm = Location::new("Farm", true)
            .with_object((5, 5), plain_sprinkler())
            .with_object((4, 5), PlacedObject::Pot(watered));

        let report = run(&mut farm);

        assert!(farm.pot_at((4, 5)).unwrap().soil.watered);
        assert_eq!(report.pot_waterings, 1);
    }

    #[test]
    fn non_pot_occupants_are_skipped() {
        let mut farm = Location::new("Farm", true)
            .with_object((5, 5), plain_sprinkler())
            .with_object((5, 6), PlacedObject::Other { name: "Chest".into() })
            .with_object((6, 5), plain_sprinkler());

        let report = run(&mut farm);

        assert_eq!(report.pot_waterings, 0);
        assert_eq!(report.sprinklers_evaluated, 2);
        assert!(farm.objects.get(&Tile::new(5, 6)).is_some());
        assert!(farm.objects.get(&Tile::new(6, 5)).unwrap().is_sprinkler());
    }

    #[test]
    fn pot_between_two_enrichers_is_fed_once() {
        let mut farm = Location::new("Farm", true)
            .with_object((5, 5), enriched_sprinkler(vec![ItemStack::new("(O)368", 3)]))
            .with_object((5, 7), enriched_sprinkler(vec![ItemStack::new("(O)919", 4)]))
            .with_object((5, 6), pot());

        let report = run(&mut farm);

        let pot = farm.pot_at((5, 6)).unwrap();
        assert!(pot.soil.watered);
        // Map order visits (5, 5) first.
        assert_eq!(pot.soil.fertilizer.as_deref(), Some("(O)368"));
        assert_eq!(enricher_stack(&farm, (5, 5)), Some(2));
        assert_eq!(enricher_stack(&farm, (5, 7)), Some(4));
        assert_eq!(report.pot_waterings, 2);
        assert_eq!(report.pots_fertilized, 1);
    }

    #[test]
    fn one_enricher_feeds_several_pots_until_empty() {
        let mut farm = Location::new("Farm", true)
            .with_object((5, 5), enriched_sprinkler(vec![ItemStack::new("(O)368", 2)]))
            .with_object((4, 5), pot())
            .with_object((5, 4), pot())
            .with_object((5, 6), pot());

        let report = run(&mut farm);

        let fed = [(4, 5), (5, 4), (5, 6)]
            .into_iter()
            .filter(|t| farm.pot_at(*t).unwrap().soil.fertilizer.is_some())
            .count();
        assert_eq!(fed, 2);
        assert_eq!(enricher_stack(&farm, (5, 5)), Some(0));
        assert_eq!(report.pot_waterings, 3);
    }

    #[test]
    fn pressure_nozzle_does_not_feed() {
        let sprinkler =
            Sprinkler::new("Iridium Sprinkler").with_attachment(Attachment::new("Pressure Nozzle"));
        let mut farm = Location::new("Farm", true)
            .with_object((5, 5), PlacedObject::Sprinkler(sprinkler))
            .with_object((5, 6), pot());

        run(&mut farm);

        let pot = farm.pot_at((5, 6)).unwrap();
        assert!(pot.soil.watered);
        assert!(pot.soil.fertilizer.is_none());
    }

    #[test]
    fn coverage_of_own_tile_is_harmless() {
        let own_tile = |origin: Tile, _s: &Sprinkler| vec![origin];
        let mut farm = Location::new("Farm", true).with_object((5, 5), plain_sprinkler());

        let mut report = DailyReport::new();
        PotIrrigationRule.apply(&mut farm, &own_tile, &mut report);

        assert!(farm.objects.get(&Tile::new(5, 5)).unwrap().is_sprinkler());
        assert_eq!(report.pot_waterings, 0);
    }

    #[test]
    fn scope_follows_water_indoors() {
        let mut config = Config::default();
        config.water_indoors = false;
        assert_eq!(PotIrrigationRule.scope(&config), Some(RuleScope::TopLevel));
        config.water_indoors = true;
        assert_eq!(
            PotIrrigationRule.scope(&config),
            Some(RuleScope::WithInteriors)
        );
    }
}
