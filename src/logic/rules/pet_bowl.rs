use super::{Rule, RuleScope};
use crate::config::Config;
use crate::logic::coverage::CoverageProvider;
use crate::logic::report::DailyReport;
use crate::models::{BuildingKind, Location, PlacedObject};

/// Pet bowl rule
///
/// A pet bowl counts as filled when a sprinkler covers its drinking tile, the
/// tile just east of the bowl's anchor. Covering any other part of the bowl
/// does nothing. Bowls are exterior fixtures, so only top-level locations are
/// visited. The rule never clears a bowl.
pub struct PetBowlRule;

impl Rule for PetBowlRule {
    fn id(&self) -> &'static str {
        "pet_bowl"
    }

    fn name(&self) -> &'static str {
        "Pet Bowl Watering"
    }

    fn scope(&self, config: &Config) -> Option<RuleScope> {
        config.water_pet_bowl.then_some(RuleScope::TopLevel)
    }

    fn apply(
        &self,
        location: &mut Location,
        coverage: &dyn CoverageProvider,
        report: &mut DailyReport,
    ) {
        for origin in location.sprinkler_tiles() {
            let Some(sprinkler) = location.objects.get(&origin).and_then(PlacedObject::as_sprinkler)
            else {
                continue;
            };

            for tile in coverage.coverage_tiles(origin, sprinkler) {
                let Some(building) = location.buildings.iter_mut().find(|b| b.occupies(tile))
                else {
                    continue;
                };
                if building.drinking_tile() != Some(tile) {
                    continue;
                }

                let anchor = building.anchor();
                if let BuildingKind::PetBowl { watered } = &mut building.kind {
                    if !*watered {
                        report.bowls_watered += 1;
                        tracing::debug!(location = %location.name, %anchor, "Filled pet bowl");
                    }
                    *watered = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::test_support::*;
    use crate::models::{Building, Sprinkler, Tile};

    fn run(location: &mut Location) -> DailyReport {
        let mut report = DailyReport::new();
        PetBowlRule.apply(location, &cardinal_coverage, &mut report);
        report
    }

    #[test]
    fn covering_the_drinking_tile_fills_the_bowl() {
        // Sprinkler at (11, 11) covers (11, 10), east of the anchor at (10, 10).
        let mut farm = Location::new("Farm", true)
            .with_object((11, 11), plain_sprinkler())
            .with_building(Building::pet_bowl(10, 10));

        let report = run(&mut farm);

        assert!(farm.buildings[0].is_watered());
        assert_eq!(report.bowls_watered, 1);
    }

    #[test]
    fn covering_another_bowl_tile_does_nothing() {
        // (10, 11) and (11, 11) are part of the bowl but not its drinking tile.
        let mut farm = Location::new("Farm", true)
            .with_object((10, 12), plain_sprinkler())
            .with_object((12, 11), plain_sprinkler())
            .with_building(Building::pet_bowl(10, 10));

        let report = run(&mut farm);

        assert!(!farm.buildings[0].is_watered());
        assert_eq!(report.bowls_watered, 0);
    }

    #[test]
    fn drinking_tile_outside_footprint_is_unreachable() {
        let only_drinking_tile = |_origin: Tile, _s: &Sprinkler| vec![Tile::new(11, 10)];
        let mut farm = Location::new("Farm", true)
            .with_object((0, 0), plain_sprinkler())
            .with_building(Building::pet_bowl(10, 10).with_footprint(1, 1));

        let mut report = DailyReport::new();
        PetBowlRule.apply(&mut farm, &only_drinking_tile, &mut report);

        assert!(!farm.buildings[0].is_watered());
    }

    #[test]
    fn structures_are_ignored() {
        let mut farm = Location::new("Farm", true)
            .with_object((11, 11), plain_sprinkler())
            .with_building(Building::structure("Shed", 10, 10).with_footprint(2, 2));

        let report = run(&mut farm);

        assert_eq!(report.bowls_watered, 0);
        assert!(!farm.buildings[0].is_watered());
    }

    #[test]
    fn watered_bowl_stays_watered() {
        let mut bowl = Building::pet_bowl(10, 10);
        bowl.kind = BuildingKind::PetBowl { watered: true };
        let mut farm = Location::new("Farm", true).with_building(bowl);

        let report = run(&mut farm);

        assert!(farm.buildings[0].is_watered());
        assert_eq!(report.bowls_watered, 0);
    }

    #[test]
    fn two_sprinklers_on_one_bowl_count_once() {
        let mut farm = Location::new("Farm", true)
            .with_object((11, 11), plain_sprinkler())
            .with_object((12, 10), plain_sprinkler())
            .with_building(Building::pet_bowl(10, 10));

        let report = run(&mut farm);

        assert!(farm.buildings[0].is_watered());
        assert_eq!(report.bowls_watered, 1);
    }

    #[test]
    fn scope_follows_water_pet_bowl() {
        let mut config = Config::default();
        config.water_pet_bowl = false;
        assert_eq!(PetBowlRule.scope(&config), None);
        config.water_pet_bowl = true;
        assert_eq!(PetBowlRule.scope(&config), Some(RuleScope::TopLevel));
    }
}
