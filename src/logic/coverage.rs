use crate::models::{Sprinkler, Tile};

/// Source of the tiles a sprinkler waters today.
///
/// The host owns the geometry (sprinkler tier, pressure nozzle, ...), so the
/// daily pass only ever asks and never second-guesses the answer.
pub trait CoverageProvider {
    /// Absolute tiles covered by `sprinkler` placed at `origin`.
    fn coverage_tiles(&self, origin: Tile, sprinkler: &Sprinkler) -> Vec<Tile>;
}

impl<F> CoverageProvider for F
where
    F: Fn(Tile, &Sprinkler) -> Vec<Tile>,
{
    fn coverage_tiles(&self, origin: Tile, sprinkler: &Sprinkler) -> Vec<Tile> {
        self(origin, sprinkler)
    }
}

/// Coverage the host wrote into the snapshot as offsets from each sprinkler.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostReportedCoverage;

impl CoverageProvider for HostReportedCoverage {
    fn coverage_tiles(&self, origin: Tile, sprinkler: &Sprinkler) -> Vec<Tile> {
        sprinkler
            .coverage
            .iter()
            .map(|offset| origin.offset(*offset))
            .collect()
    }
}
