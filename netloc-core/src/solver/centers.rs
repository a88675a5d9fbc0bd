#[cfg(test)]
#[path = "../../tests/unit/solver/centers_test.rs"]
mod centers_test;

use crate::algorithms::clustering::{KMeansSettings, create_kmeans};
use crate::models::common::{Coordinate, DemandPoint};
use crate::utils::{GenericError, GenericResult};
use rustc_hash::FxHashSet;

/// Generates candidate center locations for a given amount of centers.
pub trait CenterGenerator: Send + Sync {
    /// Returns `max(k, pinned.len())` center coordinates where the first `pinned.len()` slots are
    /// exactly the pinned coordinates.
    fn generate(&self, demand_points: &[DemandPoint], pinned: &[Coordinate], k: usize)
    -> GenericResult<Vec<Coordinate>>;
}

/// Generates candidate centers using k-means clustering on raw longitude/latitude degrees.
/// Pinned centers take part in clustering but are not weighted by demand.
#[derive(Clone, Debug, Default)]
pub struct KMeansCenterGenerator {
    settings: KMeansSettings,
}

impl KMeansCenterGenerator {
    /// Creates a new instance of `KMeansCenterGenerator`.
    pub fn new(settings: KMeansSettings) -> Self {
        Self { settings }
    }
}

impl CenterGenerator for KMeansCenterGenerator {
    fn generate(
        &self,
        demand_points: &[DemandPoint],
        pinned: &[Coordinate],
        k: usize,
    ) -> GenericResult<Vec<Coordinate>> {
        let k_effective = k.max(pinned.len());

        if k_effective == 0 {
            return Err("cannot generate zero centers".into());
        }

        let distinct = count_distinct_points(demand_points, pinned);
        if k_effective > distinct {
            return Err(GenericError::from(format!(
                "cannot generate {k_effective} centers from {distinct} distinct locations"
            )));
        }

        // every slot is pinned, clustering result would be discarded anyway
        if pinned.len() == k_effective {
            return Ok(pinned.to_vec());
        }

        let data = demand_points
            .iter()
            .map(|point| &point.coordinate)
            .chain(pinned.iter())
            .map(|coordinate| [coordinate.lng, coordinate.lat])
            .collect::<Vec<_>>();

        let clusters = create_kmeans(&data, k_effective, &self.settings)
            .ok_or_else(|| GenericError::from(format!("k-means failed to produce {k_effective} clusters")))?;

        let mut centers =
            clusters.centroids.into_iter().map(|[lng, lat]| Coordinate::new(lng, lat)).collect::<Vec<_>>();

        centers.iter_mut().zip(pinned.iter()).for_each(|(center, pinned)| *center = *pinned);

        Ok(centers)
    }
}

/// Counts bit-distinct coordinates among demand points and pinned centers.
pub fn count_distinct_points(demand_points: &[DemandPoint], pinned: &[Coordinate]) -> usize {
    demand_points
        .iter()
        .map(|point| point.coordinate.bits_key())
        .chain(pinned.iter().map(|coordinate| coordinate.bits_key()))
        .collect::<FxHashSet<_>>()
        .len()
}
