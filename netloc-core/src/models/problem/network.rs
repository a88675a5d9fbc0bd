#[cfg(test)]
#[path = "../../../tests/unit/models/problem/network_test.rs"]
mod network_test;

use crate::models::common::Coordinate;
use crate::utils::Float;

/// Specifies what a redistribution center does in a network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedistributionRole {
    /// Receives inbound transfer only, never serves stores directly (RDC).
    RedistributeOnly,
    /// Receives inbound transfer and serves stores as an ordinary warehouse (SDC).
    RedistributeAndServe,
}

/// A redistribution or service distribution center.
#[derive(Clone, Debug)]
pub struct RedistributionCenter {
    /// Center location.
    pub coordinate: Coordinate,
    /// Center role.
    pub role: RedistributionRole,
}

/// A supply point which originates a share of total inbound volume.
#[derive(Clone, Debug)]
pub struct SupplyPoint {
    /// Supply point location.
    pub coordinate: Coordinate,
    /// A fraction of total inbound volume, in (0, 1]. Zero marks an inactive point.
    pub share: Float,
}

impl SupplyPoint {
    /// Checks whether supply point takes part in inbound flow.
    pub fn is_active(&self) -> bool {
        self.share > 0.
    }
}

/// Describes caller supplied parts of network: fixed centers, redistribution centers and supply points.
#[derive(Clone, Debug, Default)]
pub struct NetworkTopology {
    /// Centers which are always present and never relocated.
    pub fixed_centers: Vec<Coordinate>,
    /// Redistribution centers.
    pub redistribution_centers: Vec<RedistributionCenter>,
    /// Supply points.
    pub supply_points: Vec<SupplyPoint>,
}

impl NetworkTopology {
    /// Returns centers occupying pinned slots of every solution: fixed centers followed by
    /// redistribute-and-serve centers.
    pub fn pinned_centers(&self) -> Vec<Coordinate> {
        self.fixed_centers.iter().cloned().chain(self.serving_redistribution_centers()).collect()
    }

    /// Returns a range of center slots which are occupied by redistribute-and-serve centers.
    pub fn serving_redistribution_slots(&self) -> std::ops::Range<usize> {
        let start = self.fixed_centers.len();
        start..start + self.serving_redistribution_centers().count()
    }

    /// Returns coordinates of redistribute-only centers.
    pub fn redistribution_only_centers(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.centers_with_role(RedistributionRole::RedistributeOnly)
    }

    /// Returns coordinates of redistribute-and-serve centers.
    pub fn serving_redistribution_centers(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.centers_with_role(RedistributionRole::RedistributeAndServe)
    }

    /// Returns supply points with positive share.
    pub fn active_supply_points(&self) -> impl Iterator<Item = &SupplyPoint> + '_ {
        self.supply_points.iter().filter(|point| point.is_active())
    }

    fn centers_with_role(&self, role: RedistributionRole) -> impl Iterator<Item = Coordinate> + '_ {
        self.redistribution_centers.iter().filter(move |center| center.role == role).map(|center| center.coordinate)
    }
}
