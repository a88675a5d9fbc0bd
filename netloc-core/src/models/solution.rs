use crate::models::common::{Coordinate, Cost, Demand, Distance, Duration};

/// Specifies the origin of a center in a solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CenterKind {
    /// A caller supplied fixed center.
    Fixed,
    /// A redistribute-and-serve center.
    Redistribution,
    /// A center placed by clustering.
    Candidate,
}

/// A store assignment to a center.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    /// An index of the assigned center in solution center list.
    pub center: usize,
    /// Travel time to the assigned center, in minutes.
    pub duration: Duration,
    /// Great-circle distance to the assigned center, in miles.
    pub distance: Distance,
}

/// Annual network cost split by components.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CostBreakdown {
    /// Delivery cost from centers to stores.
    pub outbound: Cost,
    /// Fixed and variable occupancy cost of centers.
    pub warehousing: Cost,
    /// Replenishment cost from supply points to serving centers.
    pub inbound: Cost,
    /// Transfer cost from supply points to redistribute-only centers.
    pub transfer: Cost,
    /// Sum of all components.
    pub total: Cost,
}

impl CostBreakdown {
    /// Creates a new instance of `CostBreakdown` and calculates total.
    pub fn new(outbound: Cost, warehousing: Cost, inbound: Cost, transfer: Cost) -> Self {
        Self { outbound, warehousing, inbound, transfer, total: outbound + warehousing + inbound + transfer }
    }
}

/// A fully evaluated network configuration for a specific candidate count.
#[derive(Clone, Debug)]
pub struct Solution {
    /// A requested amount of centers.
    pub k: usize,
    /// Ordered list of serving centers, pinned centers come first.
    pub centers: Vec<Coordinate>,
    /// Origin of every center, in the order of `centers`.
    pub center_kinds: Vec<CenterKind>,
    /// Assignment of every store, in the order of problem demand points.
    pub assignments: Vec<Assignment>,
    /// Aggregate demand of every center.
    pub center_demands: Vec<Demand>,
    /// Cost breakdown.
    pub costs: CostBreakdown,
}
