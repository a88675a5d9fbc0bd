//! Writers of optimization results.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/report_test.rs"]
mod report_test;

use netloc_core::models::CenterKind;
use netloc_core::prelude::*;
use netloc_core::solver::report::{get_center_summaries, get_distance_distribution};
use serde::Serialize;
use std::io::{BufWriter, Write};

/// A summary of a solved scenario.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    /// Scenario name.
    pub scenario: String,
    /// Requested amount of warehouses of the best configuration.
    pub k: usize,
    /// Cost breakdown.
    pub costs: CostsReport,
    /// Centers of the best configuration.
    pub centers: Vec<CenterReport>,
    /// Amount of stores per distance range.
    pub distance_distribution: Vec<DistanceBucketReport>,
}

/// Annual cost breakdown.
#[derive(Clone, Debug, Serialize)]
pub struct CostsReport {
    /// Total cost.
    pub total: f64,
    /// Outbound cost.
    pub outbound: f64,
    /// Warehousing cost.
    pub warehousing: f64,
    /// Inbound cost.
    pub inbound: f64,
    /// Transfer cost.
    pub transfer: f64,
}

/// A center summary.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterReport {
    /// Longitude.
    pub longitude: f64,
    /// Latitude.
    pub latitude: f64,
    /// Center origin: `fixed`, `sdc` or `candidate`.
    pub kind: &'static str,
    /// Assigned demand.
    pub demand_lbs: f64,
    /// Required floor space.
    pub sq_ft: f64,
}

/// Amount of stores within distance range.
#[derive(Clone, Debug, Serialize)]
pub struct DistanceBucketReport {
    /// Range label, in miles.
    pub range: &'static str,
    /// Amount of stores.
    pub stores: usize,
}

/// Creates a summary report of solution.
pub fn create_summary_report(scenario: &str, problem: &Problem, solution: &Solution) -> SummaryReport {
    let costs = &solution.costs;

    SummaryReport {
        scenario: scenario.to_string(),
        k: solution.k,
        costs: CostsReport {
            total: costs.total,
            outbound: costs.outbound,
            warehousing: costs.warehousing,
            inbound: costs.inbound,
            transfer: costs.transfer,
        },
        centers: get_center_summaries(problem, solution)
            .into_iter()
            .map(|summary| CenterReport {
                longitude: summary.coordinate.lng,
                latitude: summary.coordinate.lat,
                kind: match summary.kind {
                    CenterKind::Fixed => "fixed",
                    CenterKind::Redistribution => "sdc",
                    CenterKind::Candidate => "candidate",
                },
                demand_lbs: summary.demand,
                sq_ft: summary.sqft,
            })
            .collect(),
        distance_distribution: get_distance_distribution(solution)
            .into_iter()
            .map(|bucket| DistanceBucketReport { range: bucket.label, stores: bucket.count })
            .collect(),
    }
}

/// Writes summary reports as json.
pub fn write_summary_json<W: Write>(writer: BufWriter<W>, reports: &[SummaryReport]) -> GenericResult<()> {
    let mut writer = writer;

    match reports {
        [report] => serde_json::to_writer_pretty(&mut writer, report),
        _ => serde_json::to_writer_pretty(&mut writer, reports),
    }
    .map_err(|err| format!("cannot write summary: '{err}'"))?;

    writer.flush().map_err(GenericError::from)
}

pub use self::actual::write_assignment_csv;

#[cfg(feature = "csv-format")]
mod actual {
    use netloc_core::prelude::*;
    use serde::Serialize;
    use std::io::{BufWriter, Write};

    #[derive(Serialize)]
    struct CsvAssignment {
        #[serde(rename = "Longitude")]
        lng: f64,
        #[serde(rename = "Latitude")]
        lat: f64,
        #[serde(rename = "DemandLbs")]
        demand: f64,
        #[serde(rename = "Warehouse")]
        warehouse: usize,
        #[serde(rename = "TimeMin")]
        duration: f64,
        #[serde(rename = "DistMiles")]
        distance: f64,
    }

    /// Writes demand table extended with assigned warehouse, travel time and distance.
    pub fn write_assignment_csv<W: Write>(
        writer: BufWriter<W>,
        problem: &Problem,
        solution: &Solution,
    ) -> GenericResult<()> {
        let mut writer = csv::Writer::from_writer(writer);

        problem.demand_points.iter().zip(solution.assignments.iter()).try_for_each(|(point, assignment)| {
            writer
                .serialize(CsvAssignment {
                    lng: point.coordinate.lng,
                    lat: point.coordinate.lat,
                    demand: point.demand,
                    warehouse: assignment.center,
                    duration: assignment.duration,
                    distance: assignment.distance,
                })
                .map_err(|err| GenericError::from(format!("cannot write assignment: '{err}'")))
        })?;

        writer.flush().map_err(GenericError::from)
    }
}

#[cfg(not(feature = "csv-format"))]
mod actual {
    use netloc_core::prelude::*;
    use std::io::{BufWriter, Write};

    /// A stub method for writing assignment table in csv format.
    pub fn write_assignment_csv<W: Write>(
        _writer: BufWriter<W>,
        _problem: &Problem,
        _solution: &Solution,
    ) -> GenericResult<()> {
        Err("csv-format feature is not included".into())
    }
}
