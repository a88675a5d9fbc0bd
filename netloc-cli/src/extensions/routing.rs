//! OpenRouteService matrix API client.

#[cfg(test)]
#[path = "../../tests/unit/extensions/routing_test.rs"]
mod routing_test;

use netloc_core::models::routing::RoutingService;
use netloc_core::prelude::{Coordinate, GenericError, GenericResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A default matrix endpoint for driving car profile.
pub const ORS_MATRIX_URL: &str = "https://api.openrouteservice.org/v2/matrix/driving-car";

/// An environment variable which holds the api key.
pub const ORS_API_KEY_ENV: &str = "ORS_API_KEY";

#[derive(Debug, PartialEq, Serialize)]
struct MatrixRequest {
    locations: Vec<[f64; 2]>,
    sources: Vec<usize>,
    destinations: Vec<usize>,
    metrics: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
struct MatrixResponse {
    durations: Option<Vec<Vec<Option<f64>>>>,
}

/// A routing service which requests driving durations from OpenRouteService.
/// Durations are returned in seconds.
pub struct OrsRoutingService {
    url: String,
    timeout: Duration,
}

impl OrsRoutingService {
    /// Creates a new instance of `OrsRoutingService`.
    pub fn new(url: String, timeout: Duration) -> Self {
        Self { url, timeout }
    }
}

impl Default for OrsRoutingService {
    fn default() -> Self {
        Self::new(ORS_MATRIX_URL.to_string(), Duration::from_secs(60))
    }
}

impl RoutingService for OrsRoutingService {
    fn get_durations(
        &self,
        origins: &[Coordinate],
        destinations: &[Coordinate],
        credential: &str,
    ) -> GenericResult<Vec<Vec<f64>>> {
        let request = create_matrix_request(origins, destinations);
        let response = send_matrix_request(&self.url, self.timeout, credential, &request)?;

        parse_matrix_response(response)
    }
}

/// Returns api key from configuration or, if it is missing, from `ORS_API_KEY` environment variable.
pub fn resolve_api_key(configured: Option<&str>) -> Option<String> {
    configured
        .filter(|key| !key.trim().is_empty())
        .map(|key| key.to_string())
        .or_else(|| std::env::var(ORS_API_KEY_ENV).ok().filter(|key| !key.trim().is_empty()))
}

fn create_matrix_request(origins: &[Coordinate], destinations: &[Coordinate]) -> MatrixRequest {
    let locations =
        origins.iter().chain(destinations.iter()).map(|coordinate| [coordinate.lng, coordinate.lat]).collect();

    MatrixRequest {
        locations,
        sources: (0..origins.len()).collect(),
        destinations: (origins.len()..origins.len() + destinations.len()).collect(),
        metrics: vec!["duration"],
    }
}

fn parse_matrix_response(response: MatrixResponse) -> GenericResult<Vec<Vec<f64>>> {
    let durations = response.durations.ok_or_else(|| GenericError::from("no durations in response"))?;

    durations
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|value| value.ok_or_else(|| GenericError::from("response has unroutable location pair")))
                .collect::<GenericResult<Vec<_>>>()
        })
        .collect()
}

#[cfg(feature = "ors-routing")]
fn send_matrix_request(
    url: &str,
    timeout: Duration,
    credential: &str,
    request: &MatrixRequest,
) -> GenericResult<MatrixResponse> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|err| format!("cannot create http client: '{err}'"))?;

    let response = client
        .post(url)
        .header("Authorization", credential)
        .json(request)
        .send()
        .map_err(|err| format!("network error: '{err}'"))?;

    let status = response.status();
    if !status.is_success() {
        return Err(match status.as_u16() {
            401 | 403 => "authentication failed".into(),
            429 => "quota exceeded".into(),
            _ => format!("unexpected status: {status}").into(),
        });
    }

    response.json::<MatrixResponse>().map_err(|err| format!("cannot parse response: '{err}'").into())
}

#[cfg(not(feature = "ors-routing"))]
fn send_matrix_request(
    _url: &str,
    _timeout: Duration,
    _credential: &str,
    _request: &MatrixRequest,
) -> GenericResult<MatrixResponse> {
    Err("ors-routing feature is not included".into())
}
