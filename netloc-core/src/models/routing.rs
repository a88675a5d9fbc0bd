//! Provides travel time lookup between coordinates.

#[cfg(test)]
#[path = "../../tests/unit/models/routing_test.rs"]
mod routing_test;

use crate::algorithms::geometry::get_fallback_duration;
use crate::models::common::{Coordinate, Duration};
use crate::utils::{Float, GenericResult, InfoLogger};
use std::sync::Arc;

/// A travel time matrix, in minutes, where rows are origins and columns are destinations.
pub type TravelTimeMatrix = Vec<Vec<Duration>>;

/// An external routing service which returns travel durations.
pub trait RoutingService: Send + Sync {
    /// Returns travel durations in seconds from every origin to every destination.
    /// Any failure (authentication, quota, network) should be returned as an error.
    fn get_durations(
        &self,
        origins: &[Coordinate],
        destinations: &[Coordinate],
        credential: &str,
    ) -> GenericResult<Vec<Vec<Float>>>;
}

/// Provides travel time between coordinates. Prefers an external routing service and, when it
/// is not configured or fails, estimates travel time from great-circle distance.
#[derive(Clone)]
pub struct TravelTimeProvider {
    service: Option<Arc<dyn RoutingService>>,
    credential: Option<String>,
    logger: InfoLogger,
}

impl TravelTimeProvider {
    /// Creates a provider which uses given routing service when credential is present.
    pub fn new(service: Arc<dyn RoutingService>, credential: Option<String>, logger: InfoLogger) -> Self {
        Self { service: Some(service), credential, logger }
    }

    /// Creates a provider which always uses distance based estimation.
    pub fn new_fallback(logger: InfoLogger) -> Self {
        Self { service: None, credential: None, logger }
    }

    /// Returns a travel time matrix from routing service or `None` when it is unavailable.
    /// Missing credential is not a failure and produces `None` without contacting the service.
    pub fn get_matrix(&self, origins: &[Coordinate], destinations: &[Coordinate]) -> Option<TravelTimeMatrix> {
        let (service, credential) = match (self.service.as_ref(), self.credential.as_deref()) {
            (Some(service), Some(credential)) if !credential.is_empty() => (service, credential),
            _ => return None,
        };

        if origins.is_empty() || destinations.is_empty() {
            return Some(vec![Vec::default(); origins.len()]);
        }

        match service.get_durations(origins, destinations, credential) {
            Ok(seconds) if is_valid_matrix(&seconds, origins.len(), destinations.len()) => {
                Some(seconds.into_iter().map(|row| row.into_iter().map(|value| value / 60.).collect()).collect())
            }
            Ok(_) => {
                (self.logger)(&format!(
                    "routing service returned malformed matrix for {}x{} request, use distance fallback",
                    origins.len(),
                    destinations.len()
                ));
                None
            }
            Err(err) => {
                (self.logger)(&format!("routing service failed: '{err}', use distance fallback"));
                None
            }
        }
    }

    /// Returns travel time matrix, using distance based estimation when routing service is unavailable.
    pub fn get_durations(&self, origins: &[Coordinate], destinations: &[Coordinate]) -> TravelTimeMatrix {
        self.get_matrix(origins, destinations).unwrap_or_else(|| get_fallback_matrix(origins, destinations))
    }

    /// Returns travel time between two coordinates with the same fallback rule.
    pub fn get_duration(&self, from: &Coordinate, to: &Coordinate) -> Duration {
        self.get_matrix(std::slice::from_ref(from), std::slice::from_ref(to))
            .and_then(|matrix| matrix.first().and_then(|row| row.first()).cloned())
            .unwrap_or_else(|| get_fallback_duration(from, to))
    }
}

/// Returns a travel time matrix estimated from great-circle distance at constant speed.
pub fn get_fallback_matrix(origins: &[Coordinate], destinations: &[Coordinate]) -> TravelTimeMatrix {
    origins.iter().map(|origin| destinations.iter().map(|dest| get_fallback_duration(origin, dest)).collect()).collect()
}

fn is_valid_matrix(values: &[Vec<Float>], rows: usize, columns: usize) -> bool {
    values.len() == rows
        && values.iter().all(|row| row.len() == columns && row.iter().all(|value| value.is_finite() && *value >= 0.))
}
