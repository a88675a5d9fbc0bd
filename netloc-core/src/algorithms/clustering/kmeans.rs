//! This module contains a basic K-Means algorithm implementation with k-means++ seeding and
//! multiple restarts.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/clustering/kmeans_test.rs"]
mod kmeans_test;

use crate::utils::{Float, compare_floats, stable_argmin};
use rand::distributions::{Distribution, WeightedIndex};
use rand::prelude::*;
use rand::rngs::SmallRng;

/// A data point type used by K-Means algorithm.
pub type DataPoint<const N: usize> = [Float; N];

/// Specifies K-Means algorithm settings.
#[derive(Clone, Debug)]
pub struct KMeansSettings {
    /// Amount of runs with different seeding, the run with the lowest inertia wins.
    pub restarts: usize,
    /// Maximum amount of Lloyd iterations in a single run.
    pub max_iterations: usize,
    /// Relative tolerance of centroid shift used to declare convergence.
    pub tolerance: Float,
    /// A seed of random generator, same seed and data produce the same result.
    pub seed: u64,
}

impl Default for KMeansSettings {
    fn default() -> Self {
        Self { restarts: 10, max_iterations: 300, tolerance: 1E-4, seed: 42 }
    }
}

/// A result of K-Means clustering.
#[derive(Clone, Debug)]
pub struct KMeansClusters<const N: usize> {
    /// Cluster centroids.
    pub centroids: Vec<DataPoint<N>>,
    /// A cluster index for every data point.
    pub labels: Vec<usize>,
    /// Sum of squared distances of data points to their centroids.
    pub inertia: Float,
}

/// Partitions data points into `k` clusters. Returns `None` when `k` is zero or exceeds amount of points.
pub fn create_kmeans<const N: usize>(
    points: &[DataPoint<N>],
    k: usize,
    settings: &KMeansSettings,
) -> Option<KMeansClusters<N>> {
    if k == 0 || k > points.len() {
        return None;
    }

    let mut rng = SmallRng::seed_from_u64(settings.seed);
    let tolerance = settings.tolerance * get_mean_variance(points);

    (0..settings.restarts.max(1))
        .map(|_| {
            let centroids = init_centroids(points, k, &mut rng);
            run_lloyd(points, centroids, settings.max_iterations, tolerance)
        })
        .fold(None, |best: Option<KMeansClusters<N>>, candidate| match best {
            Some(best) if compare_floats(candidate.inertia, best.inertia).is_ge() => Some(best),
            _ => Some(candidate),
        })
}

/// Selects initial centroids using k-means++ strategy: every next centroid is sampled with
/// probability proportional to squared distance to the nearest already selected one.
fn init_centroids<const N: usize>(points: &[DataPoint<N>], k: usize, rng: &mut SmallRng) -> Vec<DataPoint<N>> {
    let mut centroids = Vec::with_capacity(k);
    centroids.push(points[rng.gen_range(0..points.len())]);

    let mut min_distances = points.iter().map(|point| squared_distance(point, &centroids[0])).collect::<Vec<_>>();

    while centroids.len() < k {
        // all points coincide with selected centroids, weighted sampling is not possible
        let next_idx = match WeightedIndex::<Float>::new(min_distances.iter().cloned()) {
            Ok(distribution) => distribution.sample(rng),
            Err(_) => rng.gen_range(0..points.len()),
        };

        let centroid = points[next_idx];
        min_distances.iter_mut().zip(points.iter()).for_each(|(distance, point)| {
            *distance = distance.min(squared_distance(point, &centroid));
        });

        centroids.push(centroid);
    }

    centroids
}

fn run_lloyd<const N: usize>(
    points: &[DataPoint<N>],
    mut centroids: Vec<DataPoint<N>>,
    max_iterations: usize,
    tolerance: Float,
) -> KMeansClusters<N> {
    for _ in 0..max_iterations {
        let labels = assign_labels(points, &centroids);
        let new_centroids = update_centroids(points, &labels, &centroids);

        let shift: Float =
            centroids.iter().zip(new_centroids.iter()).map(|(old, new)| squared_distance(old, new)).sum();

        centroids = new_centroids;

        if shift <= tolerance {
            break;
        }
    }

    let labels = assign_labels(points, &centroids);
    let inertia =
        points.iter().zip(labels.iter()).map(|(point, &label)| squared_distance(point, &centroids[label])).sum();

    KMeansClusters { centroids, labels, inertia }
}

fn assign_labels<const N: usize>(points: &[DataPoint<N>], centroids: &[DataPoint<N>]) -> Vec<usize> {
    points
        .iter()
        .map(|point| {
            stable_argmin(centroids.iter().map(|centroid| squared_distance(point, centroid)))
                .map_or(0, |(idx, _)| idx)
        })
        .collect()
}

fn update_centroids<const N: usize>(
    points: &[DataPoint<N>],
    labels: &[usize],
    centroids: &[DataPoint<N>],
) -> Vec<DataPoint<N>> {
    let mut sums = vec![[0.; N]; centroids.len()];
    let mut counts = vec![0_usize; centroids.len()];

    points.iter().zip(labels.iter()).for_each(|(point, &label)| {
        sums[label].iter_mut().zip(point.iter()).for_each(|(sum, value)| *sum += value);
        counts[label] += 1;
    });

    let mut new_centroids = sums
        .into_iter()
        .zip(counts.iter())
        .zip(centroids.iter())
        .map(|((sum, &count), old)| if count > 0 { sum.map(|value| value / count as Float) } else { *old })
        .collect::<Vec<_>>();

    if counts.iter().all(|&count| count > 0) {
        return new_centroids;
    }

    // relocate empty clusters to the points which are the most distant from their centroids
    let mut distant_points = points
        .iter()
        .zip(labels.iter())
        .map(|(point, &label)| (point, squared_distance(point, &centroids[label])))
        .collect::<Vec<_>>();
    distant_points.sort_by(|(_, a), (_, b)| compare_floats(*b, *a));

    counts.iter().enumerate().filter(|(_, count)| **count == 0).zip(distant_points.iter()).for_each(
        |((idx, _), (point, _))| {
            new_centroids[idx] = **point;
        },
    );

    new_centroids
}

fn get_mean_variance<const N: usize>(points: &[DataPoint<N>]) -> Float {
    if points.is_empty() || N == 0 {
        return 0.;
    }

    let size = points.len() as Float;
    let total = (0..N)
        .map(|dim| {
            let mean = points.iter().map(|point| point[dim]).sum::<Float>() / size;
            points.iter().map(|point| (point[dim] - mean).powi(2)).sum::<Float>() / size
        })
        .sum::<Float>();

    total / N as Float
}

/// Returns squared euclidean distance between two data points.
pub fn squared_distance<const N: usize>(a: &DataPoint<N>, b: &DataPoint<N>) -> Float {
    a.iter().zip(b.iter()).map(|(a, b)| (a - b) * (a - b)).sum()
}
