//! Groups archetypes by a small standardized feature vector.
//!
//! Features per archetype: share (presence fraction), win rate, and
//! dominance (share × win rate). Each feature is z-score standardized
//! before clustering; share lives in [0, 1] while win rate lives in
//! [0, 100], so unstandardized distances would be all win rate.
//!
//! The partitioning is plain Lloyd k-means with one twist: centroids are
//! seeded from quantiles of the dominance-sorted population instead of
//! random picks, so the whole pipeline stays deterministic.

use crate::config::AnalysisConfig;
use crate::stats::normalize::cutoff_population;
use crate::stats::report::ArchetypeStats;
use crate::utils::math::{count_to_f64, mean};

const MAX_ITERATIONS: usize = 100;

const FEATURES: usize = 3;

type Point = [f64; FEATURES];

fn feature_vector(entry: &ArchetypeStats) -> Point {
    let share = entry.presence / 100.0;
    [share, entry.win_rate, share * entry.win_rate]
}

/// Z-score standardize each feature column in place; a zero-variance
/// column becomes all zeros
fn standardize(points: &mut [Point]) {
    for feature in 0..FEATURES {
        let column: Vec<f64> = points.iter().map(|p| p[feature]).collect();
        let center = mean(&column);
        let variance =
            column.iter().map(|v| (v - center) * (v - center)).sum::<f64>() / count_to_f64(column.len());
        let spread = variance.sqrt();

        for point in points.iter_mut() {
            point[feature] = if spread > 0.0 {
                (point[feature] - center) / spread
            } else {
                0.0
            };
        }
    }
}

fn squared_distance(a: &Point, b: &Point) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}

fn nearest_centroid(point: &Point, centroids: &[Point]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (index, centroid) in centroids.iter().enumerate() {
        let distance = squared_distance(point, centroid);
        if distance < best_distance {
            best_distance = distance;
            best = index;
        }
    }
    best
}

/// Lloyd k-means over standardized points with deterministic quantile
/// seeding; returns the cluster id per point
fn k_means(points: &[Point], k: usize) -> Vec<usize> {
    // Seed from quantiles of the dominance-sorted population
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| {
        points[a][2]
            .partial_cmp(&points[b][2])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.cmp(&b))
    });

    let steps = if k > 1 { k - 1 } else { 1 };
    let mut centroids: Vec<Point> = (0..k)
        .map(|slot| points[order[slot * (points.len() - 1) / steps]])
        .collect();

    let mut assignment = vec![0usize; points.len()];
    for _ in 0..MAX_ITERATIONS {
        let mut changed = false;
        for (index, point) in points.iter().enumerate() {
            let nearest = nearest_centroid(point, &centroids);
            if assignment[index] != nearest {
                assignment[index] = nearest;
                changed = true;
            }
        }
        if !changed {
            break;
        }

        // Recompute centroids; empty clusters keep their previous position
        let mut sums = vec![[0.0; FEATURES]; k];
        let mut counts = vec![0usize; k];
        for (index, point) in points.iter().enumerate() {
            let cluster = assignment[index];
            counts[cluster] += 1;
            for feature in 0..FEATURES {
                sums[cluster][feature] += point[feature];
            }
        }
        for cluster in 0..k {
            if counts[cluster] > 0 {
                for feature in 0..FEATURES {
                    centroids[cluster][feature] =
                        sums[cluster][feature] / count_to_f64(counts[cluster]);
                }
            }
        }
    }

    assignment
}

/// Assign a cluster id to every archetype above the presence cutoff
pub fn assign_clusters(stats: &mut [ArchetypeStats], config: &AnalysisConfig) {
    let population = cutoff_population(stats, config);
    if population.is_empty() || config.cluster_count == 0 {
        return;
    }

    let k = config.cluster_count.min(population.len());
    let mut points: Vec<Point> = population
        .iter()
        .map(|&index| feature_vector(&stats[index]))
        .collect();
    standardize(&mut points);

    let assignment = k_means(&points, k);
    for (slot, &index) in population.iter().enumerate() {
        stats[index].cluster = Some(assignment[slot]);
    }
}
