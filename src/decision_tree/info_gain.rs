//! Entropy and information gain, the splitting criterion of ID3.
use crate::common::utils;
use crate::error::{Error, Result};
use crate::sample::{Dataset, Partition};


/// Shannon entropy, in bits, of a label distribution
/// given as the count of each label.
///
/// Labels with zero count contribute nothing,
/// so a pure distribution has entropy exactly `0`.
/// An empty (or all-zero) distribution also yields `0`.
///
/// ```
/// let h = id3tree::entropy([2, 2]);
/// assert!((h - 1.0).abs() < 1e-12);
/// assert_eq!(id3tree::entropy([5]), 0.0);
/// ```
pub fn entropy<I>(counts: I) -> f64
    where I: IntoIterator<Item = usize>,
{
    let counts = counts.into_iter()
        .filter(|&c| c > 0)
        .collect::<Vec<_>>();
    let total = counts.iter().sum::<usize>();
    if total == 0 { return 0f64; }

    let total = total as f64;
    let h = counts.into_iter()
        .map(|c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>();

    // `-1 * log2(1)` is `-0.0`.
    h.max(0f64)
}


/// Shannon entropy, in bits, of a sequence of labels.
pub fn label_entropy<'a, I>(labels: I) -> f64
    where I: IntoIterator<Item = &'a str>,
{
    entropy(utils::label_counts(labels).into_values())
}


/// Information gain of splitting `dataset` on the feature named `feature`:
///
/// ```text
/// H(D) - Σ_v |D_v| / |D| * H(D_v)
/// ```
///
/// where `D_v` are the samples whose value of `feature` is `v`.
/// The result is never negative.
///
/// Returns `Err` if `dataset` has no column named `feature`.
pub fn information_gain(feature: &str, dataset: &Dataset) -> Result<f64> {
    let column = dataset.position(feature)
        .ok_or_else(|| Error::UnknownFeature { feature: feature.to_string() })?;
    Ok(gain(&dataset.partition(), column))
}


/// Information gain of splitting `partition` on the column `feature`.
pub(crate) fn gain(partition: &Partition<'_>, feature: usize) -> f64 {
    let n_sample = partition.len();
    if n_sample == 0 { return 0f64; }
    let n_sample = n_sample as f64;

    let dataset = partition.dataset();
    let remainder = partition.group_by(feature)
        .into_values()
        .map(|rows| {
            let weight = rows.len() as f64 / n_sample;
            let h = label_entropy(rows.iter().map(|&row| dataset.label_at(row)));
            weight * h
        })
        .sum::<f64>();

    // Rounding may push a useless split slightly below zero.
    (partition.entropy() - remainder).max(0f64)
}
