use crate::feature::Feature;
use std::collections::HashMap;

/// Features on `chromosome` overlapping the 1-based inclusive range
/// `[range_start, range_end]`. Boundary-touching features are included.
/// Unknown chromosomes and inverted ranges yield an empty result, never
/// an error. Linear scan; annotation counts at genome-browser scale do
/// not warrant an interval tree.
pub fn features_overlapping<'a>(
    annotations: &'a HashMap<String, Vec<Feature>>,
    chromosome: &str,
    range_start: usize,
    range_end: usize,
) -> Vec<&'a Feature> {
    features_overlapping_where(annotations, chromosome, range_start, range_end, |_| true)
}

/// Same as [`features_overlapping`] with an additional per-feature
/// predicate, eg a kind filter.
pub fn features_overlapping_where<'a, P>(
    annotations: &'a HashMap<String, Vec<Feature>>,
    chromosome: &str,
    range_start: usize,
    range_end: usize,
    predicate: P,
) -> Vec<&'a Feature>
where
    P: Fn(&Feature) -> bool,
{
    if range_start > range_end {
        return vec![];
    }
    match annotations.get(chromosome) {
        Some(features) => features
            .iter()
            .filter(|f| f.overlaps_range(range_start, range_end) && predicate(f))
            .collect(),
        None => vec![],
    }
}
