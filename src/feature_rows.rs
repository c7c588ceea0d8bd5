use crate::feature::Feature;
use itertools::Itertools;

/// Visual separation buffer: features closer than this share a conflict
/// even without true coordinate overlap.
const ROW_BUFFER: usize = 10;

/// True if two features collide for row-packing purposes, ie their spans
/// padded by [`ROW_BUFFER`] intersect.
#[inline(always)]
pub fn features_collide(a: &Feature, b: &Feature) -> bool {
    a.start < b.end + ROW_BUFFER && a.end + ROW_BUFFER > b.start
}

/// Packs features overlapping the view range into display rows: sort by
/// start, then place each feature into the first row where it collides
/// with nothing already placed, opening a new row when none fits. Greedy
/// interval coloring: deterministic and stable, not globally optimal in
/// row count. Row index is the vertical stacking order.
pub fn pack_rows(features: &[Feature], view_start: usize, view_end: usize) -> Vec<Vec<Feature>> {
    let mut rows: Vec<Vec<Feature>> = vec![];

    let sorted = features
        .iter()
        .filter(|f| f.overlaps_range(view_start, view_end))
        .sorted_by_key(|f| f.start);

    for feature in sorted {
        let slot = rows
            .iter()
            .position(|row| row.iter().all(|placed| !features_collide(feature, placed)));
        match slot {
            Some(index) => rows[index].push(feature.clone()),
            None => rows.push(vec![feature.clone()]),
        }
    }

    rows
}
