use crate::feature::Feature;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Maximum intergenic gap, in bp, between consecutive same-strand genes of
/// one putative operon. Tunable; the qualitative contract is only that
/// contiguous same-strand genes group together.
pub const MAX_INTERGENIC_GAP: usize = 200;

/// Fixed palette cycled deterministically so the same operon composition
/// gets the same color across re-renders within a session.
const OPERON_PALETTE: [&str; 10] = [
    "#e6194b", "#3cb44b", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6", "#bcf60c",
    "#008080", "#9a6324",
];

/// A detected cluster of adjacent same-strand genes inferred to be
/// co-transcribed. Derived on demand from the current annotation set,
/// never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Operon {
    pub name: String,
    pub strand: i8,
    pub start: usize,
    pub end: usize,
    pub genes: Vec<Feature>,
    pub color: String,
}

impl Operon {
    /// Whether the feature is one of this operon's member genes.
    pub fn contains(&self, feature: &Feature) -> bool {
        self.genes.iter().any(|g| {
            g.start == feature.start && g.end == feature.end && g.kind == feature.kind
        })
    }
}

/// Groups consecutive gene-like features (promoters and terminators are
/// ignored) that share a strand and sit within [`MAX_INTERGENIC_GAP`] of
/// each other. Single genes do not form an operon.
pub fn detect_operons(features: &[Feature]) -> Vec<Operon> {
    let genes: Vec<&Feature> = features
        .iter()
        .filter(|f| f.is_gene_like())
        .sorted_by_key(|f| (f.start, f.end))
        .collect();

    let mut operons = vec![];
    let mut group: Vec<&Feature> = vec![];

    for gene in genes {
        let extends_group = group.last().is_some_and(|prev| {
            gene.strand == prev.strand && gap_between(prev, gene) <= MAX_INTERGENIC_GAP
        });
        if extends_group {
            group.push(gene);
        } else {
            commit_group(&mut operons, &group);
            group = vec![gene];
        }
    }
    commit_group(&mut operons, &group);

    operons
}

/// Operon membership and color for one feature, if any.
pub fn operon_for_feature<'a>(feature: &Feature, operons: &'a [Operon]) -> Option<&'a Operon> {
    if !feature.is_gene_like() {
        return None;
    }
    operons.iter().find(|operon| operon.contains(feature))
}

#[inline(always)]
fn gap_between(prev: &Feature, next: &Feature) -> usize {
    next.start.saturating_sub(prev.end + 1)
}

fn commit_group(operons: &mut Vec<Operon>, group: &[&Feature]) {
    if group.len() < 2 {
        return;
    }
    let first = group[0];
    operons.push(Operon {
        name: format!("{} operon", first.display_name()),
        strand: first.strand,
        start: first.start,
        end: group.iter().map(|g| g.end).max().unwrap_or(first.end),
        genes: group.iter().map(|&g| g.clone()).collect(),
        color: OPERON_PALETTE[operons.len() % OPERON_PALETTE.len()].to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gene(name: &str, start: usize, end: usize, strand: i8) -> Feature {
        let mut f = Feature::new("gene", start, end, strand);
        f.set_qualifier("gene", name);
        f
    }

    #[test]
    fn test_adjacent_same_strand_genes_group() {
        let features = vec![
            gene("a", 100, 500, 1),
            gene("b", 550, 900, 1),
            gene("c", 950, 1200, 1),
        ];
        let operons = detect_operons(&features);
        assert_eq!(operons.len(), 1);
        assert_eq!(operons[0].genes.len(), 3);
        assert_eq!(operons[0].name, "a operon");
        assert_eq!((operons[0].start, operons[0].end), (100, 1200));
    }

    #[test]
    fn test_strand_change_splits_group() {
        let features = vec![
            gene("a", 100, 500, 1),
            gene("b", 550, 900, -1),
            gene("c", 950, 1200, -1),
        ];
        let operons = detect_operons(&features);
        assert_eq!(operons.len(), 1);
        assert_eq!(operons[0].strand, -1);
        assert_eq!(operons[0].genes.len(), 2);
    }

    #[test]
    fn test_large_gap_splits_group() {
        let features = vec![
            gene("a", 100, 500, 1),
            gene("b", 5000, 5400, 1), // far downstream
            gene("c", 5450, 5800, 1),
        ];
        let operons = detect_operons(&features);
        assert_eq!(operons.len(), 1);
        assert_eq!(operons[0].name, "b operon");
    }

    #[test]
    fn test_single_gene_is_not_an_operon() {
        assert!(detect_operons(&[gene("solo", 100, 500, 1)]).is_empty());
    }

    #[test]
    fn test_promoters_and_terminators_ignored() {
        let features = vec![
            Feature::new("promoter", 50, 90, 1),
            gene("a", 100, 500, 1),
            gene("b", 550, 900, 1),
            Feature::new("terminator", 910, 940, 1),
        ];
        let operons = detect_operons(&features);
        assert_eq!(operons.len(), 1);
        assert_eq!(operons[0].genes.len(), 2);
        assert_eq!(operon_for_feature(&features[0], &operons), None);
        assert!(operon_for_feature(&features[1], &operons).is_some());
    }

    #[test]
    fn test_colors_are_deterministic() {
        let features = vec![
            gene("a", 100, 500, 1),
            gene("b", 550, 900, 1),
            gene("c", 2000, 2400, -1),
            gene("d", 2450, 2800, -1),
        ];
        let first = detect_operons(&features);
        let second = detect_operons(&features);
        assert_eq!(first, second);
        assert_ne!(first[0].color, first[1].color);
    }
}
