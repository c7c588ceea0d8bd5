use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Feature kinds shown on the gene track. Anything else is only reachable
/// through an explicit query predicate.
const DISPLAYABLE_KINDS: [&str; 10] = [
    "gene",
    "CDS",
    "mRNA",
    "tRNA",
    "rRNA",
    "misc_feature",
    "regulatory",
    "promoter",
    "terminator",
    "repeat_region",
];

/// An annotated genomic region. Coordinates are 1-based inclusive, with
/// `start <= end`; strand is +1 or -1. Qualifiers are a free-form bag,
/// looked up by convention (gene, locus_tag, product, note).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub kind: String,
    pub start: usize,
    pub end: usize,
    pub strand: i8,
    pub qualifiers: HashMap<String, String>,
    pub score: Option<f64>,
    pub source: Option<String>,
    pub user_defined: bool,
    /// Assigned for user-defined features only.
    pub id: Option<String>,
}

impl Feature {
    pub fn new(kind: &str, start: usize, end: usize, strand: i8) -> Self {
        Self {
            kind: kind.to_string(),
            start,
            end,
            strand,
            ..Default::default()
        }
    }

    #[inline(always)]
    pub fn qualifier(&self, key: &str) -> Option<&str> {
        self.qualifiers.get(key).map(String::as_str)
    }

    pub fn set_qualifier(&mut self, key: &str, value: &str) {
        self.qualifiers.insert(key.to_string(), value.to_string());
    }

    /// Display name fallback chain: gene, locus_tag, product, then kind.
    pub fn display_name(&self) -> &str {
        self.qualifier("gene")
            .or_else(|| self.qualifier("locus_tag"))
            .or_else(|| self.qualifier("product"))
            .unwrap_or(&self.kind)
    }

    /// True for the fixed gene-track vocabulary plus any *RNA kind.
    pub fn is_displayable_kind(&self) -> bool {
        DISPLAYABLE_KINDS.contains(&self.kind.as_str()) || self.kind.contains("RNA")
    }

    /// Gene-like features participate in operon grouping; promoters and
    /// terminators do not.
    pub fn is_gene_like(&self) -> bool {
        self.is_displayable_kind() && self.kind != "promoter" && self.kind != "terminator"
    }

    /// Inclusive overlap against a 1-based range.
    #[inline(always)]
    pub fn overlaps_range(&self, range_start: usize, range_end: usize) -> bool {
        self.start <= range_end && self.end >= range_start
    }
}
