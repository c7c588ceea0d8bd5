use crate::feature::Feature;
use crate::iupac_code::IupacCode;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default)]
pub struct SearchOptions {
    pub case_sensitive: bool,
    pub include_reverse_complement: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchResultKind {
    Gene,
    Sequence,
}

/// One search hit. Gene hits carry the feature's 1-based start as
/// `position`; sequence hits carry the 0-based match offset, with the
/// 1-based position spelled out in `details`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub kind: SearchResultKind,
    pub position: usize,
    pub end: usize,
    pub name: String,
    pub details: String,
}

/// Three passes over one chromosome: annotation text fields, exact
/// sequence matches (DNA-looking queries only, overlapping occurrences
/// included), and reverse-complement sequence matches when requested.
/// Results are merged and sorted by ascending position.
pub fn search(
    query: &str,
    sequence: &str,
    annotations: &[Feature],
    options: SearchOptions,
) -> Vec<SearchResult> {
    let query = query.trim();
    if query.is_empty() {
        return vec![];
    }

    let term = if options.case_sensitive {
        query.to_string()
    } else {
        query.to_uppercase()
    };
    let haystack = if options.case_sensitive {
        sequence.to_string()
    } else {
        sequence.to_uppercase()
    };

    let mut results = vec![];
    search_annotation_text(&term, annotations, options.case_sensitive, &mut results);

    if IupacCode::is_dna_with_n(&term) {
        for position in overlapping_matches(&haystack, &term) {
            results.push(SearchResult {
                kind: SearchResultKind::Sequence,
                position,
                end: position + term.len(),
                name: "Sequence match".to_string(),
                details: format!("Found \"{query}\" at position {}", position + 1),
            });
        }

        if options.include_reverse_complement && IupacCode::is_strict_dna(&term) {
            let rc = IupacCode::reverse_complement(&term);
            for position in overlapping_matches(&haystack, &rc) {
                results.push(SearchResult {
                    kind: SearchResultKind::Sequence,
                    position,
                    end: position + rc.len(),
                    name: "Reverse complement match".to_string(),
                    details: format!(
                        "Found reverse complement \"{rc}\" at position {}",
                        position + 1
                    ),
                });
            }
        }
    }

    results.sort_by_key(|r| r.position);
    results
}

/// Substring scan over the conventional qualifier fields of each feature.
fn search_annotation_text(
    term: &str,
    annotations: &[Feature],
    case_sensitive: bool,
    results: &mut Vec<SearchResult>,
) {
    for feature in annotations {
        let fields = [
            feature.qualifier("gene").unwrap_or_default(),
            feature.qualifier("locus_tag").unwrap_or_default(),
            feature.qualifier("product").unwrap_or_default(),
            feature.qualifier("note").unwrap_or_default(),
        ]
        .join(" ");
        let haystack = if case_sensitive {
            fields
        } else {
            fields.to_uppercase()
        };
        if haystack.contains(term) {
            let name = feature
                .qualifier("gene")
                .or_else(|| feature.qualifier("locus_tag"))
                .unwrap_or(&feature.kind);
            let product = feature.qualifier("product").unwrap_or("No description");
            results.push(SearchResult {
                kind: SearchResultKind::Gene,
                position: feature.start,
                end: feature.end,
                name: name.to_string(),
                details: format!("{}: {}", feature.kind, product),
            });
        }
    }
}

/// All match offsets of `needle` in `haystack`, overlapping occurrences
/// included (rescan starts one past each hit, not past its end).
fn overlapping_matches(haystack: &str, needle: &str) -> Vec<usize> {
    let mut positions = vec![];
    if needle.is_empty() {
        return positions;
    }
    let mut from = 0;
    while let Some(offset) = haystack[from..].find(needle) {
        let position = from + offset;
        positions.push(position);
        from = position + 1;
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cds(gene: &str, product: &str, start: usize, end: usize) -> Feature {
        let mut f = Feature::new("CDS", start, end, 1);
        f.set_qualifier("gene", gene);
        f.set_qualifier("product", product);
        f
    }

    #[test]
    fn test_gene_name_search() {
        let annotations = vec![
            cds("thrL", "thr operon leader peptide", 100, 200),
            cds("dnaA", "replication initiator", 500, 900),
        ];
        let results = search("thrL", "ACGT", &annotations, SearchOptions::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, SearchResultKind::Gene);
        assert_eq!(results[0].name, "thrL");
        assert_eq!(results[0].position, 100);
        assert_eq!(results[0].details, "CDS: thr operon leader peptide");
    }

    #[test]
    fn test_search_is_case_insensitive_by_default() {
        let annotations = vec![cds("thrL", "leader", 100, 200)];
        assert_eq!(
            search("THRL", "", &annotations, SearchOptions::default()).len(),
            1
        );
        let strict = SearchOptions {
            case_sensitive: true,
            ..Default::default()
        };
        assert!(search("THRL", "", &annotations, strict).is_empty());
    }

    #[test]
    fn test_sequence_search_finds_overlapping_matches() {
        let results = search("AAA", "AAAA", &[], SearchOptions::default());
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].position, 0);
        assert_eq!(results[1].position, 1);
    }

    #[test]
    fn test_non_dna_query_skips_sequence_pass() {
        let results = search("protein", "ACGT", &[], SearchOptions::default());
        assert!(results.is_empty());
    }

    #[test]
    fn test_reverse_complement_search() {
        // Forward motif at 0, reverse complement (TTAC -> GTAA) at 8
        let sequence = "TTACGGGGGTAA";
        let options = SearchOptions {
            include_reverse_complement: true,
            ..Default::default()
        };
        let results = search("TTAC", sequence, &[], options);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].position, 0);
        assert_eq!(results[0].name, "Sequence match");
        assert_eq!(results[1].position, 8);
        assert_eq!(results[1].name, "Reverse complement match");
    }

    #[test]
    fn test_results_sorted_by_position() {
        let annotations = vec![cds("xyzB", "widget", 900, 950), cds("xyzA", "widget", 10, 50)];
        let results = search("widget", "", &annotations, SearchOptions::default());
        assert_eq!(results[0].position, 10);
        assert_eq!(results[1].position, 900);
    }

    #[test]
    fn test_n_query_searches_forward_only() {
        let options = SearchOptions {
            include_reverse_complement: true,
            ..Default::default()
        };
        // Query with N is DNA-like but not strict ATGC, so no RC pass
        let results = search("ACGN", "ACGN", &[], options);
        assert_eq!(results.len(), 1);
    }
}
